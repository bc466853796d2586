//! [`Link`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Link submitted to the aggregator.
#[derive(Clone, Debug)]
pub struct Link {
    /// ID of this [`Link`].
    pub id: Id,

    /// [`Description`] of this [`Link`].
    pub description: Description,

    /// [`Url`] of this [`Link`].
    pub url: Url,
}

/// Blueprint of a [`Link`] before the storage engine assigns it an [`Id`].
#[derive(Clone, Debug)]
pub struct New {
    /// [`Description`] of a new [`Link`].
    pub description: Description,

    /// [`Url`] of a new [`Link`].
    pub url: Url,
}

/// ID of a [`Link`].
///
/// Assigned by the storage engine on creation, and is immutable afterwards.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Description of a [`Link`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Description(String);

/// URL of a [`Link`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Url(String);

#[cfg(test)]
mod spec {
    use super::Id;

    #[test]
    fn parses_from_numeric_text() {
        assert_eq!("1".parse::<Id>().unwrap(), Id::from(1));
        assert_eq!("999".parse::<Id>().unwrap(), Id::from(999));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!("".parse::<Id>().is_err());
        assert!("abc".parse::<Id>().is_err());
        assert!("1.5".parse::<Id>().is_err());
    }

    #[test]
    fn displays_as_numeric_text() {
        assert_eq!(Id::from(42).to_string(), "42");
    }
}
