//! [`Comment`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use super::link;
#[cfg(doc)]
use super::Link;

/// Comment posted to a [`Link`].
#[derive(Clone, Debug)]
pub struct Comment {
    /// ID of this [`Comment`].
    pub id: Id,

    /// [`Text`] of this [`Comment`].
    pub text: Text,

    /// [`link::Id`] of the [`Link`] this [`Comment`] is posted to.
    pub link_id: link::Id,
}

/// Blueprint of a [`Comment`] before the storage engine assigns it an [`Id`].
#[derive(Clone, Debug)]
pub struct New {
    /// [`Text`] of a new [`Comment`].
    pub text: Text,

    /// [`link::Id`] of the [`Link`] to post a new [`Comment`] to.
    pub link_id: link::Id,
}

/// ID of a [`Comment`].
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

/// Text of a [`Comment`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Text(String);
