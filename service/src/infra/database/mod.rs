//! [`Database`]-related implementations.

#[cfg(feature = "postgres")]
pub mod postgres;

use derive_more::{AsRef, Display, Error as StdError, From, Into};

#[cfg(feature = "postgres")]
pub use self::postgres::Postgres;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
///
/// Constraint violations are classified into dedicated variants at this
/// boundary, so upper layers match on variants rather than on engine-specific
/// codes.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Violation of a foreign key [`Constraint`].
    #[display("foreign key constraint `{_0}` is violated")]
    ForeignKeyViolation(#[error(not(source))] Constraint),

    #[cfg(feature = "postgres")]
    /// Unclassified [`Postgres`] error.
    #[display("{_0}")]
    Postgres(postgres::Error),
}

/// Name of a [`Database`] constraint.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Constraint(String);
