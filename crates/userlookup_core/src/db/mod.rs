//! Connection bootstrap for the relational backends.
//!
//! # Responsibility
//! - Open and release connection handles for PostgreSQL and embedded SQLite.
//! - Map driver failures into one connection-level error type.
//!
//! # Invariants
//! - Closing a handle consumes it; a handle is released exactly once.
//! - Nothing here creates or migrates the `users` table.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod pg;
mod sqlite;

pub use self::pg::{close_postgres, open_postgres};
pub use self::sqlite::{close_sqlite, open_sqlite, open_sqlite_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Postgres(postgres::Error),
    Sqlite(rusqlite::Error),
    /// A single-row query matched more than one row.
    UnexpectedRowCount,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnexpectedRowCount => write!(f, "query returned more than one row"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Postgres(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::UnexpectedRowCount => None,
        }
    }
}

impl From<postgres::Error> for DbError {
    fn from(value: postgres::Error) -> Self {
        Self::Postgres(value)
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
