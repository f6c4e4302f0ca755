//! User repository contract and error type.
//!
//! # Responsibility
//! - Provide the single lookup API callers use to resolve a username.
//! - Keep "no such row" distinguishable from execution failures.
//!
//! # Invariants
//! - Exactly one read query per lookup; no writes, caching or retries.
//! - A missing row is always `NotFound`, never an empty username.

use crate::db::DbError;
use crate::model::user::UserId;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for user lookup operations.
#[derive(Debug)]
pub enum RepoError {
    /// No row in `users` has the requested id.
    NotFound(UserId),
    /// The query could not be executed or its row could not be decoded.
    Query(DbError),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::Query(err) => write!(f, "user query failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Query(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Query(value)
    }
}

impl From<postgres::Error> for RepoError {
    fn from(value: postgres::Error) -> Self {
        Self::Query(DbError::Postgres(value))
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(DbError::Sqlite(value))
    }
}

/// Repository interface for user lookups.
pub trait UserRepository {
    /// Returns the stored username for `id`.
    fn get_user_by_id(&mut self, id: UserId) -> RepoResult<String>;
}

impl<R: UserRepository + ?Sized> UserRepository for &mut R {
    fn get_user_by_id(&mut self, id: UserId) -> RepoResult<String> {
        (**self).get_user_by_id(id)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Box<R> {
    fn get_user_by_id(&mut self, id: UserId) -> RepoResult<String> {
        (**self).get_user_by_id(id)
    }
}

/// Emits the `user_lookup` event for one finished lookup.
pub(crate) fn log_lookup(
    backend: &str,
    id: UserId,
    started_at: Instant,
    result: &RepoResult<String>,
) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(_) => debug!(
            "event=user_lookup module=repo status=ok backend={backend} id={id} duration_ms={duration_ms}"
        ),
        Err(RepoError::NotFound(_)) => debug!(
            "event=user_lookup module=repo status=not_found backend={backend} id={id} duration_ms={duration_ms}"
        ),
        Err(RepoError::Query(err)) => warn!(
            "event=user_lookup module=repo status=error backend={backend} id={id} duration_ms={duration_ms} error={err}"
        ),
    }
}
