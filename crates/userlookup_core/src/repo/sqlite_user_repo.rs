//! SQLite-backed user repository.
//!
//! Runs the same projection as the PostgreSQL repository against an embedded
//! database. The caller owns the `users` table.

use crate::db::DbError;
use crate::model::user::UserId;
use crate::repo::user_repo::{log_lookup, RepoError, RepoResult, UserRepository};
use rusqlite::{params, Connection};
use std::time::Instant;

pub(crate) const USER_BY_ID_SQL: &str = "SELECT username FROM users WHERE id = ?1";

/// User repository bound to one SQLite connection.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn get_user_by_id(&mut self, id: UserId) -> RepoResult<String> {
        let started_at = Instant::now();
        let result = query_username(self.conn, id);
        log_lookup("sqlite", id, started_at, &result);
        result
    }
}

fn query_username(conn: &Connection, id: UserId) -> RepoResult<String> {
    let mut stmt = conn.prepare_cached(USER_BY_ID_SQL)?;
    let mut rows = stmt.query(params![id])?;
    let username = match rows.next()? {
        Some(row) => row.get::<_, String>(0)?,
        None => return Err(RepoError::NotFound(id)),
    };
    if rows.next()?.is_some() {
        return Err(DbError::UnexpectedRowCount.into());
    }
    Ok(username)
}
