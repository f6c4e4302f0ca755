//! PostgreSQL-backed user repository.
//!
//! # Invariants
//! - `id` travels as a bound `$1` parameter; the cast keeps `i64` binding
//!   valid against both `INTEGER` and `BIGINT` key columns.
//! - More than one matching row is reported as a query error.

use crate::model::user::UserId;
use crate::repo::user_repo::{log_lookup, RepoError, RepoResult, UserRepository};
use postgres::Client;
use std::time::Instant;

pub(crate) const USER_BY_ID_SQL: &str = "SELECT username FROM users WHERE id = $1::BIGINT";

/// User repository bound to one PostgreSQL client.
pub struct PostgresUserRepository<'conn> {
    client: &'conn mut Client,
}

impl<'conn> PostgresUserRepository<'conn> {
    pub fn new(client: &'conn mut Client) -> Self {
        Self { client }
    }
}

impl UserRepository for PostgresUserRepository<'_> {
    fn get_user_by_id(&mut self, id: UserId) -> RepoResult<String> {
        let started_at = Instant::now();
        let result = query_username(self.client, id);
        log_lookup("postgres", id, started_at, &result);
        result
    }
}

fn query_username(client: &mut Client, id: UserId) -> RepoResult<String> {
    let row = client
        .query_opt(USER_BY_ID_SQL, &[&id])?
        .ok_or(RepoError::NotFound(id))?;
    Ok(row.try_get::<_, String>(0)?)
}
