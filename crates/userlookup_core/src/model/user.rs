//! User domain model.
//!
//! A user row is owned by the external database. This crate only reads the
//! `username` projection of one row keyed by `id`.

/// Primary key of the `users` table.
///
/// Any value is accepted; range checks are left to the database.
pub type UserId = i64;
