//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the user lookup contract.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Identifiers are always passed as bound parameters.
//! - Repository APIs return a semantic `NotFound` error in addition to query
//!   failures.

pub mod pg_user_repo;
pub mod sqlite_user_repo;
pub mod user_repo;
