//! Domain model types.
//!
//! # Responsibility
//! - Define the identifiers shared by repository and service layers.

pub mod user;
