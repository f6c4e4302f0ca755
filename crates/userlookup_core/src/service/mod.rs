//! Core use-case services.
//!
//! # Responsibility
//! - Expose repository capabilities under application-facing names.
//! - Keep the entry point decoupled from storage details.

pub mod user_service;
