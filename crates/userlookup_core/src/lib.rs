//! Core lookup logic for userlookup.
//! Configuration, connection bootstrap, repository and service layers.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ConfigResult, DbConfig, SslMode};
pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::user::UserId;
pub use repo::pg_user_repo::PostgresUserRepository;
pub use repo::sqlite_user_repo::SqliteUserRepository;
pub use repo::user_repo::{RepoError, RepoResult, UserRepository};
pub use service::user_service::UserService;

