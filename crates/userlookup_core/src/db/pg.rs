//! PostgreSQL connection open/close.
//!
//! # Invariants
//! - The returned client has completed the startup handshake; an unreachable
//!   or rejecting server fails here, before any query is issued.
//! - The password is never part of emitted events.

use super::DbResult;
use crate::config::DbConfig;
use log::{error, info};
use postgres::{Client, NoTls};
use std::time::Instant;

/// Connects to PostgreSQL using the given descriptor.
///
/// TLS is not negotiated: `sslmode=require` fails at connect time.
///
/// # Side effects
/// - Opens one network connection owned by the returned `Client`.
/// - Emits `db_open` logging events with duration and status.
pub fn open_postgres(config: &DbConfig) -> DbResult<Client> {
    let started_at = Instant::now();
    let descriptor = config.redacted_descriptor();
    info!("event=db_open module=db status=start backend=postgres {descriptor}");

    match config.to_postgres_config().connect(NoTls) {
        Ok(client) => {
            info!(
                "event=db_open module=db status=ok backend=postgres duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(client)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error backend=postgres duration_ms={} error_code=db_connect_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Terminates the session and releases the connection.
///
/// Consumes the client, so the same handle cannot be closed twice.
pub fn close_postgres(client: Client) -> DbResult<()> {
    match client.close() {
        Ok(()) => {
            info!("event=db_close module=db status=ok backend=postgres");
            Ok(())
        }
        Err(err) => {
            error!(
                "event=db_close module=db status=error backend=postgres error_code=db_close_failed error={}",
                err
            );
            Err(err.into())
        }
    }
}
