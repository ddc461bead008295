//! Database module for the MySQL catalog store
//!
//! Holds pool construction and the read-only book repository.

mod books;

pub use books::*;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Upper bound on concurrent store connections
const POOL_SIZE: u32 = 4;

/// Create the catalog connection pool.
///
/// Connections are established on first use; `ping` decides whether the
/// store is actually reachable before the server starts listening.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password);

    MySqlPoolOptions::new()
        .max_connections(POOL_SIZE)
        .connect_lazy_with(options)
}

/// Verify the store answers
pub async fn ping(pool: &MySqlPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
