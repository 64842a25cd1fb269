use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

pub async fn connect_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
        .with_context(|| {
            format!(
                "connect to database {} at {}:{}",
                config.name, config.host, config.port
            )
        })?;
    tracing::info!(host = %config.host, port = config.port, db = %config.name, "database pool ready");
    Ok(pool)
}
