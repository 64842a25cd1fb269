use anyhow::Context;
use sqlx::{migrate::Migrator, postgres::PgConnectOptions, Connection, PgConnection};

use crate::config::DatabaseConfig;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies every pending migration over a dedicated connection.
/// Already-applied migrations are skipped, so an up-to-date database is a no-op.
pub async fn run(config: &DatabaseConfig) -> anyhow::Result<()> {
    run_with(&config.connect_options()).await
}

pub async fn run_with(options: &PgConnectOptions) -> anyhow::Result<()> {
    let mut conn = PgConnection::connect_with(options)
        .await
        .context("connect to database for migrations")?;

    MIGRATOR
        .run(&mut conn)
        .await
        .context("apply migrations")?;

    conn.close().await.context("close migration connection")?;

    tracing::info!(known = MIGRATOR.iter().count(), "migrations applied");
    Ok(())
}
