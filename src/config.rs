use anyhow::{anyhow, bail, Context};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub app_host: String,
    pub app_port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Every `DB_*` connection
    /// parameter is required; only the server address and pool size have defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("missing required environment variable {key}"))
        };

        let host = required("DB_HOST")?;
        let port = parse_port("DB_PORT", &required("DB_PORT")?)?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;
        let name = required("DB_NAME")?;

        let ssl_mode = match lookup("DB_SSLMODE") {
            Some(v) => v
                .parse::<PgSslMode>()
                .with_context(|| format!("invalid DB_SSLMODE {v:?}"))?,
            None => PgSslMode::Disable,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => parse_max_connections(&v)?,
            None => 10,
        };

        let app_host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let app_port = match lookup("APP_PORT") {
            Some(v) => parse_port("APP_PORT", &v)?,
            None => 8080,
        };

        Ok(Self {
            database: DatabaseConfig {
                host,
                port,
                user,
                password,
                name,
                ssl_mode,
                max_connections,
            },
            app_host,
            app_port,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

fn parse_port(key: &str, value: &str) -> anyhow::Result<u16> {
    value
        .parse::<u16>()
        .with_context(|| format!("{key} must be a port number, got {value:?}"))
}

fn parse_max_connections(value: &str) -> anyhow::Result<u32> {
    let n = value
        .parse::<u32>()
        .with_context(|| format!("DB_MAX_CONNECTIONS must be a positive integer, got {value:?}"))?;
    if n == 0 {
        bail!("DB_MAX_CONNECTIONS must be at least 1");
    }
    Ok(n)
}
