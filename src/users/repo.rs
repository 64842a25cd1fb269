use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::User;

/// Persistence seam for the user endpoints. Production uses [`PgUserStore`];
/// handler tests swap in an in-memory store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, email: &str, password: &str) -> anyhow::Result<()>;
    async fn list(&self) -> anyhow::Result<Vec<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    /// Insert a user with the password as given (no hashing).
    async fn insert(&self, email: &str, password: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            "#,
        )
        .bind(email)
        .bind(password)
        .execute(&self.db)
        .await
        .context("insert user")?;
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, created_at, updated_at
              FROM users
             ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        Ok(users)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::sync::Mutex;

    use time::OffsetDateTime;

    use super::*;

    #[derive(Default)]
    pub struct MemoryUserStore {
        rows: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn insert(&self, email: &str, password: &str) -> anyhow::Result<()> {
            let mut rows = self.rows.lock().unwrap();
            let now = OffsetDateTime::now_utc();
            let id = rows.len() as i64 + 1;
            rows.push(User {
                id,
                email: email.to_string(),
                password: password.to_string(),
                created_at: now,
                updated_at: now,
            });
            Ok(())
        }

        async fn list(&self) -> anyhow::Result<Vec<User>> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    /// Store whose every call fails, for exercising the 500 paths.
    pub struct BrokenUserStore;

    #[async_trait]
    impl UserStore for BrokenUserStore {
        async fn insert(&self, _email: &str, _password: &str) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }

        async fn list(&self) -> anyhow::Result<Vec<User>> {
            anyhow::bail!("connection refused")
        }
    }
}
