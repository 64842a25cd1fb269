use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::db;
use crate::users::repo::{PgUserStore, UserStore};

/// Shared handler state. Cloned per request; the store behind it owns the pool.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub async fn init(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = db::connect_pool(config).await?;
        let users = Arc::new(PgUserStore::new(pool)) as Arc<dyn UserStore>;
        Ok(Self::from_parts(users))
    }

    pub fn from_parts(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::users::repo::memory::MemoryUserStore;
        Self::fake_with(Arc::new(MemoryUserStore::default()))
    }

    #[cfg(test)]
    pub fn fake_with(users: Arc<dyn UserStore>) -> Self {
        Self::from_parts(users)
    }
}
