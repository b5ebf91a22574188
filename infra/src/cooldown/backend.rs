//! Runtime-selected cooldown store
//!
//! `COOLDOWN_STORE` picks the backend at startup; the service stays generic
//! over one concrete type.

use async_trait::async_trait;
use tracing::info;

use vr_core::errors::CooldownStoreError;
use vr_core::services::CooldownStoreTrait;
use vr_shared::config::{AppConfig, CooldownStoreKind};

use super::memory::InMemoryCooldownStore;
use crate::InfrastructureError;

#[cfg(feature = "redis-cache")]
use crate::cache::{RedisClient, RedisCooldownStore};
#[cfg(feature = "mysql")]
use crate::database::{DatabasePool, MySqlCooldownStore};

/// One of the available cooldown stores
pub enum CooldownStoreBackend {
    #[cfg(feature = "mysql")]
    MySql(MySqlCooldownStore),
    #[cfg(feature = "redis-cache")]
    Redis(RedisCooldownStore),
    Memory(InMemoryCooldownStore),
}

impl CooldownStoreBackend {
    /// Connect the store named by `config.cooldown.store`.
    ///
    /// The MySQL backend creates its table when missing.
    pub async fn connect(config: &AppConfig) -> Result<Self, InfrastructureError> {
        match config.cooldown.store {
            CooldownStoreKind::MySql => Self::connect_mysql(config).await,
            CooldownStoreKind::Redis => Self::connect_redis(config).await,
            CooldownStoreKind::Memory => {
                info!("Using in-memory cooldown store");
                Ok(Self::Memory(InMemoryCooldownStore::new()))
            }
        }
    }

    #[cfg(feature = "mysql")]
    async fn connect_mysql(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let database = config
            .database
            .as_ref()
            .ok_or_else(|| InfrastructureError::Config("DATABASE_URL is not set".to_string()))?;
        let pool = DatabasePool::new(database).await?;
        let store = MySqlCooldownStore::new(pool.get_pool().clone());
        store.ensure_schema().await?;
        info!("Using MySQL cooldown store");
        Ok(Self::MySql(store))
    }

    #[cfg(not(feature = "mysql"))]
    async fn connect_mysql(_config: &AppConfig) -> Result<Self, InfrastructureError> {
        Err(InfrastructureError::Config(
            "MySQL cooldown store requires the `mysql` feature".to_string(),
        ))
    }

    #[cfg(feature = "redis-cache")]
    async fn connect_redis(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let cache = config
            .cache
            .as_ref()
            .ok_or_else(|| InfrastructureError::Config("REDIS_URL is not set".to_string()))?;
        let client = RedisClient::new(cache).await?;
        info!("Using Redis cooldown store");
        Ok(Self::Redis(RedisCooldownStore::new(client)))
    }

    #[cfg(not(feature = "redis-cache"))]
    async fn connect_redis(_config: &AppConfig) -> Result<Self, InfrastructureError> {
        Err(InfrastructureError::Config(
            "Redis cooldown store requires the `redis-cache` feature".to_string(),
        ))
    }

    /// Short backend name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "mysql")]
            Self::MySql(_) => "mysql",
            #[cfg(feature = "redis-cache")]
            Self::Redis(_) => "redis",
            Self::Memory(_) => "memory",
        }
    }
}

impl From<InMemoryCooldownStore> for CooldownStoreBackend {
    fn from(store: InMemoryCooldownStore) -> Self {
        Self::Memory(store)
    }
}

#[async_trait]
impl CooldownStoreTrait for CooldownStoreBackend {
    async fn read_last_sent(&self, user_id: &str) -> Result<Option<i64>, CooldownStoreError> {
        match self {
            #[cfg(feature = "mysql")]
            Self::MySql(store) => store.read_last_sent(user_id).await,
            #[cfg(feature = "redis-cache")]
            Self::Redis(store) => store.read_last_sent(user_id).await,
            Self::Memory(store) => store.read_last_sent(user_id).await,
        }
    }

    async fn record_sent(
        &self,
        user_id: &str,
        sent_at_millis: i64,
    ) -> Result<(), CooldownStoreError> {
        match self {
            #[cfg(feature = "mysql")]
            Self::MySql(store) => store.record_sent(user_id, sent_at_millis).await,
            #[cfg(feature = "redis-cache")]
            Self::Redis(store) => store.record_sent(user_id, sent_at_millis).await,
            Self::Memory(store) => store.record_sent(user_id, sent_at_millis).await,
        }
    }
}
