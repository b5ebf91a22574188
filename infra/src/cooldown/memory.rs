//! In-memory cooldown store
//!
//! Entries live in the process and vanish on restart, so this store only
//! limits resends within a single instance.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use vr_core::errors::CooldownStoreError;
use vr_core::services::CooldownStoreTrait;

/// Process-local cooldown map keyed by user id
#[derive(Debug, Default)]
pub struct InMemoryCooldownStore {
    entries: RwLock<HashMap<String, i64>>,
}

impl InMemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a recorded send
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CooldownStoreTrait for InMemoryCooldownStore {
    async fn read_last_sent(&self, user_id: &str) -> Result<Option<i64>, CooldownStoreError> {
        Ok(self.entries.read().await.get(user_id).copied())
    }

    async fn record_sent(
        &self,
        user_id: &str,
        sent_at_millis: i64,
    ) -> Result<(), CooldownStoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(user_id.to_string()).or_insert(sent_at_millis);
        // Never move a timestamp backwards
        *entry = (*entry).max(sent_at_millis);
        Ok(())
    }
}
