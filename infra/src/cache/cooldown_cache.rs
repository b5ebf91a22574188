//! Redis implementation of the CooldownStoreTrait.
//!
//! Entries live under `{prefix}:{user_id}` as decimal millisecond strings.
//! Writes go through a Lua script so a stored value only ever grows.

use async_trait::async_trait;
use redis::{AsyncCommands, Script};

use vr_core::errors::CooldownStoreError;
use vr_core::services::CooldownStoreTrait;

use super::redis_client::RedisClient;

const RECORD_MAX_SCRIPT: &str = r#"
local current = tonumber(redis.call('GET', KEYS[1]))
local incoming = tonumber(ARGV[1])
if current == nil or incoming > current then
    redis.call('SET', KEYS[1], ARGV[1])
end
return 1
"#;

/// Redis-backed cooldown store
pub struct RedisCooldownStore {
    client: RedisClient,
    record_script: Script,
}

impl RedisCooldownStore {
    pub fn new(client: RedisClient) -> Self {
        Self {
            client,
            record_script: Script::new(RECORD_MAX_SCRIPT),
        }
    }

    fn key(&self, user_id: &str) -> String {
        cooldown_key(self.client.key_prefix(), user_id)
    }
}

pub(crate) fn cooldown_key(prefix: &str, user_id: &str) -> String {
    format!("{}:{}", prefix, user_id)
}

#[async_trait]
impl CooldownStoreTrait for RedisCooldownStore {
    async fn read_last_sent(&self, user_id: &str) -> Result<Option<i64>, CooldownStoreError> {
        let mut conn = self.client.connection();
        let raw: Option<String> = conn.get(self.key(user_id)).await.map_err(|e| {
            CooldownStoreError::Unavailable(format!("Failed to read cooldown: {}", e))
        })?;

        match raw {
            Some(value) => value.parse::<i64>().map(Some).map_err(|e| {
                CooldownStoreError::Unavailable(format!(
                    "Corrupt cooldown value '{}': {}",
                    value, e
                ))
            }),
            None => Ok(None),
        }
    }

    async fn record_sent(
        &self,
        user_id: &str,
        sent_at_millis: i64,
    ) -> Result<(), CooldownStoreError> {
        let mut conn = self.client.connection();
        self.record_script
            .key(self.key(user_id))
            .arg(sent_at_millis)
            .invoke_async::<_, i64>(&mut conn)
            .await
            .map_err(|e| {
                CooldownStoreError::Unavailable(format!("Failed to record cooldown: {}", e))
            })?;
        Ok(())
    }
}
