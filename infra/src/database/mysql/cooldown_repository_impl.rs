//! MySQL implementation of the CooldownStoreTrait.
//!
//! One row per user in `verification_resends`. The upsert keeps the larger
//! timestamp, so a late write from a slower request cannot roll an entry back.
//! The row alias in the upsert needs MySQL 8.0.19 or later.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use vr_core::errors::CooldownStoreError;
use vr_core::services::CooldownStoreTrait;

use crate::InfrastructureError;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS verification_resends (
        user_id VARCHAR(255) NOT NULL PRIMARY KEY,
        last_sent_timestamp BIGINT NOT NULL,
        updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
    )
"#;

const SELECT_LAST_SENT: &str = r#"
    SELECT last_sent_timestamp
    FROM verification_resends
    WHERE user_id = ?
    LIMIT 1
"#;

const UPSERT_LAST_SENT: &str = r#"
    INSERT INTO verification_resends (user_id, last_sent_timestamp)
    VALUES (?, ?) AS incoming
    ON DUPLICATE KEY UPDATE
        last_sent_timestamp = GREATEST(
            verification_resends.last_sent_timestamp,
            incoming.last_sent_timestamp
        )
"#;

/// MySQL implementation of CooldownStoreTrait
pub struct MySqlCooldownStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCooldownStore {
    /// Create a new MySQL cooldown store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the cooldown table when it does not exist
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::info!("Cooldown table verification_resends is ready");
        Ok(())
    }
}

#[async_trait]
impl CooldownStoreTrait for MySqlCooldownStore {
    async fn read_last_sent(&self, user_id: &str) -> Result<Option<i64>, CooldownStoreError> {
        let row = sqlx::query(SELECT_LAST_SENT)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                CooldownStoreError::Unavailable(format!("Failed to read cooldown: {}", e))
            })?;

        match row {
            Some(row) => row
                .try_get::<i64, _>("last_sent_timestamp")
                .map(Some)
                .map_err(|e| {
                    CooldownStoreError::Unavailable(format!(
                        "Failed to get last_sent_timestamp: {}",
                        e
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
        sqlx::query(UPSERT_LAST_SENT)
            .bind(user_id)
            .bind(sent_at_millis)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                CooldownStoreError::Unavailable(format!("Failed to record cooldown: {}", e))
            })?;

        Ok(())
    }
}
