//! Redis client with startup connection retry
//!
//! The multiplexed connection is cheap to clone; every clone shares the
//! same underlying socket.

use redis::{aio::MultiplexedConnection, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use vr_shared::config::CacheConfig;

use crate::InfrastructureError;

const CONNECT_ATTEMPTS: u32 = 3;
const CONNECT_RETRY_DELAY_MS: u64 = 100;

/// Redis client holding one multiplexed connection
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
    key_prefix: String,
}

impl RedisClient {
    /// Connect to Redis, retrying a few times with backoff
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::connect_with_retry(client).await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            key_prefix: config.key_prefix.clone(),
        })
    }

    async fn connect_with_retry(
        client: Client,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = CONNECT_RETRY_DELAY_MS;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => return Ok(connection),
                Err(e) if attempts < CONNECT_ATTEMPTS => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, CONNECT_ATTEMPTS, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts, e
                    );
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// A handle on the shared connection
    pub fn connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// PING the server
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection();
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong == "PONG")
    }
}

/// Hide credentials in a connection URL before logging it
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
