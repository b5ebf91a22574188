//! Cache module - Redis client and cooldown keys

pub mod cooldown_cache;
pub mod redis_client;

pub use cooldown_cache::RedisCooldownStore;
pub use redis_client::RedisClient;
