use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::user_keys;
use crate::cache::models::user::CachedUser;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value store for user records.
#[async_trait]
pub trait UserCache: Send + Sync {
    /// `Ok(None)` when no record exists for `user_id`.
    async fn get_user(&self, user_id: &str) -> Result<Option<CachedUser>, CacheError>;

    async fn set_user(&self, user: &CachedUser) -> Result<(), CacheError>;
}

/// 用户缓存操作
#[derive(Clone)]
pub struct RedisUserCache {
    redis: RedisClient,
    ttl: Option<Duration>,
}

impl RedisUserCache {
    pub fn new(redis: RedisClient, ttl: Option<Duration>) -> Self {
        Self { redis, ttl }
    }

    /// Opens the client and checks the server answers before handing it out.
    pub async fn connect(url: &str, ttl: Option<Duration>) -> Result<Self, CacheError> {
        let redis = RedisClient::open(url)?;
        let mut conn = redis.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        tracing::info!("Connected to Redis at {}", url);
        Ok(Self::new(redis, ttl))
    }

    fn expiry_secs(&self) -> Option<u64> {
        self.ttl.map(|ttl| ttl.as_secs().max(1))
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn get_user(&self, user_id: &str) -> Result<Option<CachedUser>, CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let key = user_keys::user_key(user_id);
        let result: Option<String> = conn.get(key).await?;

        match result {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn set_user(&self, user: &CachedUser) -> Result<(), CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let key = user_keys::user_key(&user.id);
        let json = serde_json::to_string(user)?;

        match self.expiry_secs() {
            Some(secs) => {
                let _: () = conn.set_ex(key, json, secs).await?;
            }
            None => {
                let _: () = conn.set(key, json).await?;
            }
        }

        tracing::debug!("Cached user {}", user.id);
        Ok(())
    }
}
