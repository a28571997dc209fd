// src/infrastructure/cooldown/redis_store.rs
use super::marker_key;
use crate::application::{
    ApplicationResult, dto::VisitorKey, error::ApplicationError, ports::cooldown::CooldownStore,
};
use crate::domain::{article::ArticleId, comment::COMMENT_COOLDOWN_SECS};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

/// Markers outlive the cooldown window by this factor, then expire.
const MARKER_TTL_FACTOR: u64 = 2;

#[derive(Clone)]
pub struct RedisCooldownStore {
    pool: Pool,
}

impl RedisCooldownStore {
    /// Build a pool from a redis URL (e.g. `redis://:password@host:6379/0`).
    pub fn from_url(url: &str) -> ApplicationResult<Self> {
        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl CooldownStore for RedisCooldownStore {
    async fn last_submission(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
    ) -> ApplicationResult<Option<DateTime<Utc>>> {
        let mut conn = self.connection().await?;
        let millis: Option<i64> = conn
            .get(marker_key(visitor, article))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(millis.and_then(|ms| Utc.timestamp_millis_opt(ms).single()))
    }

    async fn record_submission(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
        at: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        let ttl = u64::from(COMMENT_COOLDOWN_SECS) * MARKER_TTL_FACTOR;
        conn.set_ex::<_, _, ()>(marker_key(visitor, article), at.timestamp_millis(), ttl)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!(article_id = %article, "cooldown marker stored");
        Ok(())
    }
}
