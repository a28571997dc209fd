// src/application/ports/cooldown.rs
use crate::application::{ApplicationResult, dto::VisitorKey};
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable per-visitor, per-article "last comment at" markers.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    async fn last_submission(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
    ) -> ApplicationResult<Option<DateTime<Utc>>>;

    async fn record_submission(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
        at: DateTime<Utc>,
    ) -> ApplicationResult<()>;
}
