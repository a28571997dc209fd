// tests/support/mocks/cooldown.rs
use async_trait::async_trait;
use caderno_core::application::{
    ApplicationResult, dto::VisitorKey, error::ApplicationError, ports::cooldown::CooldownStore,
};
use caderno_core::domain::article::ArticleId;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reads find no marker and every write fails, like an unreachable Redis.
#[derive(Default)]
pub struct UnavailableCooldowns {
    failed_writes: AtomicUsize,
}

impl UnavailableCooldowns {
    pub fn failed_writes(&self) -> usize {
        self.failed_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CooldownStore for UnavailableCooldowns {
    async fn last_submission(
        &self,
        _visitor: &VisitorKey,
        _article: ArticleId,
    ) -> ApplicationResult<Option<DateTime<Utc>>> {
        Ok(None)
    }

    async fn record_submission(
        &self,
        _visitor: &VisitorKey,
        _article: ArticleId,
        _at: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        self.failed_writes.fetch_add(1, Ordering::SeqCst);
        Err(ApplicationError::infrastructure("redis down"))
    }
}
