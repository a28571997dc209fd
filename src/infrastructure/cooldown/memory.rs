// src/infrastructure/cooldown/memory.rs
use super::marker_key;
use crate::application::{
    ApplicationResult, dto::VisitorKey, error::ApplicationError, ports::cooldown::CooldownStore,
};
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local markers, used when no Redis URL is configured. Markers are
/// lost on restart.
#[derive(Default)]
pub struct InMemoryCooldownStore {
    markers: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ApplicationError {
    ApplicationError::infrastructure("cooldown store lock poisoned")
}

#[async_trait]
impl CooldownStore for InMemoryCooldownStore {
    async fn last_submission(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
    ) -> ApplicationResult<Option<DateTime<Utc>>> {
        let guard = self.markers.lock().map_err(poisoned)?;
        Ok(guard.get(&marker_key(visitor, article)).copied())
    }

    async fn record_submission(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
        at: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        let mut guard = self.markers.lock().map_err(poisoned)?;
        guard.insert(marker_key(visitor, article), at);
        Ok(())
    }
}
