// src/infrastructure/cooldown/mod.rs
mod memory;
mod redis_store;

pub use memory::InMemoryCooldownStore;
pub use redis_store::RedisCooldownStore;

use crate::{application::dto::VisitorKey, domain::article::ArticleId};

fn marker_key(visitor: &VisitorKey, article: ArticleId) -> String {
    format!("comment:last:{}:{}", visitor.as_str(), article)
}
