// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type CommentRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-address limiter for comment submission: one token every 2 seconds,
/// bursts of 5. The 60 second cooldown is enforced separately by the
/// application layer; this only absorbs floods.
pub fn comment_rate_limit() -> Option<CommentRateLimit> {
    static RATE_LIMITER: OnceLock<Option<CommentRateLimit>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(5);
            builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .map(GovernorLayer::new)
        })
        .clone()
}
