// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        challenge::ChallengeVerifier, cooldown::CooldownStore, time::Clock,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) cooldowns: Arc<dyn CooldownStore>,
    pub(super) challenge: Arc<dyn ChallengeVerifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        cooldowns: Arc<dyn CooldownStore>,
        challenge: Arc<dyn ChallengeVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            cooldowns,
            challenge,
            clock,
        }
    }
}
