// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::render::ContentRenderer, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) renderer: Arc<dyn ContentRenderer>,
    /// Public prefix of stored objects, used to build optimised cover URLs.
    pub(super) storage_base: String,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        renderer: Arc<dyn ContentRenderer>,
        storage_base: impl Into<String>,
    ) -> Self {
        Self {
            read_repo,
            renderer,
            storage_base: storage_base.into(),
        }
    }
}
