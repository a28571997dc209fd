// tests/support/mocks/comment_repo.rs
use async_trait::async_trait;
use caderno_core::domain::article::ArticleId;
use caderno_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use caderno_core::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

#[derive(Default)]
pub struct InMemoryComments {
    comments: Mutex<Vec<Comment>>,
    inserts: AtomicUsize,
    fail_inserts: AtomicBool,
}

impl InMemoryComments {
    pub fn all(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn fail_inserts(&self, failing: bool) {
        self.fail_inserts.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database unavailable".into()));
        }
        let mut comments = self.comments.lock().unwrap();
        let id = comments.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let stored = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author_name: comment.author_name,
            author_contact: comment.author_contact,
            body: comment.body,
            is_anonymous: comment.is_anonymous,
            created_at: comment.created_at,
        };
        comments.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .all()
            .into_iter()
            .filter(|c| c.article_id == article_id)
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        Ok(comments)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
