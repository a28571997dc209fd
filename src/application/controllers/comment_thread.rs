// src/application/controllers/comment_thread.rs
use std::sync::Arc;

use tokio::sync::watch;

use super::CooldownTimer;
use crate::{
    application::{
        commands::comments::{CommentCommandService, DeleteCommentCommand, SubmitCommentCommand},
        context::AuthContext,
        dto::{CommentDto, VisitorKey},
        error::{ApplicationError, ApplicationResult},
        queries::comments::CommentQueryService,
    },
    domain::{article::ArticleId, comment::COMMENT_COOLDOWN_SECS},
};

/// Fields of the comment form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub body: String,
    pub anonymous: bool,
    pub challenge_token: Option<String>,
}

impl CommentForm {
    fn has_token(&self) -> bool {
        self.challenge_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    fn optional(value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Comment list, form and cooldown of one article as seen by one visitor.
pub struct CommentThread {
    article_id: ArticleId,
    visitor: VisitorKey,
    remote_ip: Option<String>,
    commands: Arc<CommentCommandService>,
    queries: Arc<CommentQueryService>,
    form: CommentForm,
    comments: Vec<CommentDto>,
    timer: CooldownTimer,
}

impl CommentThread {
    /// Load the comments and restore the cooldown from the stored
    /// last-submission marker, so reloading the view does not reset it.
    pub async fn mount(
        article_id: ArticleId,
        visitor: VisitorKey,
        remote_ip: Option<String>,
        commands: Arc<CommentCommandService>,
        queries: Arc<CommentQueryService>,
    ) -> ApplicationResult<Self> {
        let remaining = commands.cooldown_remaining(&visitor, article_id).await?;
        let comments = queries.list_for_article(article_id.into()).await?;
        Ok(Self {
            article_id,
            visitor,
            remote_ip,
            commands,
            queries,
            form: CommentForm::default(),
            comments,
            timer: CooldownTimer::start(remaining),
        })
    }

    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub fn comments(&self) -> &[CommentDto] {
        &self.comments
    }

    pub fn form(&self) -> &CommentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CommentForm {
        &mut self.form
    }

    pub fn cooldown(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn cooldown_updates(&self) -> watch::Receiver<u32> {
        self.timer.subscribe()
    }

    pub fn can_submit(&self) -> bool {
        !self.form.body.trim().is_empty() && self.form.has_token() && self.cooldown() == 0
    }

    /// Local checks run first and never touch a collaborator. A collaborator
    /// failure leaves the form as it was.
    pub async fn submit(&mut self) -> ApplicationResult<CommentDto> {
        if self.form.body.trim().is_empty() {
            return Err(ApplicationError::validation("comment cannot be empty"));
        }
        if !self.form.has_token() {
            return Err(ApplicationError::validation("bot challenge is required"));
        }
        let remaining = self.cooldown();
        if remaining > 0 {
            return Err(ApplicationError::cooldown(remaining));
        }

        let command = SubmitCommentCommand {
            article_id: self.article_id.into(),
            visitor: self.visitor.clone(),
            name: CommentForm::optional(&self.form.name),
            email: CommentForm::optional(&self.form.email),
            body: self.form.body.clone(),
            anonymous: self.form.anonymous,
            challenge_token: self.form.challenge_token.clone(),
            remote_ip: self.remote_ip.clone(),
        };

        let stored = match self.commands.submit(command).await {
            Ok(stored) => stored,
            Err(ApplicationError::Cooldown { remaining_secs }) => {
                self.timer = CooldownTimer::start(remaining_secs);
                return Err(ApplicationError::cooldown(remaining_secs));
            }
            Err(err) => return Err(err),
        };

        self.form = CommentForm::default();
        self.timer = CooldownTimer::start(COMMENT_COOLDOWN_SECS);
        if let Err(err) = self.refresh().await {
            tracing::warn!(article_id = %self.article_id, error = %err, "comment list refresh failed");
        }
        Ok(stored)
    }

    /// Re-request the collection; on failure the current list is kept.
    pub async fn refresh(&mut self) -> ApplicationResult<()> {
        self.comments = self
            .queries
            .list_for_article(self.article_id.into())
            .await?;
        Ok(())
    }

    pub async fn delete(&mut self, auth: &AuthContext, comment_id: i64) -> ApplicationResult<()> {
        let actor = auth
            .current()
            .ok_or_else(|| ApplicationError::unauthorized("sign in to delete comments"))?;
        self.commands
            .delete(&actor, DeleteCommentCommand { id: comment_id })
            .await?;
        self.refresh().await
    }
}
