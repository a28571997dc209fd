// src/application/commands/comments/submit.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{CommentDto, VisitorKey},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{NewComment, remaining_cooldown},
    },
};

#[derive(Debug, Clone)]
pub struct SubmitCommentCommand {
    pub article_id: i64,
    pub visitor: VisitorKey,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: String,
    pub anonymous: bool,
    pub challenge_token: Option<String>,
    pub remote_ip: Option<String>,
}

impl CommentCommandService {
    /// Seconds the visitor still has to wait before commenting on `article`.
    pub async fn cooldown_remaining(
        &self,
        visitor: &VisitorKey,
        article: ArticleId,
    ) -> ApplicationResult<u32> {
        let last = self.cooldowns.last_submission(visitor, article).await?;
        Ok(remaining_cooldown(last, self.clock.now()))
    }

    pub async fn submit(&self, command: SubmitCommentCommand) -> ApplicationResult<CommentDto> {
        if command.body.trim().is_empty() {
            return Err(ApplicationError::validation("comment cannot be empty"));
        }
        let token = command
            .challenge_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApplicationError::validation("bot challenge is required"))?;

        let article_id = ArticleId::new(command.article_id)?;
        let now = self.clock.now();
        let comment = NewComment::new(
            article_id,
            command.name,
            command.email,
            command.body,
            command.anonymous,
            now,
        )?;

        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .filter(|a| a.published)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let remaining = self.cooldown_remaining(&command.visitor, article.id).await?;
        if remaining > 0 {
            tracing::warn!(article_id = %article.id, remaining, "comment rejected: cooldown active");
            return Err(ApplicationError::cooldown(remaining));
        }

        if !self
            .challenge
            .verify(token, command.remote_ip.as_deref())
            .await?
        {
            tracing::warn!(article_id = %article.id, "comment rejected: bot challenge failed");
            return Err(ApplicationError::validation("bot challenge failed"));
        }

        let stored = self.comment_repo.insert(comment).await?;
        // The comment is already stored; a lost marker only shortens the
        // server-side cooldown.
        if let Err(err) = self
            .cooldowns
            .record_submission(&command.visitor, article.id, now)
            .await
        {
            tracing::warn!(article_id = %article.id, error = %err, "failed to record comment cooldown marker");
        }

        tracing::info!(article_id = %article.id, comment_id = %stored.id, "comment submitted");
        Ok(stored.into())
    }
}
