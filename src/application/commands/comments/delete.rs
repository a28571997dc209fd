// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, errors::DomainError},
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Hard delete; there is no undo.
    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        self.comment_repo.delete(id).await.map_err(|err| match err {
            DomainError::NotFound(_) => ApplicationError::not_found("comment not found"),
            other => other.into(),
        })?;
        tracing::info!(comment_id = %id, by = %actor.username, "comment deleted");
        Ok(())
    }
}
