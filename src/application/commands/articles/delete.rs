// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Remove an article; its comments go with it.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load(command.id).await?;
        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = %article.id, by = %actor.username, "article deleted");
        Ok(())
    }
}
