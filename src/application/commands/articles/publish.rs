// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleUpdate,
};

pub struct TogglePublishCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Flip the published flag. The first publication stamps `published_at`;
    /// later toggles keep it.
    pub async fn toggle_publish(
        &self,
        actor: &AuthenticatedUser,
        command: TogglePublishCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        article.set_published(!article.published, self.clock.now());

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(
            article_id = %updated.id,
            published = updated.published,
            by = %actor.username,
            "publish state toggled"
        );
        Ok(updated.into())
    }
}
