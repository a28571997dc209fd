// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleUpdate, NewArticle},
        draft::{Draft, ValidatedDraft},
    },
};

/// Flush the authoring dialog to an article: a new one when `id` is `None`,
/// otherwise a full replacement of the editable fields.
pub struct SaveDraftCommand {
    pub id: Option<i64>,
    pub draft: Draft,
}

impl ArticleCommandService {
    pub async fn save_draft(
        &self,
        actor: &AuthenticatedUser,
        command: SaveDraftCommand,
    ) -> ApplicationResult<ArticleDto> {
        let fields = command.draft.validate()?;
        match command.id {
            None => self.create_from(actor, fields).await,
            Some(id) => self.update_from(actor, id, fields).await,
        }
    }

    async fn create_from(
        &self,
        actor: &AuthenticatedUser,
        fields: ValidatedDraft,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let slug = self.slug_service.generate_unique_slug(&fields.title).await?;

        let created = self
            .write_repo
            .insert(NewArticle {
                title: fields.title,
                slug,
                excerpt: fields.excerpt,
                content: fields.content,
                cover_image: fields.cover_image,
                tags: fields.tags,
                published: fields.published,
                published_at: fields.published.then_some(now),
                author_id: actor.id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(article_id = %created.id, slug = %created.slug, by = %actor.username, "article created");
        Ok(created.into())
    }

    async fn update_from(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        fields: ValidatedDraft,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(id).await?;
        let now = self.clock.now();

        article.set_content(
            fields.title,
            fields.excerpt,
            fields.content,
            fields.cover_image,
            fields.tags,
            now,
        );
        article.set_published(fields.published, now);

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(article_id = %updated.id, by = %actor.username, "article updated");
        Ok(updated.into())
    }
}
