// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            editor::EditorCommandService, media::MediaCommandService, users::UserCommandService,
        },
        context::ThemeContext,
        controllers::{ArticleReader, CommentThread, CropSession, ListingController},
        dto::{AuthenticatedUser, LanguageDto, SiteConfigDto, VisitorKey},
        ports::{
            challenge::ChallengeVerifier,
            cooldown::CooldownStore,
            image::ImageProcessor,
            render::{ContentRenderer, DraftParser},
            security::{PasswordHasher, TokenManager, VisitorKeyDeriver},
            storage::ObjectStorage,
            time::Clock,
            util::{RandomIdGenerator, SlugGenerator},
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            users::UserQueryService,
        },
        ApplicationResult,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::{COMMENT_COOLDOWN_SECS, CommentRepository},
        content::{CodeLanguage, DEFAULT_CODE_LANGUAGE},
        draft::EMOJI_PALETTE,
        pagination::PAGE_SIZE,
        user::UserRepository,
    },
};

/// Every collaborator the application layer talks to.
pub struct ApplicationPorts {
    pub user_repo: Arc<dyn UserRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub visitor_keys: Arc<dyn VisitorKeyDeriver>,
    pub renderer: Arc<dyn ContentRenderer>,
    pub draft_parser: Arc<dyn DraftParser>,
    pub storage: Arc<dyn ObjectStorage>,
    pub images: Arc<dyn ImageProcessor>,
    pub challenge: Arc<dyn ChallengeVerifier>,
    pub cooldowns: Arc<dyn CooldownStore>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub ids: Arc<dyn RandomIdGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub media_commands: Arc<MediaCommandService>,
    pub editor_commands: Arc<EditorCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
    visitor_keys: Arc<dyn VisitorKeyDeriver>,
    challenge: Arc<dyn ChallengeVerifier>,
    storage_base: String,
}

impl ApplicationServices {
    pub fn new(ports: ApplicationPorts) -> Self {
        let storage_base = ports.storage.public_base().to_string();

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&ports.user_repo),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.clock),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&ports.article_read_repo),
            Arc::clone(&ports.slugger),
            Arc::clone(&ports.clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&ports.article_write_repo),
            Arc::clone(&ports.article_read_repo),
            slug_service,
            Arc::clone(&ports.clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&ports.comment_repo),
            Arc::clone(&ports.article_read_repo),
            Arc::clone(&ports.cooldowns),
            Arc::clone(&ports.challenge),
            Arc::clone(&ports.clock),
        ));

        let media_commands = Arc::new(MediaCommandService::new(
            Arc::clone(&ports.storage),
            Arc::clone(&ports.images),
            Arc::clone(&ports.ids),
            Arc::clone(&ports.clock),
        ));

        let editor_commands = Arc::new(EditorCommandService::new(Arc::clone(&ports.draft_parser)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&ports.article_read_repo),
            Arc::clone(&ports.renderer),
            storage_base.clone(),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&ports.comment_repo)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&ports.user_repo),
            Arc::clone(&ports.clock),
        ));

        Self {
            user_commands,
            article_commands,
            comment_commands,
            media_commands,
            editor_commands,
            article_queries,
            comment_queries,
            user_queries,
            token_manager: ports.token_manager,
            visitor_keys: ports.visitor_keys,
            challenge: ports.challenge,
            storage_base,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }

    pub fn visitor_key(&self, client: &str) -> VisitorKey {
        self.visitor_keys.derive(client)
    }

    pub fn challenge_site_key(&self) -> Option<&str> {
        self.challenge.site_key()
    }

    /// Public settings the front end reads before rendering forms.
    pub fn site_config(&self) -> SiteConfigDto {
        SiteConfigDto {
            challenge_site_key: self.challenge_site_key().map(str::to_string),
            page_size: PAGE_SIZE,
            comment_cooldown_secs: COMMENT_COOLDOWN_SECS,
            default_code_language: DEFAULT_CODE_LANGUAGE.as_str().to_string(),
            code_languages: CodeLanguage::ALL
                .iter()
                .map(|language| LanguageDto {
                    tag: language.as_str().to_string(),
                    label: language.label().to_string(),
                })
                .collect(),
            emoji: EMOJI_PALETTE.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn storage_base(&self) -> &str {
        &self.storage_base
    }

    pub fn listing(&self) -> ListingController {
        ListingController::new(Arc::clone(&self.article_queries))
    }

    pub async fn article_reader(
        &self,
        slug: String,
        theme: ThemeContext,
    ) -> ApplicationResult<ArticleReader> {
        ArticleReader::open(slug, Arc::clone(&self.article_queries), theme).await
    }

    pub async fn comment_thread(
        &self,
        article_id: ArticleId,
        visitor: VisitorKey,
        remote_ip: Option<String>,
    ) -> ApplicationResult<CommentThread> {
        CommentThread::mount(
            article_id,
            visitor,
            remote_ip,
            Arc::clone(&self.comment_commands),
            Arc::clone(&self.comment_queries),
        )
        .await
    }

    pub fn crop_session(&self, cover: Option<String>) -> CropSession {
        CropSession::new(Arc::clone(&self.media_commands), cover)
    }
}
