// src/application/dto/mod.rs
pub mod articles;
pub mod auth;
pub mod comments;
pub mod editor;
pub mod listing;
pub mod media;
pub mod serde_time;
pub mod site;
pub mod users;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleSummaryDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject, VisitorKey};
pub use comments::CommentDto;
pub use editor::{ActiveFormatsDto, EditorStateDto};
pub use listing::{ArticlePage, ListingDto, ListingStateKind, PageLinkDto};
pub use media::UploadedImageDto;
pub use site::{LanguageDto, SiteConfigDto};
pub use users::{UserDto, UserProfileDto};
