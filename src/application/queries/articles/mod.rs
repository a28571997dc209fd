// src/application/queries/articles/mod.rs
mod admin;
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListPublishedQuery;
pub use service::ArticleQueryService;
