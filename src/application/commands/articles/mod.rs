// src/application/commands/articles/mod.rs
mod delete;
mod publish;
mod save;
mod service;

pub use delete::DeleteArticleCommand;
pub use publish::TogglePublishCommand;
pub use save::SaveDraftCommand;
pub use service::ArticleCommandService;
