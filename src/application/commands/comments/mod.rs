// src/application/commands/comments/mod.rs
mod delete;
mod service;
mod submit;

pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
pub use submit::SubmitCommentCommand;
