// src/domain/comment/mod.rs
pub mod cooldown;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use cooldown::{COMMENT_COOLDOWN_SECS, remaining_cooldown};
pub use entity::{ANONYMOUS_DISPLAY_NAME, Comment, NewComment};
pub use repository::CommentRepository;
pub use value_objects::{AuthorContact, AuthorName, CommentBody, CommentId};
