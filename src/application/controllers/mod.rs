// src/application/controllers/mod.rs
//! Stateful controllers backing one view each: the article listing, a reader
//! for one article, a comment thread and the cover crop dialog.
pub mod article_reader;
pub mod comment_thread;
pub mod cooldown_timer;
pub mod crop_session;
pub mod listing;

pub use article_reader::ArticleReader;
pub use comment_thread::{CommentForm, CommentThread};
pub use cooldown_timer::CooldownTimer;
pub use crop_session::{CropSession, CropStage};
pub use listing::{ListingController, ListingState, ListingView};
