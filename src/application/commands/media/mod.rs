// src/application/commands/media/mod.rs
mod cover;
mod service;
mod upload;

pub use cover::UploadCoverCommand;
pub use service::{MAX_UPLOAD_BYTES, MediaCommandService};
pub use upload::UploadContentImageCommand;
