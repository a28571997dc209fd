// src/application/commands/mod.rs
pub mod articles;
pub mod comments;
pub mod editor;
pub mod media;
pub mod users;
