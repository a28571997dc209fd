// src/domain/mod.rs
pub mod article;
pub mod comment;
pub mod content;
pub mod draft;
pub mod errors;
pub mod media;
pub mod pagination;
pub mod user;
