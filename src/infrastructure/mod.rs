// src/infrastructure/mod.rs
pub mod challenge;
pub mod cooldown;
pub mod database;
pub mod media;
pub mod render;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
