// tests/support/mocks/mod.rs
//! In-memory adapters standing in for Postgres, storage and the outside world.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod challenge;
pub mod comment_repo;
pub mod cooldown;
pub mod media;
pub mod render;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use article_repos::InMemoryArticles;
pub use challenge::ScriptedChallenge;
pub use comment_repo::InMemoryComments;
pub use cooldown::UnavailableCooldowns;
pub use media::{MemoryStorage, STORAGE_BASE};
pub use render::ThemedPassthroughRenderer;
pub use security::{PlainPasswordHasher, StaticTokenManager, TEST_TOKEN};
pub use time::{MutableClock, fixed_now};
pub use user_repo::InMemoryUsers;
pub use util::SequentialIds;
