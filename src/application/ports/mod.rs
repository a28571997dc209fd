// src/application/ports/mod.rs
pub mod challenge;
pub mod cooldown;
pub mod image;
pub mod render;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type ContentRendererPort = dyn render::ContentRenderer;
pub type ObjectStoragePort = dyn storage::ObjectStorage;
pub type ChallengeVerifierPort = dyn challenge::ChallengeVerifier;
pub type CooldownStorePort = dyn cooldown::CooldownStore;
