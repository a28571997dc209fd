// src/application/ports/challenge.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait ChallengeVerifier: Send + Sync {
    /// Check a single-use bot-challenge token. `Ok(false)` means the challenge
    /// service rejected it.
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> ApplicationResult<bool>;

    /// Public key handed to clients so they can render the challenge.
    fn site_key(&self) -> Option<&str>;
}
