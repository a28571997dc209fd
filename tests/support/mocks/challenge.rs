// tests/support/mocks/challenge.rs
use async_trait::async_trait;
use caderno_core::application::{ApplicationResult, ports::challenge::ChallengeVerifier};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Accepts or rejects every token and counts how often it was asked.
pub struct ScriptedChallenge {
    accept: AtomicBool,
    calls: AtomicUsize,
}

impl Default for ScriptedChallenge {
    fn default() -> Self {
        Self {
            accept: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }
}

impl ScriptedChallenge {
    pub fn reject_all(&self) {
        self.accept.store(false, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChallengeVerifier for ScriptedChallenge {
    async fn verify(&self, _token: &str, _remote_ip: Option<&str>) -> ApplicationResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.accept.load(Ordering::SeqCst))
    }

    fn site_key(&self) -> Option<&str> {
        Some("test-site-key")
    }
}
