// src/infrastructure/challenge/mod.rs
mod turnstile;

pub use turnstile::{DisabledChallengeVerifier, TurnstileVerifier};
