// tests/support/mocks/security.rs
use async_trait::async_trait;
use caderno_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use caderno_core::domain::user::UserId;
use chrono::Duration;

use super::time::fixed_now;

pub const TEST_TOKEN: &str = "test-token";

/// Stores passwords with a visible prefix so tests can assert on hashes.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain${password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Issues [`TEST_TOKEN`] for everyone and only accepts that token.
pub struct StaticTokenManager;

impl StaticTokenManager {
    pub fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId::new(1).unwrap(),
            username: "autora".into(),
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::hours(1),
        }
    }
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            token: TEST_TOKEN.into(),
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token == TEST_TOKEN {
            Ok(Self::admin())
        } else {
            Err(ApplicationError::unauthorized("invalid token"))
        }
    }
}
