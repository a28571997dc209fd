// src/infrastructure/challenge/turnstile.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::challenge::ChallengeVerifier,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const SITEVERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Cloudflare Turnstile server-side verification.
pub struct TurnstileVerifier {
    client: reqwest::Client,
    endpoint: String,
    secret: String,
    site_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

impl TurnstileVerifier {
    pub fn new(secret: impl Into<String>, site_key: Option<String>) -> ApplicationResult<Self> {
        Self::with_endpoint(SITEVERIFY_URL, secret, site_key)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        secret: impl Into<String>,
        site_key: Option<String>,
    ) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            secret: secret.into(),
            site_key,
        })
    }
}

#[async_trait]
impl ChallengeVerifier for TurnstileVerifier {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> ApplicationResult<bool> {
        let mut form = vec![("secret", self.secret.as_str()), ("response", token)];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| ApplicationError::infrastructure(format!("challenge service: {err}")))?
            .json::<SiteverifyResponse>()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("challenge service: {err}")))?;

        if !response.success {
            tracing::debug!(codes = ?response.error_codes, "challenge token rejected");
        }
        Ok(response.success)
    }

    fn site_key(&self) -> Option<&str> {
        self.site_key.as_deref()
    }
}

/// Used when no secret is configured: any non-empty token passes.
#[derive(Debug, Default, Clone)]
pub struct DisabledChallengeVerifier {
    site_key: Option<String>,
}

impl DisabledChallengeVerifier {
    pub fn new(site_key: Option<String>) -> Self {
        Self { site_key }
    }
}

#[async_trait]
impl ChallengeVerifier for DisabledChallengeVerifier {
    async fn verify(&self, token: &str, _remote_ip: Option<&str>) -> ApplicationResult<bool> {
        Ok(!token.trim().is_empty())
    }

    fn site_key(&self) -> Option<&str> {
        self.site_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_siteverify_failure() {
        let body = r#"{"success":false,"error-codes":["invalid-input-response"]}"#;
        let parsed: SiteverifyResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error_codes, vec!["invalid-input-response"]);
    }

    #[tokio::test]
    async fn disabled_verifier_only_needs_a_token() {
        let verifier = DisabledChallengeVerifier::new(Some("site".into()));
        assert!(verifier.verify("tok", None).await.unwrap());
        assert!(!verifier.verify("  ", None).await.unwrap());
        assert_eq!(verifier.site_key(), Some("site"));
    }
}
