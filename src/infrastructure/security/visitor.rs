// src/infrastructure/security/visitor.rs
use crate::application::{
    dto::VisitorKey,
    error::{ApplicationError, ApplicationResult},
    ports::security::VisitorKeyDeriver,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Keyed hash of the client address. The raw address is never stored.
#[derive(Clone)]
pub struct HmacVisitorKeyDeriver {
    mac: HmacSha256,
}

impl HmacVisitorKeyDeriver {
    pub fn new(secret: &[u8]) -> ApplicationResult<Self> {
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { mac })
    }
}

impl VisitorKeyDeriver for HmacVisitorKeyDeriver {
    fn derive(&self, client: &str) -> VisitorKey {
        let mut mac = self.mac.clone();
        mac.update(client.trim().as_bytes());
        let digest = mac.finalize().into_bytes();
        VisitorKey::new(URL_SAFE_NO_PAD.encode(&digest[..16]))
    }
}
