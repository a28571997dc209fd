// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Read the client address from `X-Forwarded-For` / `X-Real-IP`. Only
    /// enable behind a reverse proxy that overwrites those headers.
    pub trust_proxy_headers: bool,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            services,
            trust_proxy_headers: false,
        }
    }

    pub fn with_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }
}
