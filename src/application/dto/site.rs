// src/application/dto/site.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageDto {
    pub tag: String,
    pub label: String,
}

/// Public configuration the front end needs before rendering forms.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_site_key: Option<String>,
    pub page_size: u32,
    pub comment_cooldown_secs: u32,
    pub default_code_language: String,
    pub code_languages: Vec<LanguageDto>,
    pub emoji: Vec<String>,
}
