// src/application/ports/render.rs
use crate::application::{ApplicationResult, context::Theme};
use crate::domain::draft::Document;
use crate::domain::errors::DomainResult;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TypesetError(pub String);

pub trait MathTypesetter: Send + Sync {
    fn typeset(&self, tex: &str, display: bool) -> Result<String, TypesetError>;
}

/// Turns stored article HTML into display HTML: math typeset, code blocks
/// highlighted and fitted with their controls.
pub trait ContentRenderer: Send + Sync {
    fn render(&self, html: &str, theme: Theme) -> ApplicationResult<String>;
}

/// Reads stored article HTML back into an editable document.
pub trait DraftParser: Send + Sync {
    fn parse(&self, html: &str) -> DomainResult<Document>;
}
