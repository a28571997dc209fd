// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const MAX_BODY_CHARS: usize = 5_000;
const MAX_NAME_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_BODY_CHARS {
            return Err(DomainError::Validation(format!(
                "comment cannot exceed {MAX_BODY_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if value.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "name cannot exceed {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(Some(Self(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact address left by a commenter. Stored, never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorContact(String);

impl AuthorContact {
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        let valid = value
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(DomainError::Validation("invalid e-mail address".into()));
        }
        Ok(Some(Self(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_body_is_rejected() {
        assert!(CommentBody::new(" \n\t ").is_err());
        assert_eq!(CommentBody::new("  oi  ").unwrap().as_str(), "oi");
    }

    #[test]
    fn optional_fields_collapse_when_blank() {
        assert!(AuthorName::parse(Some("   ".into())).unwrap().is_none());
        assert!(AuthorContact::parse(Some("".into())).unwrap().is_none());
        assert!(AuthorContact::parse(Some("nope".into())).is_err());
        assert!(AuthorContact::parse(Some("ana@exemplo.com".into())).unwrap().is_some());
    }
}
