// src/domain/content/language.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages offered by the code-block selector of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Javascript,
    Typescript,
    Html,
    Css,
    Python,
    Sql,
    Json,
    Bash,
    Java,
    C,
    #[serde(rename = "c++")]
    Cpp,
}

pub const DEFAULT_CODE_LANGUAGE: CodeLanguage = CodeLanguage::Javascript;

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 11] = [
        CodeLanguage::Javascript,
        CodeLanguage::Typescript,
        CodeLanguage::Html,
        CodeLanguage::Css,
        CodeLanguage::Python,
        CodeLanguage::Sql,
        CodeLanguage::Json,
        CodeLanguage::Bash,
        CodeLanguage::Java,
        CodeLanguage::C,
        CodeLanguage::Cpp,
    ];

    /// Tag stored in the `language-<tag>` class of a code element.
    pub fn as_str(self) -> &'static str {
        match self {
            CodeLanguage::Javascript => "javascript",
            CodeLanguage::Typescript => "typescript",
            CodeLanguage::Html => "html",
            CodeLanguage::Css => "css",
            CodeLanguage::Python => "python",
            CodeLanguage::Sql => "sql",
            CodeLanguage::Json => "json",
            CodeLanguage::Bash => "bash",
            CodeLanguage::Java => "java",
            CodeLanguage::C => "c",
            CodeLanguage::Cpp => "c++",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeLanguage::Javascript => "JavaScript",
            CodeLanguage::Typescript => "TypeScript",
            CodeLanguage::Html => "HTML",
            CodeLanguage::Css => "CSS",
            CodeLanguage::Python => "Python",
            CodeLanguage::Sql => "SQL",
            CodeLanguage::Json => "JSON",
            CodeLanguage::Bash => "Bash",
            CodeLanguage::Java => "Java",
            CodeLanguage::C => "C",
            CodeLanguage::Cpp => "C++",
        }
    }

    /// Accepts the stored tag, common aliases, and case variants.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let language = match tag.as_str() {
            "javascript" | "js" => CodeLanguage::Javascript,
            "typescript" | "ts" => CodeLanguage::Typescript,
            "html" => CodeLanguage::Html,
            "css" => CodeLanguage::Css,
            "python" | "py" => CodeLanguage::Python,
            "sql" => CodeLanguage::Sql,
            "json" => CodeLanguage::Json,
            "bash" | "sh" | "shell" => CodeLanguage::Bash,
            "java" => CodeLanguage::Java,
            "c" => CodeLanguage::C,
            "c++" | "cpp" => CodeLanguage::Cpp,
            _ => return None,
        };
        Some(language)
    }

    pub fn parse(tag: &str) -> DomainResult<Self> {
        Self::from_tag(tag)
            .ok_or_else(|| DomainError::Validation(format!("unsupported code language: {tag}")))
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_aliases() {
        for language in CodeLanguage::ALL {
            assert_eq!(CodeLanguage::from_tag(language.as_str()), Some(language));
        }
        assert_eq!(CodeLanguage::from_tag("CPP"), Some(CodeLanguage::Cpp));
        assert_eq!(CodeLanguage::from_tag(" sh "), Some(CodeLanguage::Bash));
        assert!(CodeLanguage::parse("cobol").is_err());
    }
}
