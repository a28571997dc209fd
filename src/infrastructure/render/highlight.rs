// src/infrastructure/render/highlight.rs
use crate::domain::content::CodeLanguage;
use html_escape::encode_text;
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

/// Class-based syntax colouring. Colours come from the site stylesheet, so
/// the same markup serves both themes.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    pub html: String,
    /// Declared language, or the one inferred from the first line.
    pub language: Option<String>,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn syntax_for(&self, language: CodeLanguage) -> Option<&SyntaxReference> {
        // The bundled grammars have no TypeScript; JavaScript is close enough.
        let token = match language {
            CodeLanguage::Javascript | CodeLanguage::Typescript => "js",
            CodeLanguage::Html => "html",
            CodeLanguage::Css => "css",
            CodeLanguage::Python => "py",
            CodeLanguage::Sql => "sql",
            CodeLanguage::Json => "json",
            CodeLanguage::Bash => "sh",
            CodeLanguage::Java => "java",
            CodeLanguage::C => "c",
            CodeLanguage::Cpp => "cpp",
        };
        self.syntaxes.find_syntax_by_token(token)
    }

    pub fn highlight(&self, code: &str, declared: Option<&str>) -> Highlighted {
        let declared = declared.and_then(CodeLanguage::from_tag);
        let (syntax, language) = match declared.and_then(|lang| self.syntax_for(lang).map(|s| (s, lang))) {
            Some((syntax, lang)) => (Some(syntax), Some(lang.as_str().to_string())),
            None => {
                let inferred = self.syntaxes.find_syntax_by_first_line(code);
                (inferred, inferred.map(|s| s.name.to_lowercase()))
            }
        };

        let Some(syntax) = syntax else {
            return Highlighted {
                html: encode_text(code).into_owned(),
                language: None,
            };
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
                tracing::debug!(error = %err, "highlighting failed, emitting plain code");
                return Highlighted {
                    html: encode_text(code).into_owned(),
                    language,
                };
            }
        }
        Highlighted {
            html: generator.finalize(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_language_is_used() {
        let out = SyntectHighlighter::new().highlight("def f():\n    return 1\n", Some("python"));
        assert_eq!(out.language.as_deref(), Some("python"));
        assert!(out.html.contains("<span class="));
        assert!(out.html.contains("def"));
    }

    #[test]
    fn shebang_infers_language() {
        let out = SyntectHighlighter::new().highlight("#!/bin/bash\necho hi\n", None);
        assert!(out.language.is_some());
    }

    #[test]
    fn unknown_code_is_escaped_verbatim() {
        let out = SyntectHighlighter::new().highlight("a < b", Some("cobol"));
        assert!(out.html.contains("a &lt; b"));
    }
}
