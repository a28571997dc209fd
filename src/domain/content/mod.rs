// src/domain/content/mod.rs
pub mod language;
pub mod lexer;

pub use language::{CodeLanguage, DEFAULT_CODE_LANGUAGE};
pub use lexer::{MathSpan, Segment, contains_math, scan_math};
