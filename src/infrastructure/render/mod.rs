// src/infrastructure/render/mod.rs
mod dom;
pub mod draft_parser;
pub mod highlight;
pub mod math;
pub mod pipeline;

pub use draft_parser::HtmlDraftParser;
pub use highlight::SyntectHighlighter;
pub use math::KatexTypesetter;
pub use pipeline::HtmlContentRenderer;
