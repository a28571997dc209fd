// src/infrastructure/render/math.rs
use crate::application::ports::render::{MathTypesetter, TypesetError};

/// KaTeX, rendering HTML plus MathML. Parse errors are reported, never
/// rendered in KaTeX's own error colour.
#[derive(Debug, Default, Clone)]
pub struct KatexTypesetter;

impl MathTypesetter for KatexTypesetter {
    fn typeset(&self, tex: &str, display: bool) -> Result<String, TypesetError> {
        let opts = katex::Opts::builder()
            .display_mode(display)
            .throw_on_error(true)
            .build()
            .map_err(|err| TypesetError(err.to_string()))?;
        katex::render_with_opts(tex, &opts).map_err(|err| TypesetError(err.to_string()))
    }
}
