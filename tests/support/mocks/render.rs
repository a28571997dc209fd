// tests/support/mocks/render.rs
use caderno_core::application::{
    ApplicationResult, context::Theme, ports::render::ContentRenderer,
};

/// Wraps the stored HTML so tests can see which theme was requested.
pub struct ThemedPassthroughRenderer;

impl ContentRenderer for ThemedPassthroughRenderer {
    fn render(&self, html: &str, theme: Theme) -> ApplicationResult<String> {
        Ok(format!(
            "<div data-theme=\"{}\">{html}</div>",
            theme.as_str()
        ))
    }
}
