// src/infrastructure/render/pipeline.rs
//! Display-time hydration of stored article HTML.
//!
//! Text outside code is scanned for math delimiters and typeset; `pre` blocks
//! are highlighted and receive their copy/theme controls. Hydrated nodes are
//! marked so running the pipeline again over its own output changes nothing.

use std::sync::Arc;

use html_escape::{encode_double_quoted_attribute, encode_text};
use kuchikikiki::NodeRef;

use super::{
    dom::{attr, fragment, has_class, inner_html, language_class, local_name, parse_body, set_attr},
    highlight::SyntectHighlighter,
};
use crate::{
    application::{
        ApplicationResult,
        context::Theme,
        ports::render::{ContentRenderer, MathTypesetter},
    },
    domain::content::{Segment, contains_math, scan_math},
};

pub const HYDRATED_ATTR: &str = "data-hydrated";
pub const CONTROLS_CLASS: &str = "code-controls";
pub const MATH_ERROR_CLASS: &str = "math-error";
const MATH_LITERAL_CLASS: &str = "math-literal";

const SKIPPED_ELEMENTS: [&str; 6] = ["pre", "code", "script", "style", "textarea", "annotation"];
const SKIPPED_CLASSES: [&str; 4] = ["katex", "katex-display", MATH_ERROR_CLASS, MATH_LITERAL_CLASS];

pub struct HtmlContentRenderer {
    typesetter: Arc<dyn MathTypesetter>,
    highlighter: SyntectHighlighter,
}

impl HtmlContentRenderer {
    pub fn new(typesetter: Arc<dyn MathTypesetter>, highlighter: SyntectHighlighter) -> Self {
        Self {
            typesetter,
            highlighter,
        }
    }

    fn typeset_text_nodes(&self, root: &NodeRef) {
        let candidates: Vec<NodeRef> = root
            .descendants()
            .filter(|node| {
                node.as_text()
                    .is_some_and(|text| contains_math(&text.borrow()))
            })
            .filter(|node| !in_skipped_subtree(node))
            .collect();

        for node in candidates {
            let source = match node.as_text() {
                Some(text) => text.borrow().clone(),
                None => continue,
            };
            let segments = scan_math(&source);
            if matches!(segments.as_slice(), [Segment::Text(text)] if *text == source) {
                continue;
            }
            for segment in segments {
                for replacement in self.segment_nodes(segment) {
                    node.insert_before(replacement);
                }
            }
            node.detach();
        }
    }

    fn segment_nodes(&self, segment: Segment) -> Vec<NodeRef> {
        match segment {
            Segment::Text(text) if text.contains('$') => fragment(&format!(
                r#"<span class="{MATH_LITERAL_CLASS}">{}</span>"#,
                encode_text(&text)
            )),
            Segment::Text(text) => vec![NodeRef::new_text(text)],
            Segment::Math(span) => match self.typesetter.typeset(&span.tex, span.display) {
                Ok(html) => fragment(&html),
                Err(err) => {
                    tracing::debug!(tex = %span.tex, error = %err, "math typesetting failed");
                    fragment(&format!(
                        r#"<code class="{MATH_ERROR_CLASS}" title="{}">{}</code>"#,
                        encode_double_quoted_attribute(&err.0),
                        encode_text(&span.source)
                    ))
                }
            },
        }
    }

    fn hydrate_code_blocks(&self, root: &NodeRef, theme: Theme) {
        let blocks: Vec<NodeRef> = root
            .descendants()
            .filter(|node| local_name(node).as_deref() == Some("pre"))
            .collect();

        for pre in blocks {
            if attr(&pre, HYDRATED_ATTR).is_some() {
                continue;
            }

            let code = pre
                .children()
                .find(|child| local_name(child).as_deref() == Some("code"))
                .unwrap_or_else(|| pre.clone());
            let declared = language_class(&code).or_else(|| language_class(&pre));
            let source = code.text_contents();
            let highlighted = self.highlighter.highlight(&source, declared.as_deref());

            for child in code.children().collect::<Vec<_>>() {
                child.detach();
            }
            for node in fragment(&highlighted.html) {
                code.append(node);
            }

            if let Some(language) = &highlighted.language {
                set_attr(&pre, "data-language", language);
            }
            set_attr(&pre, "data-theme", theme.as_str());
            set_attr(&pre, HYDRATED_ATTR, "true");
            if !pre.children().any(|child| has_class(&child, CONTROLS_CLASS)) {
                for control in fragment(&controls_html(theme)) {
                    pre.prepend(control);
                }
            }
        }
    }
}

fn in_skipped_subtree(node: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| {
        local_name(&ancestor).is_some_and(|name| SKIPPED_ELEMENTS.contains(&name.as_str()))
            || SKIPPED_CLASSES.iter().any(|class| has_class(&ancestor, class))
    })
}

fn controls_html(theme: Theme) -> String {
    format!(
        r#"<div class="{CONTROLS_CLASS}" contenteditable="false"><button type="button" class="code-copy" data-action="copy" aria-label="Copiar código">Copiar</button><button type="button" class="code-theme" data-action="toggle-theme" data-next-theme="{}" aria-label="Alternar tema">{}</button></div>"#,
        theme.toggled().as_str(),
        match theme {
            Theme::Light => "Escuro",
            Theme::Dark => "Claro",
        }
    )
}

impl ContentRenderer for HtmlContentRenderer {
    fn render(&self, html: &str, theme: Theme) -> ApplicationResult<String> {
        let body = parse_body(html);
        self.typeset_text_nodes(&body);
        self.hydrate_code_blocks(&body, theme);
        Ok(inner_html(&body))
    }
}
