// src/infrastructure/render/dom.rs
use kuchikikiki::{NodeRef, traits::TendrilSink};

/// Parse an HTML fragment and return the resulting body.
pub fn parse_body(html: &str) -> NodeRef {
    let document = kuchikikiki::parse_html().one(format!("<html><body>{html}</body></html>"));
    match document.select_first("body") {
        Ok(body) => body.as_node().clone(),
        Err(()) => document,
    }
}

/// Top-level nodes of a parsed fragment, detached and ready to be inserted.
pub fn fragment(html: &str) -> Vec<NodeRef> {
    let body = parse_body(html);
    let nodes: Vec<NodeRef> = body.children().collect();
    for node in &nodes {
        node.detach();
    }
    nodes
}

pub fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

pub fn local_name(node: &NodeRef) -> Option<String> {
    node.as_element().map(|el| el.name.local.to_string())
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element()
        .and_then(|el| el.attributes.borrow().get(name).map(str::to_string))
}

pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    if let Some(el) = node.as_element() {
        el.attributes.borrow_mut().insert(name, value.to_string());
    }
}

pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attr(node, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

/// Language tag from a `language-*` (or `lang-*`) class.
pub fn language_class(node: &NodeRef) -> Option<String> {
    attr(node, "class").and_then(|value| {
        value.split_whitespace().find_map(|class| {
            class
                .strip_prefix("language-")
                .or_else(|| class.strip_prefix("lang-"))
                .map(str::to_string)
        })
    })
}
