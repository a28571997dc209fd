// src/domain/content/lexer.rs
//! Left-to-right scanner for math delimiters in a run of text.
//!
//! Recognised pairs: `$$..$$` and `\[..\]` (display), `$..$` and `\(..\)`
//! (inline). A backslash escapes the next character, so `\$` is a literal
//! dollar sign and never opens or closes a span. Openers without a matching
//! closer, and spans with blank content, are kept as literal text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathSpan {
    pub tex: String,
    pub display: bool,
    /// The span exactly as written, delimiters included.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Math(MathSpan),
}

struct Delimiter {
    open: &'static str,
    close: &'static str,
    display: bool,
}

const DISPLAY_DOLLARS: Delimiter = Delimiter {
    open: "$$",
    close: "$$",
    display: true,
};
const DISPLAY_BRACKETS: Delimiter = Delimiter {
    open: "\\[",
    close: "\\]",
    display: true,
};
const INLINE_DOLLAR: Delimiter = Delimiter {
    open: "$",
    close: "$",
    display: false,
};
const INLINE_PARENS: Delimiter = Delimiter {
    open: "\\(",
    close: "\\)",
    display: false,
};

/// Cheap pre-check used to skip text nodes that cannot contain math.
pub fn contains_math(input: &str) -> bool {
    input.contains('$') || input.contains("\\[") || input.contains("\\(")
}

pub fn scan_math(input: &str) -> Vec<Segment> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < bytes.len() {
        let delimiter = match bytes[i] {
            b'\\' => match bytes.get(i + 1) {
                Some(b'$') => {
                    text.push('$');
                    i += 2;
                    continue;
                }
                Some(b'[') => Some(&DISPLAY_BRACKETS),
                Some(b'(') => Some(&INLINE_PARENS),
                _ => None,
            },
            b'$' if bytes.get(i + 1) == Some(&b'$') => Some(&DISPLAY_DOLLARS),
            b'$' => Some(&INLINE_DOLLAR),
            _ => None,
        };

        let Some(delimiter) = delimiter else {
            // Delimiters are ASCII, so `i` always sits on a char boundary here.
            let ch = input[i..].chars().next().unwrap_or_default();
            text.push(ch);
            i += ch.len_utf8().max(1);
            continue;
        };

        let body_start = i + delimiter.open.len();
        match find_close(bytes, body_start, delimiter.close) {
            Some(end) if !input[body_start..end].trim().is_empty() => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                let close_end = end + delimiter.close.len();
                segments.push(Segment::Math(MathSpan {
                    tex: input[body_start..end].trim().to_string(),
                    display: delimiter.display,
                    source: input[i..close_end].to_string(),
                }));
                i = close_end;
            }
            _ => {
                text.push_str(delimiter.open);
                i = body_start;
            }
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

fn find_close(bytes: &[u8], from: usize, close: &str) -> Option<usize> {
    let close = close.as_bytes();
    let mut j = from;
    while j < bytes.len() {
        if bytes[j..].starts_with(close) {
            return Some(j);
        }
        j += if bytes[j] == b'\\' { 2 } else { 1 };
    }
    None
}
