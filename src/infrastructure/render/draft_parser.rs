// src/infrastructure/render/draft_parser.rs
use kuchikikiki::NodeRef;

use super::dom::{attr, language_class, local_name, parse_body};
use crate::{
    application::ports::render::DraftParser,
    domain::{
        content::{CodeLanguage, DEFAULT_CODE_LANGUAGE},
        draft::{Align, Block, Document, HeadingLevel, ListKind, Mark, MarkSet, TextRun},
        errors::DomainResult,
    },
};

/// Reads stored content (as produced by the editor, or older hand-written
/// HTML) back into the editor's block model. Unknown wrappers are flattened.
#[derive(Debug, Default, Clone)]
pub struct HtmlDraftParser;

#[derive(Debug, Clone, Copy, Default)]
struct Context {
    quote: bool,
    list: Option<ListKind>,
}

struct Collector {
    blocks: Vec<Block>,
    /// Inline content met directly inside a container, waiting for a block.
    pending: Vec<TextRun>,
    pending_ctx: Context,
}

impl Collector {
    fn push(&mut self, mut block: Block, ctx: Context, align: Option<Align>) {
        self.flush();
        block.quote = ctx.quote;
        block.list = if block.is_textual() { ctx.list } else { None };
        block.align = if block.is_code() { None } else { align };
        self.blocks.push(block);
    }

    fn push_inline(&mut self, runs: Vec<TextRun>, ctx: Context) {
        if runs.is_empty() {
            return;
        }
        self.pending_ctx = ctx;
        self.pending.extend(runs);
    }

    fn flush(&mut self) {
        if self.pending.iter().all(|run| run.text.trim().is_empty()) {
            self.pending.clear();
            return;
        }
        let runs = std::mem::take(&mut self.pending);
        let mut block = Block::paragraph(runs);
        block.quote = self.pending_ctx.quote;
        block.list = self.pending_ctx.list;
        self.blocks.push(block);
    }
}

fn alignment(node: &NodeRef) -> Option<Align> {
    let style = attr(node, "style")?;
    style.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        (name.trim() == "text-align")
            .then(|| Align::from_css(value))
            .flatten()
    })
}

fn mark_for(name: &str) -> Option<Mark> {
    match name {
        "strong" | "b" => Some(Mark::Bold),
        "em" | "i" => Some(Mark::Italic),
        "u" => Some(Mark::Underline),
        "s" | "strike" | "del" => Some(Mark::Strike),
        "code" => Some(Mark::Code),
        _ => None,
    }
}

/// Inline runs of `node`'s children. Images found inline are returned
/// separately so they can become blocks of their own.
fn inline_runs(node: &NodeRef, marks: MarkSet, runs: &mut Vec<TextRun>, images: &mut Vec<Block>) {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            let text = text.borrow();
            if !text.is_empty() {
                runs.push(TextRun::marked(text.as_str(), marks));
            }
            continue;
        }
        let Some(name) = local_name(&child) else {
            continue;
        };
        match name.as_str() {
            "br" => runs.push(TextRun::marked("\n", marks)),
            "img" => {
                if let Some(src) = attr(&child, "src") {
                    images.push(Block::image(src, attr(&child, "alt").unwrap_or_default()));
                }
            }
            other => {
                let marks = mark_for(other).map_or(marks, |mark| marks.with(mark));
                inline_runs(&child, marks, runs, images);
            }
        }
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" | "h4" | "h5" | "h6" => Some(3),
        _ => None,
    }
}

fn walk(node: &NodeRef, ctx: Context, out: &mut Collector) -> DomainResult<()> {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            let text = text.borrow().clone();
            out.push_inline(vec![TextRun::plain(text)], ctx);
            continue;
        }
        let Some(name) = local_name(&child) else {
            continue;
        };

        match name.as_str() {
            "p" => {
                let mut runs = Vec::new();
                let mut images = Vec::new();
                inline_runs(&child, MarkSet::empty(), &mut runs, &mut images);
                if !runs.is_empty() || images.is_empty() {
                    out.push(Block::paragraph(runs), ctx, alignment(&child));
                }
                for image in images {
                    out.push(image, ctx, None);
                }
            }
            heading if heading_level(heading).is_some() => {
                let level = HeadingLevel::new(heading_level(heading).unwrap_or(3))?;
                let mut runs = Vec::new();
                let mut images = Vec::new();
                inline_runs(&child, MarkSet::empty(), &mut runs, &mut images);
                out.push(Block::heading(level, runs), ctx, alignment(&child));
                for image in images {
                    out.push(image, ctx, None);
                }
            }
            "pre" => {
                let code = child
                    .children()
                    .find(|c| local_name(c).as_deref() == Some("code"));
                let language = code
                    .as_ref()
                    .and_then(language_class)
                    .or_else(|| language_class(&child))
                    .and_then(|tag| CodeLanguage::from_tag(&tag))
                    .unwrap_or(DEFAULT_CODE_LANGUAGE);
                let text = code.as_ref().unwrap_or(&child).text_contents();
                out.push(Block::code(language, text), ctx, None);
            }
            "img" => {
                if let Some(src) = attr(&child, "src") {
                    let alt = attr(&child, "alt").unwrap_or_default();
                    out.push(Block::image(src, alt), ctx, None);
                }
            }
            "blockquote" => {
                out.flush();
                walk(&child, Context { quote: true, ..ctx }, out)?;
                out.flush();
            }
            "ul" | "ol" => {
                let kind = if name == "ol" {
                    ListKind::Ordered
                } else {
                    ListKind::Bullet
                };
                out.flush();
                walk(&child, Context { list: Some(kind), ..ctx }, out)?;
                out.flush();
            }
            "li" => {
                out.flush();
                walk(&child, ctx, out)?;
                out.flush();
            }
            other => {
                if let Some(mark) = mark_for(other) {
                    let mut runs = Vec::new();
                    let mut images = Vec::new();
                    inline_runs(&child, MarkSet::empty().with(mark), &mut runs, &mut images);
                    out.push_inline(runs, ctx);
                    for image in images {
                        out.push(image, ctx, None);
                    }
                } else {
                    walk(&child, ctx, out)?;
                }
            }
        }
    }
    Ok(())
}

impl DraftParser for HtmlDraftParser {
    fn parse(&self, html: &str) -> DomainResult<Document> {
        let body = parse_body(html);
        let mut out = Collector {
            blocks: Vec::new(),
            pending: Vec::new(),
            pending_ctx: Context::default(),
        };
        walk(&body, Context::default(), &mut out)?;
        out.flush();
        Ok(Document::from_blocks(out.blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::{BlockKind, to_html};

    fn parse(html: &str) -> Document {
        HtmlDraftParser.parse(html).unwrap()
    }

    #[test]
    fn editor_output_parses_back_to_the_same_html() {
        let html = concat!(
            r#"<h2 style="text-align: center">Título</h2>"#,
            "<p>a <strong>b </strong><strong><em>c</em></strong><br>d</p>",
            "<blockquote><p>citação</p></blockquote>",
            "<ol><li><p>um</p></li><li><p>dois</p></li></ol>",
            r#"<pre><code class="language-python">x = 1 &lt; 2</code></pre>"#,
            r#"<img src="https://cdn.example/a.png" alt="a">"#,
        );
        assert_eq!(to_html(&parse(html)), html);
    }

    #[test]
    fn nested_marks_accumulate() {
        let doc = parse("<p><strong>b <em>c</em></strong></p>");
        let runs = &doc.blocks()[0].runs;
        assert_eq!(runs.len(), 2);
        assert!(runs[1].marks.contains(Mark::Bold));
        assert!(runs[1].marks.contains(Mark::Italic));
    }

    #[test]
    fn empty_content_is_one_empty_paragraph() {
        assert_eq!(to_html(&parse("")), "<p></p>");
        assert_eq!(to_html(&parse("<p></p>")), "<p></p>");
    }

    #[test]
    fn loose_text_and_unknown_tags_become_paragraphs() {
        let doc = parse("solto <b>negrito</b><div><p>dentro</p></div>");
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.blocks()[0].text(), "solto negrito");
        assert_eq!(doc.blocks()[1].text(), "dentro");
    }

    #[test]
    fn inline_images_are_lifted_out() {
        let doc = parse(r#"<p>antes<img src="/media/covers/x.jpg" alt="x"></p>"#);
        assert_eq!(doc.blocks().len(), 2);
        assert!(matches!(doc.blocks()[1].kind, BlockKind::Image { .. }));
    }

    #[test]
    fn unsupported_language_falls_back_to_default() {
        let doc = parse(r#"<pre><code class="language-cobol">MOVE</code></pre>"#);
        assert_eq!(
            doc.blocks()[0].kind,
            BlockKind::CodeBlock {
                language: DEFAULT_CODE_LANGUAGE
            }
        );
    }
}
