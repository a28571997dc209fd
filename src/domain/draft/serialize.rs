// src/domain/draft/serialize.rs
use html_escape::{encode_double_quoted_attribute, encode_text};
use crate::domain::draft::document::{Block, BlockKind, Document, ListKind, TextRun};

/// Serialize a document to the HTML stored as article content.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    let mut in_quote = false;
    let mut open_list: Option<ListKind> = None;

    for block in doc.blocks() {
        let list = if block.is_textual() { block.list } else { None };

        if open_list.is_some() && (block.quote != in_quote || list != open_list) {
            close_list(&mut out, open_list.take());
        }
        if block.quote != in_quote {
            out.push_str(if block.quote { "<blockquote>" } else { "</blockquote>" });
            in_quote = block.quote;
        }
        if list.is_some() && open_list != list {
            out.push_str(match list {
                Some(ListKind::Ordered) => "<ol>",
                _ => "<ul>",
            });
            open_list = list;
        }

        if open_list.is_some() {
            out.push_str("<li>");
            write_block(&mut out, block);
            out.push_str("</li>");
        } else {
            write_block(&mut out, block);
        }
    }

    close_list(&mut out, open_list);
    if in_quote {
        out.push_str("</blockquote>");
    }
    out
}

fn close_list(out: &mut String, list: Option<ListKind>) {
    match list {
        Some(ListKind::Bullet) => out.push_str("</ul>"),
        Some(ListKind::Ordered) => out.push_str("</ol>"),
        None => {}
    }
}

fn write_block(out: &mut String, block: &Block) {
    let style = block
        .align
        .map(|a| format!(r#" style="text-align: {}""#, a.as_css()))
        .unwrap_or_default();

    match &block.kind {
        BlockKind::Paragraph => {
            out.push_str(&format!("<p{style}>"));
            write_runs(out, &block.runs);
            out.push_str("</p>");
        }
        BlockKind::Heading(level) => {
            let n = level.get();
            out.push_str(&format!("<h{n}{style}>"));
            write_runs(out, &block.runs);
            out.push_str(&format!("</h{n}>"));
        }
        BlockKind::CodeBlock { language } => {
            out.push_str(&format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                language.as_str(),
                encode_text(&block.text())
            ));
        }
        BlockKind::Image { src, alt } => {
            out.push_str(&format!(
                r#"<img src="{}" alt="{}">"#,
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(alt)
            ));
        }
    }
}

fn write_runs(out: &mut String, runs: &[TextRun]) {
    for run in runs {
        for mark in run.marks.iter() {
            out.push('<');
            out.push_str(mark.tag());
            out.push('>');
        }
        let escaped = encode_text(&run.text).replace('\n', "<br>");
        out.push_str(&escaped);
        for mark in run.marks.iter().collect::<Vec<_>>().into_iter().rev() {
            out.push_str("</");
            out.push_str(mark.tag());
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::CodeLanguage;
    use crate::domain::draft::document::{Align, HeadingLevel, Mark, MarkSet};

    #[test]
    fn empty_document_is_an_empty_paragraph() {
        assert_eq!(to_html(&Document::new()), "<p></p>");
    }

    #[test]
    fn marks_nest_in_fixed_order() {
        let marks = MarkSet::empty().with(Mark::Code).with(Mark::Bold);
        let doc = Document::from_blocks(vec![Block::paragraph(vec![
            TextRun::plain("a < b "),
            TextRun::marked("x", marks),
        ])]);
        assert_eq!(
            to_html(&doc),
            "<p>a &lt; b <strong><code>x</code></strong></p>"
        );
    }

    #[test]
    fn text_keeps_quotes_literal() {
        let doc = Document::from_blocks(vec![Block::paragraph(vec![TextRun::plain(
            r#"diz "oi" & 'tchau'"#,
        )])]);
        assert_eq!(to_html(&doc), r#"<p>diz "oi" &amp; 'tchau'</p>"#);
    }

    #[test]
    fn lists_and_quotes_group_consecutive_blocks() {
        let mut first = Block::paragraph(vec![TextRun::plain("um")]);
        first.list = Some(ListKind::Bullet);
        let mut second = Block::paragraph(vec![TextRun::plain("dois")]);
        second.list = Some(ListKind::Bullet);
        let mut quoted = Block::paragraph(vec![TextRun::plain("citação")]);
        quoted.quote = true;
        let doc = Document::from_blocks(vec![first, second, quoted]);
        assert_eq!(
            to_html(&doc),
            "<ul><li><p>um</p></li><li><p>dois</p></li></ul><blockquote><p>citação</p></blockquote>"
        );
    }

    #[test]
    fn headings_code_and_images() {
        let mut heading = Block::heading(HeadingLevel::new(2).unwrap(), vec![TextRun::plain("Título")]);
        heading.align = Some(Align::Center);
        let doc = Document::from_blocks(vec![
            heading,
            Block::code(CodeLanguage::Cpp, "if (a < b) {}"),
            Block::image("https://cdn/x.png", "figura \"1\""),
        ]);
        assert_eq!(
            to_html(&doc),
            concat!(
                r#"<h2 style="text-align: center">Título</h2>"#,
                r#"<pre><code class="language-c++">if (a &lt; b) {}</code></pre>"#,
                r#"<img src="https://cdn/x.png" alt="figura &quot;1&quot;">"#
            )
        );
    }
}
