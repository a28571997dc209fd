// src/domain/draft/editor.rs
use crate::domain::content::{CodeLanguage, DEFAULT_CODE_LANGUAGE};
use crate::domain::draft::command::{EditorCommand, Toggle};
use crate::domain::draft::document::{
    Block, BlockKind, Document, Mark, MarkSet, Position, Selection,
};
use crate::domain::draft::palette::is_palette_emoji;
use crate::domain::draft::serialize::to_html;
use crate::domain::errors::{DomainError, DomainResult};

const HISTORY_DEPTH: usize = 100;

type ChangeListener = Box<dyn FnMut(&str) + Send>;

#[derive(Debug, Clone)]
struct Snapshot {
    doc: Document,
    selection: Selection,
}

/// Structured editing surface over a [`Document`].
///
/// Every mutation that changes the serialized HTML is reported to the change
/// listener. The caller owns the persisted value; [`DraftEditor::sync_external`]
/// only reloads when that value differs from what the editor last emitted.
pub struct DraftEditor {
    doc: Document,
    selection: Selection,
    stored_marks: Option<MarkSet>,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    last_emitted: String,
    listener: Option<ChangeListener>,
}

impl Default for DraftEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DraftEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftEditor")
            .field("doc", &self.doc)
            .field("selection", &self.selection)
            .field("last_emitted", &self.last_emitted)
            .finish_non_exhaustive()
    }
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    pub fn with_document(doc: Document) -> Self {
        let last_emitted = to_html(&doc);
        Self {
            doc,
            selection: Selection::caret(Position::START),
            stored_marks: None,
            undo: Vec::new(),
            redo: Vec::new(),
            last_emitted,
            listener: None,
        }
    }

    pub fn on_change(&mut self, listener: impl FnMut(&str) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn html(&self) -> String {
        to_html(&self.doc)
    }

    pub fn last_emitted(&self) -> &str {
        &self.last_emitted
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Reload from the caller's value unless it is the value this editor
    /// emitted last. Returns whether the document was replaced.
    pub fn sync_external<P>(&mut self, value: &str, parse: P) -> DomainResult<bool>
    where
        P: FnOnce(&str) -> DomainResult<Document>,
    {
        if value == self.last_emitted {
            return Ok(false);
        }
        self.doc = parse(value)?;
        self.selection = Selection::caret(Position::START);
        self.stored_marks = None;
        self.undo.clear();
        self.redo.clear();
        self.last_emitted = value.to_string();
        Ok(true)
    }

    pub fn apply(&mut self, command: EditorCommand) -> DomainResult<()> {
        match command {
            EditorCommand::Select { anchor, head } => {
                self.select(anchor, head);
                Ok(())
            }
            EditorCommand::SelectAll => {
                self.select_all();
                Ok(())
            }
            EditorCommand::Toggle { toggle } => self.toggle(toggle),
            EditorCommand::SetCodeLanguage { language } => self.set_code_language(&language),
            EditorCommand::InsertText { text } => self.insert_text(&text),
            EditorCommand::InsertEmoji { emoji } => self.insert_emoji(&emoji),
            EditorCommand::InsertLatex { input } => self.insert_latex(&input),
            EditorCommand::InsertImage { src, alt } => self.insert_image(&src, &alt),
            EditorCommand::SplitBlock => self.split_block(),
            EditorCommand::DeleteSelection => self.mutate(|ed| {
                ed.delete_selection();
                Ok(())
            }),
            EditorCommand::Undo => {
                self.undo();
                Ok(())
            }
            EditorCommand::Redo => {
                self.redo();
                Ok(())
            }
        }
    }

    pub fn select(&mut self, anchor: Position, head: Position) {
        self.selection = Selection::range(self.clamp(anchor), self.clamp(head));
        self.stored_marks = None;
    }

    pub fn select_all(&mut self) {
        let last = self.doc.blocks().len() - 1;
        let end = Position::new(last, self.doc.blocks()[last].char_len());
        self.select(Position::START, end);
    }

    fn clamp(&self, position: Position) -> Position {
        let blocks = self.doc.blocks();
        let block = position.block.min(blocks.len() - 1);
        Position::new(block, position.offset.min(blocks[block].char_len()))
    }

    // --- toggles -------------------------------------------------------

    pub fn is_active(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Mark { mark } => self.is_mark_active(mark),
            Toggle::Heading { level } => self.all_selected_textual(|b| b.kind == BlockKind::Heading(level)),
            Toggle::CodeBlock => self.all_selected_textual(Block::is_code),
            Toggle::Blockquote => self.all_selected(|b| b.quote),
            Toggle::List { list } => self.all_selected_textual(|b| b.list == Some(list)),
            Toggle::Align { align } => self.all_selected_textual(|b| b.align == Some(align)),
        }
    }

    /// Switch formatting on for the selection, or off when it is already
    /// active everywhere in it.
    pub fn toggle(&mut self, toggle: Toggle) -> DomainResult<()> {
        let active = self.is_active(toggle);
        if let Toggle::Mark { mark } = toggle {
            if self.selection.is_collapsed() {
                let marks = self.marks_at_caret();
                self.stored_marks = Some(if active { marks.without(mark) } else { marks.with(mark) });
                return Ok(());
            }
            return self.mutate(|ed| {
                ed.for_selected_chars(|marks| if active { marks.without(mark) } else { marks.with(mark) });
                Ok(())
            });
        }

        self.mutate(|ed| {
            for block in ed.selected_blocks_mut() {
                match toggle {
                    Toggle::Blockquote => block.quote = !active,
                    _ if !block.is_textual() => {}
                    Toggle::Heading { level } => {
                        set_kind(block, if active { BlockKind::Paragraph } else { BlockKind::Heading(level) })
                    }
                    Toggle::CodeBlock => set_kind(
                        block,
                        if active {
                            BlockKind::Paragraph
                        } else {
                            BlockKind::CodeBlock { language: DEFAULT_CODE_LANGUAGE }
                        },
                    ),
                    Toggle::List { list } => block.list = if active { None } else { Some(list) },
                    Toggle::Align { align } => block.align = if active { None } else { Some(align) },
                    Toggle::Mark { .. } => {}
                }
            }
            Ok(())
        })
    }

    fn is_mark_active(&self, mark: Mark) -> bool {
        if self.selection.is_collapsed() {
            return self
                .stored_marks
                .unwrap_or_else(|| self.marks_at_caret())
                .contains(mark);
        }
        let mut seen = false;
        for (index, start, end) in self.selected_spans() {
            let block = &self.doc.blocks()[index];
            if !block.is_textual() || block.is_code() {
                continue;
            }
            for (_, marks) in &block.chars()[start..end] {
                if !marks.contains(mark) {
                    return false;
                }
                seen = true;
            }
        }
        seen
    }

    fn marks_at_caret(&self) -> MarkSet {
        let caret = self.selection.head;
        let block = &self.doc.blocks()[caret.block];
        if caret.offset == 0 || block.is_code() {
            return MarkSet::empty();
        }
        block
            .chars()
            .get(caret.offset - 1)
            .map(|(_, marks)| *marks)
            .unwrap_or_default()
    }

    /// The active code block language, when the caret sits in a code block.
    pub fn code_language(&self) -> Option<CodeLanguage> {
        match self.doc.blocks()[self.selection.head.block].kind {
            BlockKind::CodeBlock { language } => Some(language),
            _ => None,
        }
    }

    pub fn set_code_language(&mut self, tag: &str) -> DomainResult<()> {
        if self.code_language().is_none() {
            return Err(DomainError::invalid_state("code block is not active"));
        }
        let language = CodeLanguage::parse(tag)?;
        let index = self.selection.head.block;
        self.mutate(|ed| {
            ed.doc.blocks_mut()[index].kind = BlockKind::CodeBlock { language };
            Ok(())
        })
    }

    // --- insertion -----------------------------------------------------

    pub fn insert_text(&mut self, text: &str) -> DomainResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.mutate(|ed| {
            ed.delete_selection();
            ed.insert_at_caret(text);
            Ok(())
        })
    }

    pub fn insert_emoji(&mut self, glyph: &str) -> DomainResult<()> {
        if !is_palette_emoji(glyph) {
            return Err(DomainError::validation(format!("unknown emoji: {glyph}")));
        }
        self.insert_text(glyph)
    }

    /// Wrap the input, as typed, in display-math delimiters at the caret.
    /// Blank input is ignored.
    pub fn insert_latex(&mut self, input: &str) -> DomainResult<()> {
        if input.trim().is_empty() {
            return Ok(());
        }
        self.insert_text(&format!("$${input}$$"))
    }

    pub fn insert_image(&mut self, src: &str, alt: &str) -> DomainResult<()> {
        let src = src.trim();
        if !(src.starts_with("https://") || src.starts_with("http://") || src.starts_with('/')) {
            return Err(DomainError::validation("image source must be a URL"));
        }
        self.mutate(|ed| {
            ed.delete_selection();
            let caret = ed.selection.head;
            let blocks = ed.doc.blocks_mut();
            let current = &mut blocks[caret.block];
            let at = if !current.is_textual() {
                caret.block + 1
            } else if current.char_len() == 0 {
                blocks.remove(caret.block);
                caret.block
            } else if caret.offset == 0 {
                caret.block
            } else if caret.offset >= current.char_len() {
                caret.block + 1
            } else {
                let tail = current.split_off(caret.offset);
                blocks.insert(caret.block + 1, tail);
                caret.block + 1
            };
            blocks.insert(at, Block::image(src, alt.trim()));
            if at + 1 >= blocks.len() {
                blocks.push(Block::empty_paragraph());
            }
            ed.selection = Selection::caret(Position::new(at + 1, 0));
            Ok(())
        })
    }

    /// Enter key: new line inside code, new block elsewhere.
    pub fn split_block(&mut self) -> DomainResult<()> {
        self.mutate(|ed| {
            ed.delete_selection();
            let caret = ed.selection.head;
            let blocks = ed.doc.blocks_mut();
            let current = &mut blocks[caret.block];
            if current.is_code() {
                ed.insert_at_caret("\n");
                return Ok(());
            }
            let next = if current.is_textual() {
                current.split_off(caret.offset)
            } else {
                Block::empty_paragraph()
            };
            blocks.insert(caret.block + 1, next);
            ed.selection = Selection::caret(Position::new(caret.block + 1, 0));
            Ok(())
        })
    }

    // --- history -------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop() else {
            return false;
        };
        self.redo.push(self.snapshot());
        self.restore(previous);
        self.emit();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push(self.snapshot());
        self.restore(next);
        self.emit();
        true
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            doc: self.doc.clone(),
            selection: self.selection,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.doc = snapshot.doc;
        self.selection = snapshot.selection;
        self.stored_marks = None;
    }

    /// Run an edit as one history step. Failed edits leave the editor as it was.
    fn mutate<F>(&mut self, edit: F) -> DomainResult<()>
    where
        F: FnOnce(&mut Self) -> DomainResult<()>,
    {
        let before = self.snapshot();
        if let Err(err) = edit(self) {
            self.restore(before);
            return Err(err);
        }
        if self.doc != before.doc {
            self.undo.push(before);
            if self.undo.len() > HISTORY_DEPTH {
                self.undo.remove(0);
            }
            self.redo.clear();
            self.emit();
        }
        Ok(())
    }

    fn emit(&mut self) {
        let html = to_html(&self.doc);
        if html == self.last_emitted {
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener(&html);
        }
        self.last_emitted = html;
    }

    // --- selection helpers ---------------------------------------------

    /// `(block, start, end)` character spans covered by the selection.
    fn selected_spans(&self) -> Vec<(usize, usize, usize)> {
        let from = self.selection.from();
        let to = self.selection.to();
        (from.block..=to.block)
            .map(|index| {
                let len = self.doc.blocks()[index].char_len();
                let start = if index == from.block { from.offset.min(len) } else { 0 };
                let end = if index == to.block { to.offset.min(len) } else { len };
                (index, start, end.max(start))
            })
            .collect()
    }

    fn all_selected(&self, predicate: impl Fn(&Block) -> bool) -> bool {
        let from = self.selection.from().block;
        let to = self.selection.to().block;
        self.doc.blocks()[from..=to].iter().all(predicate)
    }

    fn all_selected_textual(&self, predicate: impl Fn(&Block) -> bool) -> bool {
        let from = self.selection.from().block;
        let to = self.selection.to().block;
        let mut textual = self.doc.blocks()[from..=to]
            .iter()
            .filter(|b| b.is_textual())
            .peekable();
        textual.peek().is_some() && textual.all(predicate)
    }

    fn selected_blocks_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        let from = self.selection.from().block;
        let to = self.selection.to().block;
        self.doc.blocks_mut()[from..=to].iter_mut()
    }

    fn for_selected_chars(&mut self, change: impl Fn(MarkSet) -> MarkSet) {
        for (index, start, end) in self.selected_spans() {
            let block = &mut self.doc.blocks_mut()[index];
            if !block.is_textual() || block.is_code() {
                continue;
            }
            let mut chars = block.chars();
            for (_, marks) in &mut chars[start..end] {
                *marks = change(*marks);
            }
            block.set_chars(chars);
        }
    }

    fn delete_selection(&mut self) {
        if self.selection.is_collapsed() {
            return;
        }
        let from = self.selection.from();
        let to = self.selection.to();
        let blocks = self.doc.blocks_mut();

        if from.block == to.block {
            let block = &mut blocks[from.block];
            let mut chars = block.chars();
            let end = to.offset.min(chars.len());
            chars.drain(from.offset.min(end)..end);
            block.set_chars(chars);
        } else {
            let head: Vec<_> = blocks[from.block].chars().into_iter().take(from.offset).collect();
            let tail: Vec<_> = blocks[to.block].chars().into_iter().skip(to.offset).collect();
            let mut merged = if blocks[from.block].is_textual() {
                blocks[from.block].clone()
            } else if blocks[to.block].is_textual() {
                blocks[to.block].clone()
            } else {
                Block::empty_paragraph()
            };
            merged.set_chars(head.into_iter().chain(tail));
            blocks.splice(from.block..=to.block, [merged]);
        }
        let offset = if self.doc.blocks()[from.block].is_textual() { from.offset } else { 0 };
        self.selection = Selection::caret(Position::new(from.block, offset));
    }

    /// Insert at a collapsed caret. Text typed on an image lands in a new
    /// paragraph after it.
    fn insert_at_caret(&mut self, text: &str) {
        let mut caret = self.selection.head;
        let marks = self.stored_marks.take().unwrap_or_else(|| self.marks_at_caret());
        let blocks = self.doc.blocks_mut();
        if !blocks[caret.block].is_textual() {
            blocks.insert(caret.block + 1, Block::empty_paragraph());
            caret = Position::new(caret.block + 1, 0);
        }
        let block = &mut blocks[caret.block];
        let mut chars = block.chars();
        let at = caret.offset.min(chars.len());
        let inserted: Vec<_> = text.chars().map(|c| (c, marks)).collect();
        let count = inserted.len();
        chars.splice(at..at, inserted);
        block.set_chars(chars);
        self.selection = Selection::caret(Position::new(caret.block, at + count));
    }
}

fn set_kind(block: &mut Block, kind: BlockKind) {
    let chars = block.chars();
    block.kind = kind;
    if block.is_code() {
        block.list = None;
        block.align = None;
    }
    block.set_chars(chars);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::document::{Align, HeadingLevel, ListKind, TextRun};
    use std::sync::{Arc, Mutex};

    fn editor_with(text: &str) -> DraftEditor {
        let mut editor = DraftEditor::new();
        editor.insert_text(text).unwrap();
        editor
    }

    fn heading(level: u8) -> Toggle {
        Toggle::Heading {
            level: HeadingLevel::new(level).unwrap(),
        }
    }

    #[test]
    fn bold_toggle_is_idempotent_over_a_range() {
        let mut editor = editor_with("hello world");
        editor.select(Position::new(0, 0), Position::new(0, 5));
        let bold = Toggle::Mark { mark: Mark::Bold };

        editor.toggle(bold).unwrap();
        assert!(editor.is_active(bold));
        assert_eq!(editor.html(), "<p><strong>hello</strong> world</p>");

        editor.toggle(bold).unwrap();
        assert!(!editor.is_active(bold));
        assert_eq!(editor.html(), "<p>hello world</p>");
    }

    #[test]
    fn partially_marked_range_gets_mark_everywhere() {
        let mut editor = editor_with("abcd");
        let italic = Toggle::Mark { mark: Mark::Italic };
        editor.select(Position::new(0, 0), Position::new(0, 2));
        editor.toggle(italic).unwrap();
        editor.select(Position::new(0, 0), Position::new(0, 4));
        assert!(!editor.is_active(italic));
        editor.toggle(italic).unwrap();
        assert_eq!(editor.html(), "<p><em>abcd</em></p>");
    }

    #[test]
    fn collapsed_mark_toggle_applies_to_next_insert() {
        let mut editor = editor_with("a");
        editor.toggle(Toggle::Mark { mark: Mark::Code }).unwrap();
        assert!(editor.is_active(Toggle::Mark { mark: Mark::Code }));
        editor.insert_text("b").unwrap();
        assert_eq!(editor.html(), "<p>a<code>b</code></p>");
    }

    #[test]
    fn heading_toggle_round_trips_to_paragraph() {
        let mut editor = editor_with("Título");
        editor.toggle(heading(1)).unwrap();
        assert!(editor.is_active(heading(1)));
        assert!(!editor.is_active(heading(2)));
        editor.toggle(heading(2)).unwrap();
        assert_eq!(editor.html(), "<h2>Título</h2>");
        editor.toggle(heading(2)).unwrap();
        assert_eq!(editor.html(), "<p>Título</p>");
    }

    #[test]
    fn lists_quotes_and_alignment_toggle() {
        let mut editor = editor_with("item");
        let bullet = Toggle::List { list: ListKind::Bullet };
        editor.toggle(bullet).unwrap();
        editor.toggle(Toggle::Blockquote).unwrap();
        editor.toggle(Toggle::Align { align: Align::Right }).unwrap();
        assert_eq!(
            editor.html(),
            r#"<blockquote><ul><li><p style="text-align: right">item</p></li></ul></blockquote>"#
        );
        editor.toggle(bullet).unwrap();
        editor.toggle(Toggle::Blockquote).unwrap();
        editor.toggle(Toggle::Align { align: Align::Right }).unwrap();
        assert_eq!(editor.html(), "<p>item</p>");
    }

    #[test]
    fn code_language_requires_active_code_block() {
        let mut editor = editor_with("let x = 1;");
        let err = editor.set_code_language("python").unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));

        editor.toggle(Toggle::CodeBlock).unwrap();
        assert_eq!(editor.code_language(), Some(DEFAULT_CODE_LANGUAGE));
        assert!(editor.set_code_language("cobol").is_err());
        editor.set_code_language("python").unwrap();
        assert_eq!(
            editor.html(),
            r#"<pre><code class="language-python">let x = 1;</code></pre>"#
        );
    }

    #[test]
    fn enter_inside_code_inserts_newline() {
        let mut editor = DraftEditor::new();
        editor.toggle(Toggle::CodeBlock).unwrap();
        editor.insert_text("a").unwrap();
        editor.split_block().unwrap();
        editor.insert_text("b").unwrap();
        assert_eq!(editor.document().blocks().len(), 1);
        assert_eq!(editor.document().blocks()[0].text(), "a\nb");
    }

    #[test]
    fn image_is_inserted_as_block_and_splits_text() {
        let mut editor = editor_with("antes depois");
        editor.select(Position::new(0, 6), Position::new(0, 6));
        editor.insert_image("https://cdn/fig.png", "figura").unwrap();
        assert_eq!(
            editor.html(),
            r#"<p>antes </p><img src="https://cdn/fig.png" alt="figura"><p>depois</p>"#
        );
        assert_eq!(editor.selection().head, Position::new(2, 0));
        assert!(editor.insert_image("javascript:alert(1)", "").is_err());
    }

    #[test]
    fn image_replaces_empty_paragraph() {
        let mut editor = DraftEditor::new();
        editor.insert_image("/media/covers/x.jpg", "").unwrap();
        assert_eq!(editor.html(), r#"<img src="/media/covers/x.jpg" alt=""><p></p>"#);
    }

    #[test]
    fn emoji_and_latex_insert_at_caret() {
        let mut editor = editor_with("ok ");
        editor.insert_emoji("🔬").unwrap();
        assert!(editor.insert_emoji("🚀").is_err());
        editor.insert_latex("   ").unwrap();
        editor.insert_latex(" E = mc^2 ").unwrap();
        assert_eq!(editor.html(), "<p>ok 🔬$$ E = mc^2 $$</p>");
    }

    #[test]
    fn every_mutation_is_emitted_once() {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = emitted.clone();
        let mut editor = DraftEditor::new();
        editor.on_change(move |html| sink.lock().unwrap().push(html.to_string()));

        editor.insert_text("a").unwrap();
        editor.select(Position::new(0, 0), Position::new(0, 1));
        editor.toggle(Toggle::Mark { mark: Mark::Bold }).unwrap();
        editor.insert_latex("").unwrap();

        let emitted = emitted.lock().unwrap();
        assert_eq!(*emitted, vec!["<p>a</p>".to_string(), "<p><strong>a</strong></p>".to_string()]);
    }

    #[test]
    fn undo_and_redo_walk_history() {
        let mut editor = editor_with("um");
        editor.insert_text(" dois").unwrap();
        assert!(editor.undo());
        assert_eq!(editor.html(), "<p>um</p>");
        assert!(editor.undo());
        assert_eq!(editor.html(), "<p></p>");
        assert!(!editor.undo());
        assert!(editor.redo());
        assert_eq!(editor.html(), "<p>um</p>");
        editor.insert_text("!").unwrap();
        assert!(!editor.can_redo());
    }

    #[test]
    fn sync_external_ignores_own_output() {
        let mut editor = editor_with("rascunho");
        let own = editor.last_emitted().to_string();
        let replaced = editor
            .sync_external(&own, |_| panic!("must not reparse own output"))
            .unwrap();
        assert!(!replaced);

        let replaced = editor
            .sync_external("<p>outro</p>", |_| {
                Ok(Document::from_blocks(vec![Block::paragraph(vec![TextRun::plain("outro")])]))
            })
            .unwrap();
        assert!(replaced);
        assert_eq!(editor.html(), "<p>outro</p>");
        assert!(!editor.can_undo());
    }

    #[test]
    fn deleting_across_blocks_merges_them() {
        let mut editor = editor_with("abc");
        editor.split_block().unwrap();
        editor.insert_text("def").unwrap();
        editor.select(Position::new(0, 1), Position::new(1, 2));
        editor.insert_text("X").unwrap();
        assert_eq!(editor.html(), "<p>aXf</p>");
    }
}
