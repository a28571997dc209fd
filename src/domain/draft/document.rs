// src/domain/draft/document.rs
use crate::domain::content::CodeLanguage;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
}

impl Mark {
    /// Nesting order used when serializing, outermost first.
    pub const ALL: [Mark; 5] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strike,
        Mark::Code,
    ];

    fn bit(self) -> u8 {
        match self {
            Mark::Bold => 1,
            Mark::Italic => 1 << 1,
            Mark::Underline => 1 << 2,
            Mark::Strike => 1 << 3,
            Mark::Code => 1 << 4,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Underline => "u",
            Mark::Strike => "s",
            Mark::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MarkSet(u8);

impl MarkSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, mark: Mark) -> bool {
        self.0 & mark.bit() != 0
    }

    pub fn with(self, mark: Mark) -> Self {
        Self(self.0 | mark.bit())
    }

    pub fn without(self, mark: Mark) -> Self {
        Self(self.0 & !mark.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Mark> {
        Mark::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Mark> for MarkSet {
    fn from_iter<T: IntoIterator<Item = Mark>>(iter: T) -> Self {
        iter.into_iter().fold(MarkSet::empty(), MarkSet::with)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub marks: MarkSet,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: MarkSet::empty(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: MarkSet) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> DomainResult<Self> {
        if (1..=3).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DomainError::Validation(format!(
                "heading level must be between 1 and 3, got {level}"
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(value: HeadingLevel) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim() {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            "justify" => Some(Align::Justify),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(HeadingLevel),
    CodeBlock { language: CodeLanguage },
    Image { src: String, alt: String },
}

/// A top-level block. Block quotes and list membership are flags on the
/// block rather than container nodes; consecutive blocks sharing a flag are
/// grouped when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub runs: Vec<TextRun>,
    pub align: Option<Align>,
    pub quote: bool,
    pub list: Option<ListKind>,
}

impl Block {
    fn with_kind(kind: BlockKind, runs: Vec<TextRun>) -> Self {
        let mut block = Self {
            kind,
            runs: Vec::new(),
            align: None,
            quote: false,
            list: None,
        };
        block.set_chars(runs.into_iter().flat_map(|run| {
            let marks = run.marks;
            run.text.chars().map(move |c| (c, marks)).collect::<Vec<_>>()
        }));
        block
    }

    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Self::with_kind(BlockKind::Paragraph, runs)
    }

    pub fn heading(level: HeadingLevel, runs: Vec<TextRun>) -> Self {
        Self::with_kind(BlockKind::Heading(level), runs)
    }

    pub fn code(language: CodeLanguage, text: impl Into<String>) -> Self {
        Self::with_kind(
            BlockKind::CodeBlock { language },
            vec![TextRun::plain(text)],
        )
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::with_kind(
            BlockKind::Image {
                src: src.into(),
                alt: alt.into(),
            },
            Vec::new(),
        )
    }

    pub fn empty_paragraph() -> Self {
        Self::paragraph(Vec::new())
    }

    pub fn is_textual(&self) -> bool {
        !matches!(self.kind, BlockKind::Image { .. })
    }

    pub fn is_code(&self) -> bool {
        matches!(self.kind, BlockKind::CodeBlock { .. })
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn char_len(&self) -> usize {
        self.runs.iter().map(|r| r.text.chars().count()).sum()
    }

    pub(crate) fn chars(&self) -> Vec<(char, MarkSet)> {
        self.runs
            .iter()
            .flat_map(|run| run.text.chars().map(move |c| (c, run.marks)))
            .collect()
    }

    /// Replace the content, merging adjacent characters with equal marks.
    /// Code blocks never carry marks.
    pub(crate) fn set_chars(&mut self, chars: impl IntoIterator<Item = (char, MarkSet)>) {
        let strip = self.is_code();
        let mut runs: Vec<TextRun> = Vec::new();
        for (ch, marks) in chars {
            let marks = if strip { MarkSet::empty() } else { marks };
            match runs.last_mut() {
                Some(last) if last.marks == marks => last.text.push(ch),
                _ => runs.push(TextRun::marked(ch.to_string(), marks)),
            }
        }
        self.runs = runs;
    }

    /// Split at a character offset. The tail keeps formatting flags; a heading
    /// continues as a paragraph.
    pub(crate) fn split_off(&mut self, offset: usize) -> Block {
        let mut chars = self.chars();
        let tail_chars = chars.split_off(offset.min(chars.len()));
        self.set_chars(chars);
        let kind = match &self.kind {
            BlockKind::Heading(_) => BlockKind::Paragraph,
            other => other.clone(),
        };
        let mut tail = Block {
            kind,
            runs: Vec::new(),
            align: self.align,
            quote: self.quote,
            list: self.list,
        };
        tail.set_chars(tail_chars);
        tail
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::empty_paragraph()],
        }
    }

    /// A document always holds at least one block.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            Self::new()
        } else {
            Self { blocks }
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    pub fn is_blank(&self) -> bool {
        self.blocks
            .iter()
            .all(|b| b.is_textual() && b.text().trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub block: usize,
    pub offset: usize,
}

impl Position {
    pub const START: Position = Position {
        block: 0,
        offset: 0,
    };

    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn caret(position: Position) -> Self {
        Self {
            anchor: position,
            head: position,
        }
    }

    pub fn range(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_merge_when_marks_match() {
        let bold = MarkSet::empty().with(Mark::Bold);
        let block = Block::paragraph(vec![
            TextRun::marked("ab", bold),
            TextRun::marked("cd", bold),
            TextRun::plain("e"),
        ]);
        assert_eq!(block.runs.len(), 2);
        assert_eq!(block.text(), "abcde");
    }

    #[test]
    fn split_heading_continues_as_paragraph() {
        let mut block = Block::heading(HeadingLevel::new(2).unwrap(), vec![TextRun::plain("título")]);
        block.align = Some(Align::Center);
        let tail = block.split_off(3);
        assert_eq!(block.text(), "tít");
        assert_eq!(tail.text(), "ulo");
        assert_eq!(tail.kind, BlockKind::Paragraph);
        assert_eq!(tail.align, Some(Align::Center));
    }

    #[test]
    fn code_blocks_drop_marks() {
        let mut block = Block::code(CodeLanguage::Python, "");
        block.set_chars([('x', MarkSet::empty().with(Mark::Bold))]);
        assert!(block.runs[0].marks.is_empty());
    }

    #[test]
    fn heading_level_is_bounded() {
        assert!(HeadingLevel::new(0).is_err());
        assert!(HeadingLevel::new(4).is_err());
        assert_eq!(HeadingLevel::new(3).unwrap().get(), 3);
    }

    #[test]
    fn selection_orders_endpoints() {
        let sel = Selection::range(Position::new(2, 1), Position::new(0, 4));
        assert_eq!(sel.from(), Position::new(0, 4));
        assert_eq!(sel.to(), Position::new(2, 1));
        assert!(!sel.is_collapsed());
    }
}
