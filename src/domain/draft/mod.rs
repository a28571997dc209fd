// src/domain/draft/mod.rs
pub mod command;
pub mod document;
pub mod editor;
pub mod palette;
pub mod serialize;
pub mod state;

pub use command::{EditorCommand, Toggle};
pub use document::{
    Align, Block, BlockKind, Document, HeadingLevel, ListKind, Mark, MarkSet, Position, Selection,
    TextRun,
};
pub use editor::DraftEditor;
pub use palette::{EMOJI_PALETTE, is_palette_emoji};
pub use serialize::to_html;
pub use state::{Draft, ValidatedDraft};
