// src/domain/draft/command.rs
use crate::domain::draft::document::{Align, HeadingLevel, ListKind, Mark, Position};
use serde::{Deserialize, Serialize};

/// Formatting that can be switched on and off for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Toggle {
    Mark { mark: Mark },
    Heading { level: HeadingLevel },
    CodeBlock,
    Blockquote,
    List { list: ListKind },
    Align { align: Align },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    Select { anchor: Position, head: Position },
    SelectAll,
    Toggle { toggle: Toggle },
    SetCodeLanguage { language: String },
    InsertText { text: String },
    InsertEmoji { emoji: String },
    InsertLatex { input: String },
    InsertImage { src: String, #[serde(default)] alt: String },
    SplitBlock,
    DeleteSelection,
    Undo,
    Redo,
}
