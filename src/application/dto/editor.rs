// src/application/dto/editor.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Formatting active at the current selection, as shown by the toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActiveFormatsDto {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub code: bool,
    pub heading: Option<u8>,
    pub code_block: bool,
    pub blockquote: bool,
    pub bullet_list: bool,
    pub ordered_list: bool,
    pub align: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditorStateDto {
    /// Serialized document after all commands ran.
    pub html: String,
    /// Every value the editor emitted, one per effective mutation.
    pub emitted: Vec<String>,
    pub active: ActiveFormatsDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
    pub can_undo: bool,
    pub can_redo: bool,
}
