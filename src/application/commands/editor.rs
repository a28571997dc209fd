// src/application/commands/editor.rs
use std::sync::{Arc, Mutex};

use crate::{
    application::{
        dto::{ActiveFormatsDto, EditorStateDto},
        error::{ApplicationError, ApplicationResult},
        ports::render::DraftParser,
    },
    domain::draft::{Align, DraftEditor, EditorCommand, HeadingLevel, ListKind, Mark, Toggle},
};

const MAX_COMMANDS: usize = 500;

/// Drives a [`DraftEditor`] from a batch of commands, starting from the
/// caller's current content.
#[derive(Debug, Clone)]
pub struct ApplyEditorCommands {
    pub content: Option<String>,
    pub commands: Vec<EditorCommand>,
}

pub struct EditorCommandService {
    parser: Arc<dyn DraftParser>,
}

impl EditorCommandService {
    pub fn new(parser: Arc<dyn DraftParser>) -> Self {
        Self { parser }
    }

    pub fn apply(&self, request: ApplyEditorCommands) -> ApplicationResult<EditorStateDto> {
        if request.commands.len() > MAX_COMMANDS {
            return Err(ApplicationError::validation(format!(
                "at most {MAX_COMMANDS} commands per request"
            )));
        }

        let mut editor = DraftEditor::new();
        if let Some(content) = request.content.as_deref() {
            editor.sync_external(content, |html| self.parser.parse(html))?;
        }

        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        editor.on_change(move |html| {
            if let Ok(mut values) = sink.lock() {
                values.push(html.to_string());
            }
        });

        for command in request.commands {
            editor.apply(command)?;
        }

        let emitted = emitted
            .lock()
            .map(|mut values| std::mem::take(&mut *values))
            .unwrap_or_default();

        Ok(EditorStateDto {
            html: editor.html(),
            emitted,
            active: active_formats(&editor),
            code_language: editor.code_language().map(|l| l.as_str().to_string()),
            can_undo: editor.can_undo(),
            can_redo: editor.can_redo(),
        })
    }
}

fn active_formats(editor: &DraftEditor) -> ActiveFormatsDto {
    let mark = |mark| editor.is_active(Toggle::Mark { mark });
    let heading = (1..=3).find(|level| {
        HeadingLevel::new(*level)
            .map(|level| editor.is_active(Toggle::Heading { level }))
            .unwrap_or(false)
    });
    let align = [Align::Left, Align::Center, Align::Right, Align::Justify]
        .into_iter()
        .find(|align| editor.is_active(Toggle::Align { align: *align }))
        .map(|align| align.as_css().to_string());

    ActiveFormatsDto {
        bold: mark(Mark::Bold),
        italic: mark(Mark::Italic),
        underline: mark(Mark::Underline),
        strike: mark(Mark::Strike),
        code: mark(Mark::Code),
        heading,
        code_block: editor.is_active(Toggle::CodeBlock),
        blockquote: editor.is_active(Toggle::Blockquote),
        bullet_list: editor.is_active(Toggle::List { list: ListKind::Bullet }),
        ordered_list: editor.is_active(Toggle::List { list: ListKind::Ordered }),
        align,
    }
}
