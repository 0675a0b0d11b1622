//! Editing actions
//!
//! Each action is a flag record describing how a keystroke is handled:
//! whether it swallows the native event, drops pending overrides,
//! deletes a selected range first, which undo label it records under,
//! and which mutation it runs.

use crate::history::UndoLabel;
use crate::metaview::MetaviewPreset;
use crate::overrides::Style;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// Split the closest block, producing a new one.
    Block,
    /// Insert a line break element inside the block.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOp {
    Undo,
    Redo,
}

/// The mutation an action performs, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutate {
    Remove(Direction),
    Breakline(BreakKind),
    Format(Style),
    InsertText,
    History(HistoryOp),
    SelectEditable,
    Metaview(MetaviewPreset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub clear_overrides: bool,
    pub remove_content: bool,
    pub prevent_default: bool,
    pub undo: Option<UndoLabel>,
    pub mutate: Option<Mutate>,
}

impl ActionDescriptor {
    const NONE: ActionDescriptor = ActionDescriptor {
        clear_overrides: false,
        remove_content: false,
        prevent_default: false,
        undo: None,
        mutate: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionName {
    BreakBlock,
    BreakLine,
    DeleteBackward,
    DeleteForward,
    FormatBold,
    FormatItalic,
    FormatUnderline,
    InputText,
    Undo,
    Redo,
    SelectAll,
    /// Caret movement: clears pending overrides, mutates nothing.
    Navigate,
    Metaview(MetaviewPreset),
}

impl ActionName {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionName::BreakBlock => "breakBlock",
            ActionName::BreakLine => "breakLine",
            ActionName::DeleteBackward => "deleteBackward",
            ActionName::DeleteForward => "deleteForward",
            ActionName::FormatBold => "formatBold",
            ActionName::FormatItalic => "formatItalic",
            ActionName::FormatUnderline => "formatUnderline",
            ActionName::InputText => "inputText",
            ActionName::Undo => "undo",
            ActionName::Redo => "redo",
            ActionName::SelectAll => "selectAll",
            ActionName::Navigate => "navigate",
            ActionName::Metaview(MetaviewPreset::Plain) => "metaview",
            ActionName::Metaview(MetaviewPreset::Outline) => "metaviewOutline",
            ActionName::Metaview(MetaviewPreset::Padded) => "metaviewPadded",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionName {
    type Err = crate::error::EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "breakBlock" => ActionName::BreakBlock,
            "breakLine" => ActionName::BreakLine,
            "deleteBackward" => ActionName::DeleteBackward,
            "deleteForward" => ActionName::DeleteForward,
            "formatBold" => ActionName::FormatBold,
            "formatItalic" => ActionName::FormatItalic,
            "formatUnderline" => ActionName::FormatUnderline,
            "inputText" => ActionName::InputText,
            "undo" => ActionName::Undo,
            "redo" => ActionName::Redo,
            "selectAll" => ActionName::SelectAll,
            "navigate" => ActionName::Navigate,
            "metaview" => ActionName::Metaview(MetaviewPreset::Plain),
            "metaviewOutline" => ActionName::Metaview(MetaviewPreset::Outline),
            "metaviewPadded" => ActionName::Metaview(MetaviewPreset::Padded),
            other => {
                return Err(crate::error::EditError::parse(format!(
                    "unknown action '{}'",
                    other
                )))
            }
        })
    }
}

/// Flags for a named action.
#[must_use]
pub const fn descriptor(name: ActionName) -> ActionDescriptor {
    match name {
        ActionName::DeleteBackward => ActionDescriptor {
            clear_overrides: true,
            prevent_default: true,
            undo: Some(UndoLabel::Delete),
            mutate: Some(Mutate::Remove(Direction::Backward)),
            ..ActionDescriptor::NONE
        },
        ActionName::DeleteForward => ActionDescriptor {
            clear_overrides: true,
            prevent_default: true,
            undo: Some(UndoLabel::Delete),
            mutate: Some(Mutate::Remove(Direction::Forward)),
            ..ActionDescriptor::NONE
        },
        ActionName::BreakBlock => ActionDescriptor {
            remove_content: true,
            prevent_default: true,
            undo: Some(UndoLabel::Enter),
            mutate: Some(Mutate::Breakline(BreakKind::Block)),
            ..ActionDescriptor::NONE
        },
        ActionName::BreakLine => ActionDescriptor {
            remove_content: true,
            prevent_default: true,
            undo: Some(UndoLabel::Enter),
            mutate: Some(Mutate::Breakline(BreakKind::Line)),
            ..ActionDescriptor::NONE
        },
        ActionName::FormatBold => ActionDescriptor {
            prevent_default: true,
            undo: Some(UndoLabel::Bold),
            mutate: Some(Mutate::Format(Style::Bold)),
            ..ActionDescriptor::NONE
        },
        ActionName::FormatItalic => ActionDescriptor {
            prevent_default: true,
            undo: Some(UndoLabel::Italic),
            mutate: Some(Mutate::Format(Style::Italic)),
            ..ActionDescriptor::NONE
        },
        ActionName::FormatUnderline => ActionDescriptor {
            prevent_default: true,
            undo: Some(UndoLabel::Underline),
            mutate: Some(Mutate::Format(Style::Underline)),
            ..ActionDescriptor::NONE
        },
        ActionName::InputText => ActionDescriptor {
            remove_content: true,
            prevent_default: true,
            undo: Some(UndoLabel::Typing),
            mutate: Some(Mutate::InsertText),
            ..ActionDescriptor::NONE
        },
        ActionName::SelectAll => ActionDescriptor {
            prevent_default: true,
            clear_overrides: true,
            mutate: Some(Mutate::SelectEditable),
            ..ActionDescriptor::NONE
        },
        ActionName::Undo => ActionDescriptor {
            clear_overrides: true,
            prevent_default: true,
            mutate: Some(Mutate::History(HistoryOp::Undo)),
            ..ActionDescriptor::NONE
        },
        ActionName::Redo => ActionDescriptor {
            clear_overrides: true,
            prevent_default: true,
            mutate: Some(Mutate::History(HistoryOp::Redo)),
            ..ActionDescriptor::NONE
        },
        ActionName::Navigate => ActionDescriptor {
            clear_overrides: true,
            ..ActionDescriptor::NONE
        },
        ActionName::Metaview(preset) => ActionDescriptor {
            mutate: Some(Mutate::Metaview(preset)),
            ..ActionDescriptor::NONE
        },
    }
}

/// The publicly exported action table.
#[must_use]
pub fn actions() -> Vec<(ActionName, ActionDescriptor)> {
    [
        ActionName::BreakBlock,
        ActionName::BreakLine,
        ActionName::DeleteBackward,
        ActionName::DeleteForward,
        ActionName::FormatBold,
        ActionName::FormatItalic,
        ActionName::InputText,
        ActionName::Redo,
        ActionName::Undo,
    ]
    .into_iter()
    .map(|name| (name, descriptor(name)))
    .collect()
}
