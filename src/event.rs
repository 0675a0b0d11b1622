//! Typing events and the per-editable state they act on

use crate::boundary::Boundary;
use crate::dom::{NodeId, Tag};
use crate::history::UndoContext;
use crate::key::{Chord, EventKind};
use crate::overrides::OverrideSet;

/// Caret or range, plus the pending formatting state that travels with
/// it. `formatting` holds styles harvested from removed content;
/// `overrides` holds styles the user toggled at a collapsed caret.
#[derive(Debug, Clone)]
pub struct Selection {
    pub start: Boundary,
    pub end: Boundary,
    pub formatting: OverrideSet,
    pub overrides: OverrideSet,
}

impl Selection {
    pub fn new(start: Boundary, end: Boundary) -> Self {
        Selection {
            start,
            end,
            formatting: OverrideSet::new(),
            overrides: OverrideSet::new(),
        }
    }

    pub fn caret(b: Boundary) -> Self {
        Self::new(b, b)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn boundaries(&self) -> [Boundary; 2] {
        [self.start, self.end]
    }

    pub fn set_boundaries(&mut self, bs: [Boundary; 2]) {
        self.start = bs[0];
        self.end = bs[1];
    }

    pub fn clear_overrides(&mut self) {
        self.formatting.clear();
        self.overrides.clear();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EditableSettings {
    /// Element created when Enter splits a block.
    pub default_block: Tag,
}

impl Default for EditableSettings {
    fn default() -> Self {
        EditableSettings {
            default_block: Tag::P,
        }
    }
}

/// An editing host together with its history and settings.
#[derive(Debug)]
pub struct Editable {
    pub elem: NodeId,
    pub settings: EditableSettings,
    pub undo: UndoContext,
}

impl Editable {
    pub fn new(elem: NodeId) -> Self {
        Editable {
            elem,
            settings: EditableSettings::default(),
            undo: UndoContext::new(),
        }
    }
}

/// One keyboard event threaded through the typing pipeline. Handlers
/// update `selection` in place and set `default_prevented` when the
/// host application should swallow the native event.
#[derive(Debug)]
pub struct TypingEvent {
    pub kind: EventKind,
    pub chord: Chord,
    pub selection: Selection,
    pub default_prevented: bool,
}

impl TypingEvent {
    pub fn new(kind: EventKind, chord: Chord, selection: Selection) -> Self {
        TypingEvent {
            kind,
            chord,
            selection,
            default_prevented: false,
        }
    }

    pub fn keydown(chord: Chord, selection: Selection) -> Self {
        Self::new(EventKind::Keydown, chord, selection)
    }

    pub fn keypress(chord: Chord, selection: Selection) -> Self {
        Self::new(EventKind::Keypress, chord, selection)
    }
}
