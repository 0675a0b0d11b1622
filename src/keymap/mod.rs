//! Keystroke to action resolution
//!
//! Bindings are per event kind. Unmatched keypresses that carry a
//! printable character fall through to text input; unmatched keydowns
//! resolve to nothing and the native event proceeds untouched.

use crate::action::ActionName;
use crate::key::{Chord, EventKind, Key};
use crate::metaview::MetaviewPreset;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Keymap {
    keydown: HashMap<Chord, ActionName>,
    keypress: HashMap<Chord, ActionName>,
    keyup: HashMap<Chord, ActionName>,
}

impl Keymap {
    pub fn empty() -> Self {
        Keymap {
            keydown: HashMap::new(),
            keypress: HashMap::new(),
            keyup: HashMap::new(),
        }
    }

    fn table_mut(&mut self, kind: EventKind) -> &mut HashMap<Chord, ActionName> {
        match kind {
            EventKind::Keydown => &mut self.keydown,
            EventKind::Keypress => &mut self.keypress,
            EventKind::Keyup => &mut self.keyup,
        }
    }

    fn table(&self, kind: EventKind) -> &HashMap<Chord, ActionName> {
        match kind {
            EventKind::Keydown => &self.keydown,
            EventKind::Keypress => &self.keypress,
            EventKind::Keyup => &self.keyup,
        }
    }

    pub fn register(&mut self, kind: EventKind, chord: Chord, action: ActionName) {
        self.table_mut(kind).insert(chord, action);
    }

    /// Look up the action for an event, falling back to `InputText`
    /// for printable keypresses.
    pub fn resolve(&self, kind: EventKind, chord: Chord) -> Option<ActionName> {
        if let Some(&action) = self.table(kind).get(&chord) {
            tracing::trace!(%chord, action = action.as_str(), "resolved binding");
            return Some(action);
        }
        if is_text_input(kind, chord) {
            tracing::trace!(%chord, "fallthrough to text input");
            return Some(ActionName::InputText);
        }
        None
    }
}

/// Whether an unbound event should insert its character.
fn is_text_input(kind: EventKind, chord: Chord) -> bool {
    kind == EventKind::Keypress
        && !chord.modifiers.ctrl
        && !chord.modifiers.alt
        && matches!(chord.key, Key::Char(c) if !c.is_control())
}

impl Default for Keymap {
    fn default() -> Self {
        use ActionName::*;
        let mut map = Keymap::empty();
        let kd = EventKind::Keydown;

        for key in [
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
        ] {
            map.register(kd, Chord::plain(key), Navigate);
        }

        map.register(kd, Chord::plain(Key::Delete), DeleteForward);
        map.register(kd, Chord::plain(Key::Backspace), DeleteBackward);
        map.register(kd, Chord::plain(Key::Enter), BreakBlock);
        map.register(kd, Chord::shift(Key::Enter), BreakLine);
        map.register(kd, Chord::plain(Key::Tab), InputText);

        // ctrl and meta are interchangeable for the editing shortcuts
        for modify in [Chord::ctrl, Chord::meta] {
            map.register(kd, modify(Key::Char('b')), FormatBold);
            map.register(kd, modify(Key::Char('i')), FormatItalic);
            map.register(kd, modify(Key::Char('u')), FormatUnderline);
            map.register(kd, modify(Key::Char('a')), SelectAll);
            map.register(kd, modify(Key::Char('z')), Undo);
        }
        for modify in [Chord::ctrl_shift, Chord::meta_shift] {
            map.register(kd, modify(Key::Char('z')), Redo);
        }

        map.register(kd, Chord::ctrl(Key::Char('0')), Metaview(MetaviewPreset::Plain));
        map.register(kd, Chord::ctrl(Key::Char('1')), Metaview(MetaviewPreset::Outline));
        map.register(kd, Chord::ctrl(Key::Char('2')), Metaview(MetaviewPreset::Padded));

        map
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
