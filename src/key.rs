//! Key, modifier, and chord representation for typing input

use crate::error::EditError;
use std::fmt;
use std::str::FromStr;

/// Phase of a keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Keydown,
    Keypress,
    Keyup,
}

/// Represents the key part of a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Editing keys
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    PageUp,
    PageDown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::Enter => write!(f, "enter"),
            Self::Backspace => write!(f, "backspace"),
            Self::Delete => write!(f, "delete"),
            Self::Tab => write!(f, "tab"),
            Self::Escape => write!(f, "escape"),
            Self::ArrowUp => write!(f, "up"),
            Self::ArrowDown => write!(f, "down"),
            Self::ArrowLeft => write!(f, "left"),
            Self::ArrowRight => write!(f, "right"),
            Self::Home => write!(f, "home"),
            Self::End => write!(f, "end"),
            Self::PageUp => write!(f, "pageup"),
            Self::PageDown => write!(f, "pagedown"),
        }
    }
}

impl FromStr for Key {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enter" => Ok(Self::Enter),
            "backspace" => Ok(Self::Backspace),
            "delete" => Ok(Self::Delete),
            "tab" => Ok(Self::Tab),
            "escape" => Ok(Self::Escape),
            "up" => Ok(Self::ArrowUp),
            "down" => Ok(Self::ArrowDown),
            "left" => Ok(Self::ArrowLeft),
            "right" => Ok(Self::ArrowRight),
            "home" => Ok(Self::Home),
            "end" => Ok(Self::End),
            "pageup" => Ok(Self::PageUp),
            "pagedown" => Ok(Self::PageDown),
            "space" => Ok(Self::Char(' ')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Char(c)),
                    _ => Err(EditError::parse(format!("unknown key: {:?}", s))),
                }
            }
        }
    }
}

/// Active modifier keys of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A modifier combination plus a key, compared by equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Chord {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Chord with no modifiers
    pub fn plain(key: Key) -> Self {
        Self::new(Modifiers::NONE, key)
    }

    pub fn ctrl(key: Key) -> Self {
        Self::new(
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
            key,
        )
    }

    pub fn meta(key: Key) -> Self {
        Self::new(
            Modifiers {
                meta: true,
                ..Modifiers::NONE
            },
            key,
        )
    }

    pub fn shift(key: Key) -> Self {
        Self::new(
            Modifiers {
                shift: true,
                ..Modifiers::NONE
            },
            key,
        )
    }

    pub fn ctrl_shift(key: Key) -> Self {
        Self::new(
            Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::NONE
            },
            key,
        )
    }

    pub fn meta_shift(key: Key) -> Self {
        Self::new(
            Modifiers {
                meta: true,
                shift: true,
                ..Modifiers::NONE
            },
            key,
        )
    }

    pub fn has_shift(&self) -> bool {
        self.modifiers.shift
    }
}

impl fmt::Display for Chord {
    /// Canonical chord string, modifier names joined by "+" (e.g. "ctrl+shift+z")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "shift+")?;
        }
        if self.modifiers.meta {
            write!(f, "meta+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for Chord {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::NONE;
        let mut key = None;
        let mut parts = s.split('+').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                match part {
                    "ctrl" => modifiers.ctrl = true,
                    "alt" => modifiers.alt = true,
                    "shift" => modifiers.shift = true,
                    "meta" => modifiers.meta = true,
                    _ => return Err(EditError::parse(format!("unknown modifier: {:?}", part))),
                }
            } else {
                key = Some(part.parse::<Key>()?);
            }
        }
        match key {
            Some(key) => Ok(Self::new(modifiers, key)),
            None => Err(EditError::parse(format!("empty chord: {:?}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_display_is_canonical() {
        assert_eq!(Chord::ctrl_shift(Key::Char('z')).to_string(), "ctrl+shift+z");
        assert_eq!(Chord::shift(Key::Enter).to_string(), "shift+enter");
        assert_eq!(Chord::plain(Key::Char('a')).to_string(), "a");
    }

    #[test]
    fn chord_roundtrips_through_parse() {
        for s in ["ctrl+b", "meta+shift+z", "shift+enter", "tab", "space", "x"] {
            let chord: Chord = s.parse().unwrap();
            let back: Chord = chord.to_string().parse().unwrap();
            assert_eq!(chord, back);
        }
    }

    #[test]
    fn space_parses_to_char() {
        let chord: Chord = "space".parse().unwrap();
        assert_eq!(chord.key, Key::Char(' '));
    }

    #[test]
    fn unknown_modifier_is_an_error() {
        assert!("hyper+x".parse::<Chord>().is_err());
        assert!("".parse::<Chord>().is_err());
    }
}
