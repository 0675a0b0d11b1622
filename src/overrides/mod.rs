//! Pending style overrides
//!
//! An override is a style toggle that applies to the *next* inserted content
//! rather than to existing text. Sets are keyed by style identity, ordered,
//! and merged with later entries winning.

use crate::boundary::{self, Boundary};
use crate::dom::{Document, NodeId, Tag};
use crate::editing;
use crate::error::Result;

/// Closed set of toggleable inline styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    /// The element tag that carries this style
    pub fn tag(self) -> Tag {
        match self {
            Self::Bold => Tag::B,
            Self::Italic => Tag::I,
            Self::Underline => Tag::U,
        }
    }

    pub fn from_tag(tag: Tag) -> Option<Self> {
        match tag {
            Tag::B => Some(Self::Bold),
            Tag::I => Some(Self::Italic),
            Tag::U => Some(Self::Underline),
            _ => None,
        }
    }
}

/// A style plus its pending on/off state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub style: Style,
    pub active: bool,
}

/// Ordered set of overrides, at most one entry per style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    entries: Vec<Override>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Override] {
        &self.entries
    }

    /// Pending state for a style, if any entry exists
    pub fn state(&self, style: Style) -> Option<bool> {
        self.entries
            .iter()
            .find(|o| o.style == style)
            .map(|o| o.active)
    }

    /// Insert or replace the entry for the override's style
    pub fn set(&mut self, ov: Override) {
        if let Some(entry) = self.entries.iter_mut().find(|o| o.style == ov.style) {
            entry.active = ov.active;
        } else {
            self.entries.push(ov);
        }
    }

    /// Union of several sets; later sets win on conflicting styles
    pub fn join(sets: &[&OverrideSet]) -> OverrideSet {
        let mut out = OverrideSet::new();
        for set in sets {
            for &ov in set.entries() {
                out.set(ov);
            }
        }
        out
    }

    /// New set with the style's state flipped, or inserted as `active`
    /// when no entry exists yet.
    #[must_use]
    pub fn toggle(&self, style: Style, active: bool) -> OverrideSet {
        let mut out = self.clone();
        match out.state(style) {
            Some(state) => out.set(Override {
                style,
                active: !state,
            }),
            None => out.set(Override { style, active }),
        }
        out
    }
}

/// Ambient active styles at a node: every styled element between the node
/// and its editing host contributes an active override.
pub fn harvest(doc: &Document, node: NodeId) -> OverrideSet {
    let mut set = OverrideSet::new();
    for anc in doc.ancestors(node) {
        if doc.is_editing_host(anc) {
            break;
        }
        if let Some(style) = doc.tag(anc).and_then(Style::from_tag) {
            set.set(Override {
                style,
                active: true,
            });
        }
    }
    set
}

/// Materialize pending overrides as markup at a collapsed boundary,
/// returning the boundary at which content should now be inserted.
/// Callers clear both pending sets afterwards.
pub fn consume(doc: &mut Document, boundary: Boundary, set: &OverrideSet) -> Result<Boundary> {
    let mut b = boundary;
    for ov in set.entries() {
        let context = boundary::context_element(doc, b);
        let ambient_active = harvest(doc, context).state(ov.style) == Some(true);
        if ov.active && !ambient_active {
            b = wrap_at(doc, b, ov.style.tag())?;
        } else if !ov.active && ambient_active {
            b = split_out_of(doc, b, ov.style.tag())?;
        }
    }
    Ok(b)
}

fn wrap_at(doc: &mut Document, b: Boundary, tag: Tag) -> Result<Boundary> {
    let eb = editing::split_to_element_boundary(doc, b)?;
    let el = doc.create_element(tag);
    doc.insert_at(eb.node, el, eb.offset)?;
    Ok(Boundary::new(el, 0))
}

fn split_out_of(doc: &mut Document, b: Boundary, tag: Tag) -> Result<Boundary> {
    let context = boundary::context_element(doc, b);
    let styled = doc
        .ancestors(context)
        .into_iter()
        .take_while(|&n| !doc.is_editing_host(n))
        .find(|&n| doc.tag(n) == Some(tag));
    let Some(anc) = styled else {
        return Ok(b);
    };
    match doc.parent(anc) {
        Some(parent) => editing::split_at(doc, b, parent),
        None => Ok(b),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
