//! Structural markup view
//!
//! Debug rendering driven purely by classes on the editing host; a
//! stylesheet keyed on them draws element outlines, tag names, and
//! padding.

use crate::dom::{Document, NodeId};

const BASE: &str = "quill-metaview";
const OUTLINE: &str = "quill-metaview-outline";
const TAGNAME: &str = "quill-metaview-tagname";
const PADDING: &str = "quill-metaview-padding";

/// Rendering presets, from bare outlines to padded boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaviewPreset {
    Plain,
    Outline,
    Padded,
}

fn preset_classes(preset: MetaviewPreset) -> &'static [&'static str] {
    match preset {
        MetaviewPreset::Plain => &[],
        MetaviewPreset::Outline => &[OUTLINE, TAGNAME],
        MetaviewPreset::Padded => &[OUTLINE, TAGNAME, PADDING],
    }
}

fn active_preset(doc: &Document, elem: NodeId) -> Option<MetaviewPreset> {
    if !doc.has_class(elem, BASE) {
        return None;
    }
    Some(if doc.has_class(elem, PADDING) {
        MetaviewPreset::Padded
    } else if doc.has_class(elem, OUTLINE) {
        MetaviewPreset::Outline
    } else {
        MetaviewPreset::Plain
    })
}

fn clear(doc: &mut Document, elem: NodeId) {
    for class in [BASE, OUTLINE, TAGNAME, PADDING] {
        doc.remove_class(elem, class);
    }
}

/// Toggle the metaview on `elem`. Re-applying the active preset turns
/// the view off; any other preset switches to it.
pub fn toggle(doc: &mut Document, elem: NodeId, preset: MetaviewPreset) {
    let was = active_preset(doc, elem);
    clear(doc, elem);
    if was == Some(preset) {
        return;
    }
    doc.add_class(elem, BASE);
    for class in preset_classes(preset) {
        doc.add_class(elem, class);
    }
}
