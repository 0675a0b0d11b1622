//! Whitespace selection for space insertion
//!
//! Browsers collapse ordinary spaces that would render at the edge of a
//! line box. When a typed space would land next to existing whitespace,
//! or against a rendered element/block edge, a non-breaking space keeps
//! it visible.

use crate::boundary::{self, Boundary};
use crate::dom::{Document, NodeId};

pub const NBSP: char = '\u{a0}';

fn is_behind_whitespace(doc: &Document, b: Boundary) -> bool {
    b.offset > 0
        && doc
            .char_at(b.node, b.offset - 1)
            .is_some_and(|c| c.is_whitespace())
}

fn is_infront_whitespace(doc: &Document, b: Boundary) -> bool {
    doc.char_at(b.node, b.offset)
        .is_some_and(|c| c.is_whitespace())
}

fn backtrace_stop(doc: &Document, node: NodeId) -> bool {
    doc.is_text(node) || doc.is_editing_host(node) || doc.has_linebreaking_style(node)
}

/// Pick the whitespace character to insert at a normalized boundary.
///
/// Inside a text node, a plain space suffices when both neighbours are
/// non-space characters. At an element boundary the nearest rendered
/// text on either side decides: hitting an element or block edge first,
/// or touching existing whitespace, forces a non-breaking space.
pub fn appropriate_whitespace(doc: &Document, b: Boundary) -> char {
    if boundary::is_text_boundary(doc, b) {
        return if is_behind_whitespace(doc, b) || is_infront_whitespace(doc, b) {
            NBSP
        } else {
            ' '
        };
    }
    let node = b.node;
    match doc.backward_preorder_backtrace_until(node, backtrace_stop) {
        Some(stop) if doc.is_text(stop) => {
            if is_behind_whitespace(doc, boundary::from_end_of(doc, stop)) {
                return NBSP;
            }
        }
        _ => return NBSP,
    }
    match doc.forward_preorder_backtrace_until(node, backtrace_stop) {
        Some(stop) if doc.is_text(stop) => {
            if is_infront_whitespace(doc, boundary::from_start_of(stop)) {
                NBSP
            } else {
                ' '
            }
        }
        _ => NBSP,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
