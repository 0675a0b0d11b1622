//! Editing engine primitives
//!
//! Node-level mutation used by the typing operations: range removal,
//! style toggling, line/paragraph breaking, text insertion, and the
//! structural normalization ("prop") that keeps carets addressable.

use crate::boundary::{self, Boundary};
use crate::dom::{Document, NodeId, Tag};
use crate::error::{EditError, Result};
use crate::overrides::Style;
use std::cmp::Ordering;

/// Split a text node at a char offset, returning (first, second)
pub fn split_text(doc: &mut Document, node: NodeId, at: usize) -> Result<(NodeId, NodeId)> {
    let text = doc
        .text(node)
        .ok_or_else(|| EditError::mutation("split_text on a non-text node"))?;
    let tail: String = text.chars().skip(at).collect();
    let len = doc.text_len(node);
    if at > len {
        return Err(EditError::boundary(format!(
            "split offset {} out of range (len {})",
            at, len
        )));
    }
    doc.splice_text(node, at, len)?;
    let second = doc.create_text(tail);
    let parent = doc
        .parent(node)
        .ok_or_else(|| EditError::mutation("split_text on a detached node"))?;
    let idx = doc
        .index_in_parent(node)
        .ok_or_else(|| EditError::internal("node missing from its parent"))?;
    doc.insert_at(parent, second, idx + 1)?;
    Ok((node, second))
}

/// Lift a boundary to an element position, splitting the text node when
/// the boundary falls strictly inside one.
pub fn split_to_element_boundary(doc: &mut Document, b: Boundary) -> Result<Boundary> {
    let b = boundary::normalize(doc, b);
    if !doc.is_text(b.node) {
        return Ok(b);
    }
    let len = doc.text_len(b.node);
    if b.offset == 0 {
        boundary::before(doc, b.node)
            .ok_or_else(|| EditError::mutation("text node has no parent"))
    } else if b.offset >= len {
        boundary::after(doc, b.node).ok_or_else(|| EditError::mutation("text node has no parent"))
    } else {
        let (first, _) = split_text(doc, b.node, b.offset)?;
        boundary::after(doc, first).ok_or_else(|| EditError::mutation("text node has no parent"))
    }
}

/// Split the boundary's ancestors up to (excluding) `limit`, cloning
/// partially covered elements. Returns the boundary between the halves
/// as a child index within `limit`.
pub fn split_at(doc: &mut Document, b: Boundary, limit: NodeId) -> Result<Boundary> {
    let mut b = split_to_element_boundary(doc, b)?;
    while b.node != limit {
        let el = b.node;
        let parent = doc
            .parent(el)
            .ok_or_else(|| EditError::mutation("split_at: limit is not an ancestor"))?;
        let idx = doc
            .index_in_parent(el)
            .ok_or_else(|| EditError::internal("node missing from its parent"))?;
        let child_count = doc.children(el).len();
        if b.offset == 0 {
            b = Boundary::new(parent, idx);
        } else if b.offset >= child_count {
            b = Boundary::new(parent, idx + 1);
        } else {
            let tag = doc
                .tag(el)
                .ok_or_else(|| EditError::mutation("cannot split a text container"))?;
            let second = doc.create_element(tag);
            while doc.children(el).len() > b.offset {
                let child = doc.children(el)[b.offset];
                doc.append(second, child);
            }
            doc.insert_at(parent, second, idx + 1)?;
            b = Boundary::new(parent, idx + 1);
        }
    }
    Ok(b)
}

/// Delete the content between two boundaries, merging split blocks, and
/// return the collapsed boundary pair at the join point.
pub fn remove(doc: &mut Document, start: Boundary, end: Boundary) -> Result<(Boundary, Boundary)> {
    let mut start = boundary::normalize(doc, start);
    let mut end = boundary::normalize(doc, end);
    if boundary::cmp(doc, start, end) == Ordering::Greater {
        std::mem::swap(&mut start, &mut end);
    }
    if start == end {
        return Ok((start, end));
    }
    if start.node == end.node && doc.is_text(start.node) {
        doc.splice_text(start.node, start.offset, end.offset)?;
        let b = Boundary::new(start.node, start.offset);
        return Ok((b, b));
    }
    let start_block = boundary::closest_block(doc, start.node);
    let end_block = boundary::closest_block(doc, end.node);
    let covered = covered_nodes(doc, start, end);
    if doc.is_text(start.node) {
        let len = doc.text_len(start.node);
        doc.splice_text(start.node, start.offset.min(len), len)?;
    }
    if doc.is_text(end.node) {
        doc.splice_text(end.node, 0, end.offset)?;
    }
    for node in covered {
        doc.detach(node);
    }
    if start_block != end_block
        && !doc.is_editing_host(end_block)
        && !doc.is_ancestor_of(end_block, start_block)
        && !doc.is_ancestor_of(start_block, end_block)
        && doc.parent(end_block).is_some()
    {
        while let Some(&child) = doc.children(end_block).first() {
            doc.append(start_block, child);
        }
        doc.detach(end_block);
    }
    let b = Boundary::new(start.node, start.offset);
    Ok((b, b))
}

fn covered_nodes(doc: &Document, start: Boundary, end: Boundary) -> Vec<NodeId> {
    let Some(cc) = boundary::common_container(doc, start, end) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    collect_covered(doc, cc, start, end, &mut out);
    out
}

fn collect_covered(
    doc: &Document,
    node: NodeId,
    start: Boundary,
    end: Boundary,
    out: &mut Vec<NodeId>,
) {
    for &child in doc.children(node) {
        let (Some(b_before), Some(b_after)) =
            (boundary::before(doc, child), boundary::after(doc, child))
        else {
            continue;
        };
        // skip subtrees entirely outside the range
        if boundary::cmp(doc, b_after, start) != Ordering::Greater
            || boundary::cmp(doc, b_before, end) != Ordering::Less
        {
            continue;
        }
        if boundary::cmp(doc, b_before, start) != Ordering::Less
            && boundary::cmp(doc, b_after, end) != Ordering::Greater
        {
            out.push(child);
        } else {
            collect_covered(doc, child, start, end, out);
        }
    }
}

/// Toggle an inline style across a range. Wraps uncovered text in the
/// style element, or strips the style when the whole range already
/// carries it. Boundary positions are preserved.
pub fn toggle(
    doc: &mut Document,
    start: Boundary,
    end: Boundary,
    style: Style,
) -> Result<(Boundary, Boundary)> {
    let start = boundary::normalize(doc, start);
    let end = boundary::normalize(doc, end);
    if start == end {
        return Ok((start, end));
    }
    let tag = style.tag();
    let segments = text_segments(doc, start, end);
    if segments.is_empty() {
        return Ok((start, end));
    }
    let all_styled = segments
        .iter()
        .all(|seg| has_style_ancestor(doc, seg.node, tag));
    let mut isolated = Vec::with_capacity(segments.len());
    for seg in &segments {
        isolated.push(isolate(doc, seg)?);
    }
    for &node in &isolated {
        if all_styled {
            strip_style(doc, node, tag)?;
        } else if !has_style_ancestor(doc, node, tag) {
            wrap_leaf(doc, node, tag)?;
        }
    }
    let (Some(&first), Some(&last)) = (isolated.first(), isolated.last()) else {
        return Ok((start, end));
    };
    Ok((Boundary::new(first, 0), boundary::from_end_of(doc, last)))
}

struct Segment {
    node: NodeId,
    from: usize,
    to: usize,
}

fn text_segments(doc: &Document, start: Boundary, end: Boundary) -> Vec<Segment> {
    let Some(cc) = boundary::common_container(doc, start, end) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    collect_segments(doc, cc, start, end, &mut out);
    out
}

fn collect_segments(
    doc: &Document,
    node: NodeId,
    start: Boundary,
    end: Boundary,
    out: &mut Vec<Segment>,
) {
    if doc.is_text(node) {
        let from = if start.node == node { start.offset } else { 0 };
        let to = if end.node == node {
            end.offset
        } else {
            doc.text_len(node)
        };
        if from < to {
            out.push(Segment { node, from, to });
        }
        return;
    }
    for &child in doc.children(node) {
        let (Some(b_before), Some(b_after)) =
            (boundary::before(doc, child), boundary::after(doc, child))
        else {
            continue;
        };
        if boundary::cmp(doc, b_after, start) == Ordering::Greater
            && boundary::cmp(doc, b_before, end) == Ordering::Less
        {
            collect_segments(doc, child, start, end, out);
        }
    }
}

/// Cut the segment's char range out into its own text node
fn isolate(doc: &mut Document, seg: &Segment) -> Result<NodeId> {
    let mut node = seg.node;
    let mut to = seg.to;
    if seg.from > 0 {
        let (_, second) = split_text(doc, node, seg.from)?;
        node = second;
        to -= seg.from;
    }
    if to < doc.text_len(node) {
        split_text(doc, node, to)?;
    }
    Ok(node)
}

fn has_style_ancestor(doc: &Document, node: NodeId, tag: Tag) -> bool {
    doc.ancestors(node)
        .into_iter()
        .take_while(|&n| !doc.is_editing_host(n))
        .any(|n| doc.tag(n) == Some(tag))
}

fn nearest_style_ancestor(doc: &Document, node: NodeId, tag: Tag) -> Option<NodeId> {
    doc.ancestors(node)
        .into_iter()
        .take_while(|&n| !doc.is_editing_host(n))
        .find(|&n| doc.tag(n) == Some(tag))
}

fn wrap_leaf(doc: &mut Document, node: NodeId, tag: Tag) -> Result<()> {
    let parent = doc
        .parent(node)
        .ok_or_else(|| EditError::mutation("cannot wrap a detached node"))?;
    let idx = doc
        .index_in_parent(node)
        .ok_or_else(|| EditError::internal("node missing from its parent"))?;
    let el = doc.create_element(tag);
    doc.insert_at(parent, el, idx)?;
    doc.append(el, node);
    Ok(())
}

/// Replace an element with its children
fn unwrap(doc: &mut Document, el: NodeId) -> Result<()> {
    let parent = doc
        .parent(el)
        .ok_or_else(|| EditError::mutation("cannot unwrap a detached node"))?;
    let mut idx = doc
        .index_in_parent(el)
        .ok_or_else(|| EditError::internal("node missing from its parent"))?;
    while let Some(&child) = doc.children(el).first() {
        doc.insert_at(parent, child, idx)?;
        idx += 1;
    }
    doc.detach(el);
    Ok(())
}

/// Remove every `tag` ancestor around `node` by splitting the styled
/// element at the node's edges and unwrapping the piece that holds it.
fn strip_style(doc: &mut Document, node: NodeId, tag: Tag) -> Result<()> {
    while let Some(anc) = nearest_style_ancestor(doc, node, tag) {
        let Some(parent) = doc.parent(anc) else {
            break;
        };
        let b = boundary::before(doc, node)
            .ok_or_else(|| EditError::mutation("cannot strip a detached node"))?;
        split_at(doc, b, parent)?;
        let Some(holder) = nearest_style_ancestor(doc, node, tag) else {
            break;
        };
        let holder_parent = doc
            .parent(holder)
            .ok_or_else(|| EditError::mutation("styled ancestor has no parent"))?;
        let b = boundary::after(doc, node)
            .ok_or_else(|| EditError::mutation("cannot strip a detached node"))?;
        split_at(doc, b, holder_parent)?;
        unwrap(doc, holder)?;
    }
    Ok(())
}

/// Break at the boundary: insert a BR for soft breaks, or split the
/// nearest block into two for hard breaks, the second half taking the
/// breaker tag. Returns the collapsed caret after the break.
pub fn breakline(doc: &mut Document, b: Boundary, breaker: Tag) -> Result<(Boundary, Boundary)> {
    if breaker == Tag::Br {
        return insert_break_element(doc, b);
    }
    let context = boundary::context_element(doc, b);
    let block = boundary::closest_block(doc, context);
    if doc.is_editing_host(block) {
        // content directly under the host has no block to split
        return insert_break_element(doc, b);
    }
    let parent = doc
        .parent(block)
        .ok_or_else(|| EditError::mutation("block has no parent"))?;
    let at = split_at(doc, b, block)?;
    let idx = doc
        .index_in_parent(block)
        .ok_or_else(|| EditError::internal("node missing from its parent"))?;
    let next_block = doc.create_element(breaker);
    while doc.children(block).len() > at.offset {
        let child = doc.children(block)[at.offset];
        doc.append(next_block, child);
    }
    doc.insert_at(parent, next_block, idx + 1)?;
    prop(doc, block);
    prop(doc, next_block);
    let caret = boundary::normalize(doc, Boundary::new(next_block, 0));
    Ok((caret, caret))
}

fn insert_break_element(doc: &mut Document, b: Boundary) -> Result<(Boundary, Boundary)> {
    let eb = split_to_element_boundary(doc, b)?;
    let br = doc.create_element(Tag::Br);
    doc.insert_at(eb.node, br, eb.offset)?;
    let caret = boundary::normalize(doc, Boundary::new(eb.node, eb.offset + 1));
    Ok((caret, caret))
}

/// Insert text at a boundary, returning the boundary after the insertion
pub fn insert_text_at_boundary(doc: &mut Document, text: &str, b: Boundary) -> Result<Boundary> {
    let b = boundary::normalize(doc, b);
    let chars = text.chars().count();
    if doc.is_text(b.node) {
        doc.insert_in_text(b.node, b.offset, text)?;
        return Ok(Boundary::new(b.node, b.offset + chars));
    }
    let t = doc.create_text(text);
    doc.insert_at(b.node, t, b.offset)?;
    Ok(Boundary::new(t, chars))
}

/// Detach a node while preserving the positions of the given boundaries.
/// The order of the returned boundaries matches the input.
pub fn remove_node(doc: &mut Document, node: NodeId, bs: [Boundary; 2]) -> [Boundary; 2] {
    let fallback = boundary::before(doc, node);
    let parent = doc.parent(node);
    let idx = doc.index_in_parent(node);
    let mut out = bs;
    for b in &mut out {
        if b.node == node || doc.is_ancestor_of(node, b.node) {
            if let Some(fb) = fallback {
                *b = fb;
            }
        } else if Some(b.node) == parent {
            if let Some(i) = idx {
                if b.offset > i {
                    b.offset -= 1;
                }
            }
        }
    }
    doc.detach(node);
    out
}

/// Structural normalization: give a block container without rendered
/// content a BR placeholder so the caret stays addressable.
pub fn prop(doc: &mut Document, node: NodeId) {
    if !doc.is_element(node) || doc.tag(node).is_some_and(Tag::is_void) {
        return;
    }
    let blockish = doc.is_editing_host(node) || doc.has_linebreaking_style(node);
    if !blockish {
        return;
    }
    if !doc.children(node).iter().any(|&c| doc.is_rendered(c)) {
        let br = doc.create_element(Tag::Br);
        doc.append(node, br);
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
