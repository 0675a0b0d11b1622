//! Boundary algebra: addressable positions in the document tree
//!
//! A boundary is a container node plus an offset — a char offset inside a
//! text node, or a child index inside an element. Boundaries are ordered in
//! document order and are the unit of selection geometry.

use crate::dom::{self, Document, NodeId};

/// An exact position in the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub node: NodeId,
    pub offset: usize,
}

impl Boundary {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Whether the boundary lies inside a text node
pub fn is_text_boundary(doc: &Document, b: Boundary) -> bool {
    doc.is_text(b.node)
}

/// Boundary at the very start of a node's content
pub fn from_start_of(node: NodeId) -> Boundary {
    Boundary::new(node, 0)
}

/// Boundary at the very end of a node's content
pub fn from_end_of(doc: &Document, node: NodeId) -> Boundary {
    if doc.is_text(node) {
        Boundary::new(node, doc.text_len(node))
    } else {
        Boundary::new(node, doc.children(node).len())
    }
}

/// Boundary in the parent, immediately before the node
pub fn before(doc: &Document, node: NodeId) -> Option<Boundary> {
    let parent = doc.parent(node)?;
    let idx = doc.index_in_parent(node)?;
    Some(Boundary::new(parent, idx))
}

/// Boundary in the parent, immediately after the node
pub fn after(doc: &Document, node: NodeId) -> Option<Boundary> {
    let parent = doc.parent(node)?;
    let idx = doc.index_in_parent(node)?;
    Some(Boundary::new(parent, idx + 1))
}

fn position_vec(doc: &Document, b: Boundary) -> Vec<usize> {
    let mut path = vec![b.offset];
    let mut node = b.node;
    while doc.parent(node).is_some() {
        path.push(doc.index_in_parent(node).unwrap_or(0));
        node = doc.parent(node).unwrap_or(node);
    }
    path.reverse();
    path
}

/// Compare two boundaries in document order
pub fn cmp(doc: &Document, a: Boundary, b: Boundary) -> std::cmp::Ordering {
    position_vec(doc, a).cmp(&position_vec(doc, b))
}

/// Lowest common ancestor of the two containers
pub fn common_container(doc: &Document, a: Boundary, b: Boundary) -> Option<NodeId> {
    let ancestors_b = doc.ancestors(b.node);
    doc.ancestors(a.node)
        .into_iter()
        .find(|n| ancestors_b.contains(n))
}

/// Descend element boundaries into adjacent text.
/// Prefers the end of the preceding text child.
pub fn normalize(doc: &Document, b: Boundary) -> Boundary {
    if doc.is_text(b.node) {
        return b;
    }
    let children = doc.children(b.node);
    if b.offset > 0 {
        if let Some(&prev) = children.get(b.offset - 1) {
            if doc.is_text(prev) {
                return Boundary::new(prev, doc.text_len(prev));
            }
        }
    }
    if let Some(&next) = children.get(b.offset) {
        if doc.is_text(next) {
            return Boundary::new(next, 0);
        }
    }
    b
}

/// Nearest element at or above the boundary's container
pub fn context_element(doc: &Document, b: Boundary) -> NodeId {
    doc.up_while(b.node, |d, n| d.is_text(n))
}

/// Nearest block-level ancestor (or the editing host) of a node
pub fn closest_block(doc: &Document, node: NodeId) -> NodeId {
    let mut cur = if doc.is_text(node) {
        doc.parent(node).unwrap_or(node)
    } else {
        node
    };
    loop {
        if doc.is_editing_host(cur) {
            return cur;
        }
        if doc
            .tag(cur)
            .is_some_and(|t| t.is_linebreaking() && !t.is_void())
        {
            return cur;
        }
        match doc.parent(cur) {
            Some(parent) => cur = parent,
            None => return cur,
        }
    }
}

fn last_leaf(doc: &Document, node: NodeId) -> NodeId {
    let mut cur = node;
    while let Some(&last) = doc.children(cur).last() {
        cur = last;
    }
    cur
}

fn first_leaf(doc: &Document, node: NodeId) -> NodeId {
    let mut cur = node;
    while let Some(&first) = doc.children(cur).first() {
        cur = first;
    }
    cur
}

/// The last leaf before the boundary in document order, stopping at the
/// editing host.
fn leaf_before(doc: &Document, b: Boundary) -> Option<NodeId> {
    if !doc.is_text(b.node) && b.offset > 0 {
        let child = doc.children(b.node).get(b.offset - 1)?;
        return Some(last_leaf(doc, *child));
    }
    let mut node = b.node;
    loop {
        if doc.is_editing_host(node) {
            return None;
        }
        if let Some(prev) = doc.prev_sibling(node) {
            return Some(last_leaf(doc, prev));
        }
        node = doc.parent(node)?;
    }
}

/// The first leaf after the boundary in document order, stopping at the
/// editing host.
fn leaf_after(doc: &Document, b: Boundary) -> Option<NodeId> {
    if !doc.is_text(b.node) {
        if let Some(&child) = doc.children(b.node).get(b.offset) {
            return Some(first_leaf(doc, child));
        }
    }
    let mut node = b.node;
    loop {
        if doc.is_editing_host(node) {
            return None;
        }
        if let Some(next) = doc.next_sibling(node) {
            return Some(first_leaf(doc, next));
        }
        node = doc.parent(node)?;
    }
}

/// Move one navigable unit backward: one char within text, otherwise onto
/// the previous leaf. Crossing into another block lands at the block's end
/// without consuming a character (so deletion merges the blocks). At the
/// start of the editing host the input boundary is returned unchanged.
pub fn prev(doc: &Document, b: Boundary) -> Boundary {
    let nb = normalize(doc, b);
    if doc.is_text(nb.node) && nb.offset > 0 {
        return Boundary::new(nb.node, nb.offset - 1);
    }
    let Some(leaf) = leaf_before(doc, nb) else {
        return b;
    };
    if doc.is_text(leaf) {
        let len = doc.text_len(leaf);
        let same_block = closest_block(doc, leaf) == closest_block(doc, nb.node);
        if same_block && len > 0 {
            Boundary::new(leaf, len - 1)
        } else {
            Boundary::new(leaf, len)
        }
    } else {
        before(doc, leaf).unwrap_or(b)
    }
}

/// Forward counterpart of `prev`
pub fn next(doc: &Document, b: Boundary) -> Boundary {
    let nb = normalize(doc, b);
    if doc.is_text(nb.node) && nb.offset < doc.text_len(nb.node) {
        return Boundary::new(nb.node, nb.offset + 1);
    }
    let Some(leaf) = leaf_after(doc, nb) else {
        return b;
    };
    if doc.is_text(leaf) {
        let len = doc.text_len(leaf);
        let same_block = closest_block(doc, leaf) == closest_block(doc, nb.node);
        if same_block && len > 0 {
            Boundary::new(leaf, 1)
        } else {
            Boundary::new(leaf, 0)
        }
    } else {
        after(doc, leaf).unwrap_or(b)
    }
}

/// Extend the boundary forward across adjacent zero-width characters so
/// deleting a visible character also removes invisible artifacts.
pub fn envelope_invisible_characters(doc: &Document, b: Boundary) -> Boundary {
    let mut nb = normalize(doc, b);
    if !doc.is_text(nb.node) {
        return nb;
    }
    while doc
        .char_at(nb.node, nb.offset)
        .is_some_and(dom::is_zero_width)
    {
        nb.offset += 1;
    }
    nb
}
