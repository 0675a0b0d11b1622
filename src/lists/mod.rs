//! List item indentation
//!
//! Tab at the very start of a list item nests the item one level deeper
//! under its preceding sibling, mirroring outline editors.

use crate::boundary::Boundary;
use crate::dom::{Document, NodeId, Tag};
use crate::error::Result;

/// True when the boundary sits at the visual start of an `<li>`: offset
/// zero with only first children between the boundary and the item.
pub fn is_at_start_of_list_item(doc: &Document, b: Boundary) -> bool {
    if b.offset != 0 {
        return false;
    }
    let mut cur = b.node;
    loop {
        if doc.tag(cur) == Some(Tag::Li) {
            return true;
        }
        let Some(parent) = doc.parent(cur) else {
            return false;
        };
        if doc.index_in_parent(cur) != Some(0) {
            return false;
        }
        cur = parent;
    }
}

fn containing_list_item(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.ancestors(node)
        .into_iter()
        .find(|&n| doc.tag(n) == Some(Tag::Li))
}

/// Nest the list item holding `start` under its previous sibling item.
/// Without a previous sibling there is nothing to nest under and the
/// boundaries come back unchanged.
pub fn indent(
    doc: &mut Document,
    start: Boundary,
    end: Boundary,
) -> Result<(Boundary, Boundary)> {
    let Some(item) = containing_list_item(doc, start.node) else {
        return Ok((start, end));
    };
    let Some(prev) = doc.prev_sibling(item) else {
        return Ok((start, end));
    };
    if doc.tag(prev) != Some(Tag::Li) {
        return Ok((start, end));
    }
    let list_tag = doc
        .parent(item)
        .and_then(|p| doc.tag(p))
        .filter(|t| t.is_list_container())
        .unwrap_or(Tag::Ul);

    // reuse a trailing sublist on the previous item when there is one
    let sublist = match doc.children(prev).last().copied() {
        Some(last) if doc.tag(last) == Some(list_tag) => last,
        _ => {
            let created = doc.create_element(list_tag);
            doc.append(prev, created);
            created
        }
    };
    doc.detach(item);
    doc.append(sublist, item);
    Ok((start, end))
}
