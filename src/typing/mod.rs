//! Keystroke handling pipeline
//!
//! `handle_typing` resolves a keyboard event against a keymap and runs
//! the matched action: consuming the native event, clearing pending
//! overrides, deleting selected content, running the mutation inside an
//! undo capture, and re-propping the affected subtree.

use crate::action::{self, ActionDescriptor, BreakKind, Direction, HistoryOp, Mutate};
use crate::boundary::{self, Boundary};
use crate::dom::{Document, Tag};
use crate::editing;
use crate::error::Result;
use crate::event::{Editable, Selection, TypingEvent};
use crate::history::{path_from_boundary, CaptureMeta, ChangeRecord};
use crate::key::Key;
use crate::keymap::Keymap;
use crate::lists;
use crate::metaview;
use crate::overrides::{self, OverrideSet};
use crate::whitespace;

fn preserves_whitespace(style: Option<&str>) -> bool {
    matches!(style, Some("pre" | "pre-wrap" | "pre-line"))
}

/// Strip unrendered ancestors of each boundary, keeping every boundary
/// position valid across the removals.
fn remove_unrendered_containers(doc: &mut Document, mut bs: [Boundary; 2]) -> [Boundary; 2] {
    for i in 0..bs.len() {
        let mut cur = bs[i].node;
        while !doc.is_rendered(cur) {
            let Some(parent) = doc.parent(cur) else {
                break;
            };
            bs = editing::remove_node(doc, cur, bs);
            cur = parent;
        }
    }
    bs
}

fn prop_common_container(doc: &mut Document, bs: [Boundary; 2]) {
    if let Some(container) = boundary::common_container(doc, bs[0], bs[1]) {
        editing::prop(doc, container);
    }
}

/// Delete content in the given direction, or the selected range. The
/// styles of the removed content are kept as pending formatting so the
/// next insertion can restore them.
fn remove_op(
    doc: &mut Document,
    selection: &mut Selection,
    direction: Direction,
) -> Result<[Boundary; 2]> {
    let mut start = selection.start;
    let mut end = selection.end;
    if start == end {
        match direction {
            Direction::Forward => end = boundary::next(doc, end),
            Direction::Backward => start = boundary::prev(doc, start),
        }
    }
    let end = boundary::envelope_invisible_characters(doc, end);
    let (s, e) = editing::remove(doc, start, end)?;
    selection.formatting = OverrideSet::join(&[
        &selection.formatting,
        &overrides::harvest(doc, s.node),
    ]);
    let bs = remove_unrendered_containers(doc, [s, e]);
    prop_common_container(doc, bs);
    Ok(bs)
}

/// Toggle a style over the selection. At a collapsed caret no markup
/// changes; the toggle is queued as a pending override instead.
fn format_op(
    doc: &mut Document,
    selection: &mut Selection,
    style: overrides::Style,
) -> Result<[Boundary; 2]> {
    if !selection.is_collapsed() {
        let (s, e) = editing::toggle(doc, selection.start, selection.end, style)?;
        return Ok([s, e]);
    }
    let ambient = overrides::harvest(doc, selection.start.node);
    let joined = OverrideSet::join(&[&selection.formatting, &ambient, &selection.overrides]);
    selection.overrides = joined.toggle(style, true);
    Ok(selection.boundaries())
}

fn breakline_op(
    doc: &mut Document,
    editable: &Editable,
    selection: &mut Selection,
    kind: BreakKind,
) -> Result<[Boundary; 2]> {
    let breaker = match kind {
        BreakKind::Line => Tag::Br,
        BreakKind::Block => {
            selection.formatting = OverrideSet::join(&[
                &selection.formatting,
                &overrides::harvest(doc, selection.start.node),
            ]);
            editable.settings.default_block
        }
    };
    let (s, e) = editing::breakline(doc, selection.end, breaker)?;
    Ok([s, e])
}

fn insert_text_op(
    doc: &mut Document,
    editable: &mut Editable,
    selection: &mut Selection,
    key: Key,
) -> Result<[Boundary; 2]> {
    let ch = match key {
        Key::Char(c) => c,
        Key::Tab => '\t',
        _ => return Ok(selection.boundaries()),
    };
    let boundary = selection.start;
    let text = match ch {
        '\t' => {
            if lists::is_at_start_of_list_item(doc, boundary) {
                let (s, e) = lists::indent(doc, selection.start, selection.end)?;
                return Ok([s, e]);
            }
            String::from(whitespace::NBSP).repeat(8)
        }
        ' ' => {
            let context = doc.up_while(boundary.node, |d, n| d.is_text(n));
            if preserves_whitespace(doc.computed_style(context, "white-space")) {
                String::from(' ')
            } else {
                String::from(whitespace::appropriate_whitespace(doc, boundary))
            }
        }
        c => String::from(c),
    };
    let pending = OverrideSet::join(&[&selection.formatting, &selection.overrides]);
    let boundary = overrides::consume(doc, boundary, &pending)?;
    selection.clear_overrides();

    let change = ChangeRecord::Insert {
        path: path_from_boundary(doc, editable.elem, boundary),
        content: text.clone(),
    };
    editable
        .undo
        .begin(doc, CaptureMeta::no_observe(), [boundary, boundary]);
    let after = editing::insert_text_at_boundary(doc, &text, boundary)?;
    editable.undo.record(change);
    editable.undo.end(doc, [after, after]);
    Ok([after, after])
}

fn toggle_undo_op(
    doc: &mut Document,
    editable: &mut Editable,
    selection: &Selection,
    op: HistoryOp,
) -> [Boundary; 2] {
    let restored = match op {
        HistoryOp::Undo => editable.undo.undo(doc),
        HistoryOp::Redo => editable.undo.redo(doc),
    };
    restored.unwrap_or_else(|| selection.boundaries())
}

fn select_editable_op(doc: &Document, selection: &Selection) -> [Boundary; 2] {
    let host = boundary::common_container(doc, selection.start, selection.end)
        .map(|c| doc.editing_host_of(c));
    match host.flatten() {
        Some(host) => [
            Boundary::new(host, 0),
            boundary::from_end_of(doc, host),
        ],
        None => selection.boundaries(),
    }
}

fn run_mutation(
    doc: &mut Document,
    editable: &mut Editable,
    event: &mut TypingEvent,
    mutate: Mutate,
) -> Result<[Boundary; 2]> {
    match mutate {
        Mutate::Remove(direction) => remove_op(doc, &mut event.selection, direction),
        Mutate::Breakline(kind) => breakline_op(doc, editable, &mut event.selection, kind),
        Mutate::Format(style) => format_op(doc, &mut event.selection, style),
        Mutate::InsertText => insert_text_op(doc, editable, &mut event.selection, event.chord.key),
        Mutate::History(op) => Ok(toggle_undo_op(doc, editable, &event.selection, op)),
        Mutate::SelectEditable => Ok(select_editable_op(doc, &event.selection)),
        Mutate::Metaview(preset) => {
            metaview::toggle(doc, editable.elem, preset);
            Ok(event.selection.boundaries())
        }
    }
}

fn run_undoable(
    doc: &mut Document,
    editable: &mut Editable,
    event: &mut TypingEvent,
    descriptor: ActionDescriptor,
    mutate: Mutate,
) -> Result<()> {
    let old_range = event.selection.boundaries();
    editable.undo.begin(
        doc,
        CaptureMeta {
            label: descriptor.undo,
            observe: true,
        },
        old_range,
    );
    let result = (|| {
        if descriptor.remove_content && !event.selection.is_collapsed() {
            let bs = remove_op(doc, &mut event.selection, Direction::Backward)?;
            event.selection.set_boundaries(bs);
        }
        let bs = run_mutation(doc, editable, event, mutate)?;
        event.selection.set_boundaries(bs);
        prop_common_container(doc, bs);
        Ok(())
    })();
    editable.undo.end(doc, event.selection.boundaries());
    result
}

/// Run one keyboard event through the keymap and the matched action,
/// updating the selection carried on the event.
pub fn handle_typing(
    doc: &mut Document,
    editable: &mut Editable,
    keymap: &Keymap,
    mut event: TypingEvent,
) -> Result<TypingEvent> {
    let Some(name) = keymap.resolve(event.kind, event.chord) else {
        return Ok(event);
    };
    let descriptor = action::descriptor(name);
    tracing::debug!(action = name.as_str(), chord = %event.chord, "handling keystroke");

    if descriptor.prevent_default {
        event.default_prevented = true;
    }
    if descriptor.clear_overrides {
        event.selection.clear_overrides();
    }
    if let Some(mutate) = descriptor.mutate {
        if descriptor.undo.is_some() {
            run_undoable(doc, editable, &mut event, descriptor, mutate)?;
        } else {
            let bs = run_mutation(doc, editable, &mut event, mutate)?;
            event.selection.set_boundaries(bs);
        }
    }
    Ok(event)
}
