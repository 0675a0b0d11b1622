//! Undo history
//!
//! Snapshot-based undo. Mutations run inside capture frames; only the
//! outermost frame commits a step, so nested captures cannot record the
//! same edit twice. Frames opened with `no_observe` contribute the
//! change records their caller hands in instead of being diffed.

use crate::boundary::Boundary;
use crate::dom::{Document, NodeId};

/// Kind of edit a step represents, used to group and name steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoLabel {
    Delete,
    Enter,
    Typing,
    Bold,
    Italic,
    Underline,
}

impl UndoLabel {
    pub fn name(self) -> &'static str {
        match self {
            UndoLabel::Delete => "delete",
            UndoLabel::Enter => "enter",
            UndoLabel::Typing => "typing",
            UndoLabel::Bold => "bold",
            UndoLabel::Italic => "italic",
            UndoLabel::Underline => "underline",
        }
    }
}

/// How a capture frame should behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureMeta {
    pub label: Option<UndoLabel>,
    pub observe: bool,
}

impl CaptureMeta {
    pub fn labeled(label: UndoLabel) -> Self {
        CaptureMeta {
            label: Some(label),
            observe: true,
        }
    }

    pub fn no_observe() -> Self {
        CaptureMeta {
            label: None,
            observe: false,
        }
    }
}

/// A recorded change inside a step. Paths are child-index chains from
/// the editing host down to a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    Insert { path: Vec<usize>, content: String },
}

#[derive(Debug, Clone)]
pub struct UndoStep {
    pub label: Option<UndoLabel>,
    pub old_range: [Boundary; 2],
    pub new_range: [Boundary; 2],
    before: Document,
    after: Document,
    pub changes: Vec<ChangeRecord>,
}

#[derive(Debug)]
struct Frame {
    meta: CaptureMeta,
    before: Document,
    old_range: [Boundary; 2],
    changes: Vec<ChangeRecord>,
}

/// Per-editable undo state.
#[derive(Debug, Default)]
pub struct UndoContext {
    steps: Vec<UndoStep>,
    cursor: usize,
    open: Vec<Frame>,
}

impl UndoContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a capture frame. Every `begin` must be paired with an `end`.
    pub fn begin(&mut self, doc: &Document, meta: CaptureMeta, old_range: [Boundary; 2]) {
        self.open.push(Frame {
            meta,
            before: doc.clone(),
            old_range,
            changes: Vec::new(),
        });
    }

    /// Attach an explicit change record to the innermost open frame.
    pub fn record(&mut self, change: ChangeRecord) {
        if let Some(frame) = self.open.last_mut() {
            frame.changes.push(change);
        }
    }

    /// Close the innermost frame. The outermost close commits a step
    /// and drops any redo tail; inner closes fold their records into
    /// the enclosing frame.
    pub fn end(&mut self, doc: &Document, new_range: [Boundary; 2]) {
        let Some(frame) = self.open.pop() else {
            return;
        };
        if let Some(outer) = self.open.last_mut() {
            outer.changes.extend(frame.changes);
            return;
        }
        if frame.before == *doc && frame.changes.is_empty() {
            return;
        }
        tracing::debug!(
            label = frame.meta.label.map(UndoLabel::name).unwrap_or("unlabeled"),
            changes = frame.changes.len(),
            "commit undo step"
        );
        self.steps.truncate(self.cursor);
        self.steps.push(UndoStep {
            label: frame.meta.label,
            old_range: frame.old_range,
            new_range,
            before: frame.before,
            after: doc.clone(),
            changes: frame.changes,
        });
        self.cursor = self.steps.len();
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.steps.len()
    }

    /// Restore the document state before the latest step, returning the
    /// selection that was live when the step began.
    pub fn undo(&mut self, doc: &mut Document) -> Option<[Boundary; 2]> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        let step = &self.steps[self.cursor];
        *doc = step.before.clone();
        Some(step.old_range)
    }

    /// Reapply the step most recently undone.
    pub fn redo(&mut self, doc: &mut Document) -> Option<[Boundary; 2]> {
        if !self.can_redo() {
            return None;
        }
        let step = &self.steps[self.cursor];
        self.cursor += 1;
        *doc = step.after.clone();
        Some(step.new_range)
    }
}

/// Child-index path from `host` down to a boundary, ending with the
/// boundary offset. Nodes outside the host yield an empty path.
pub fn path_from_boundary(doc: &Document, host: NodeId, b: Boundary) -> Vec<usize> {
    let mut path = vec![b.offset];
    let mut cur = b.node;
    while cur != host {
        let Some(parent) = doc.parent(cur) else {
            return Vec::new();
        };
        match doc.index_in_parent(cur) {
            Some(idx) => path.push(idx),
            None => return Vec::new(),
        }
        cur = parent;
    }
    path.reverse();
    path
}
