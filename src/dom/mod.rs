//! Arena-backed document tree
//!
//! Nodes live in a `Document` arena and are addressed by `NodeId`. Detached
//! nodes stay in the arena, so ids held by callers (boundaries, undo ranges)
//! remain valid across structural mutation and snapshot restore.

use crate::error::{EditError, Result};

/// Handle to a node in a `Document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Closed set of element tags understood by the editing core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    Div,
    H1,
    H2,
    H3,
    Blockquote,
    Pre,
    Br,
    B,
    I,
    U,
    Span,
    A,
    Ul,
    Ol,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::Div => "div",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Blockquote => "blockquote",
            Self::Pre => "pre",
            Self::Br => "br",
            Self::B => "b",
            Self::I => "i",
            Self::U => "u",
            Self::Span => "span",
            Self::A => "a",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
        }
    }

    /// Void elements cannot have children
    pub fn is_void(self) -> bool {
        matches!(self, Self::Br)
    }

    /// Whether the element introduces a line break in rendering.
    /// These are opaque to whitespace collapsing; inline tags are transparent.
    pub fn is_linebreaking(self) -> bool {
        matches!(
            self,
            Self::P
                | Self::Div
                | Self::H1
                | Self::H2
                | Self::H3
                | Self::Blockquote
                | Self::Pre
                | Self::Br
                | Self::Ul
                | Self::Ol
                | Self::Li
        )
    }

    pub fn is_list_container(self) -> bool {
        matches!(self, Self::Ul | Self::Ol)
    }

    pub fn is_list_item(self) -> bool {
        matches!(self, Self::Li)
    }
}

/// Characters that occupy no visual space
pub fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element {
        tag: Tag,
        editable_host: bool,
        classes: Vec<String>,
        style: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The document tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    pub fn create_element(&mut self, tag: Tag) -> NodeId {
        self.push(NodeKind::Element {
            tag,
            editable_host: false,
            classes: Vec::new(),
            style: Vec::new(),
        })
    }

    /// Create an element that acts as an editing host root
    pub fn create_editing_host(&mut self, tag: Tag) -> NodeId {
        self.push(NodeKind::Element {
            tag,
            editable_host: true,
            classes: Vec::new(),
            style: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.node(id).parent?;
        self.node(parent).children.iter().position(|&c| c == id)
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent?;
        let idx = self.index_in_parent(id)?;
        self.node(parent).children.get(idx + 1).copied()
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let idx = self.index_in_parent(id)?;
        if idx == 0 {
            return None;
        }
        let parent = self.node(id).parent?;
        self.node(parent).children.get(idx - 1).copied()
    }

    /// Detach a node from its parent. The node stays in the arena.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|&c| c != id);
        }
        self.node_mut(id).parent = None;
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Insert `child` at `index` within `parent`'s children
    pub fn insert_at(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<()> {
        self.detach(child);
        let len = self.node(parent).children.len();
        if index > len {
            return Err(EditError::mutation(format!(
                "insert index {} out of range (len {})",
                index, len
            )));
        }
        self.node_mut(parent).children.insert(index, child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Ancestor chain from the node itself up to the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut cur = id;
        while let Some(parent) = self.node(cur).parent {
            chain.push(parent);
            cur = parent;
        }
        chain
    }

    pub fn is_ancestor_of(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = id;
        while let Some(parent) = self.node(cur).parent {
            if parent == ancestor {
                return true;
            }
            cur = parent;
        }
        false
    }

    // ------------------------------------------------------------------
    // Node kind accessors
    // ------------------------------------------------------------------

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Text(_))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Element { .. })
    }

    pub fn is_editing_host(&self, id: NodeId) -> bool {
        matches!(
            self.node(id).kind,
            NodeKind::Element {
                editable_host: true,
                ..
            }
        )
    }

    pub fn tag(&self, id: NodeId) -> Option<Tag> {
        match self.node(id).kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text(s) => Some(s),
            NodeKind::Element { .. } => None,
        }
    }

    /// Char length of a text node, 0 for elements
    pub fn text_len(&self, id: NodeId) -> usize {
        self.text(id).map_or(0, |s| s.chars().count())
    }

    pub fn char_at(&self, id: NodeId, char_idx: usize) -> Option<char> {
        self.text(id)?.chars().nth(char_idx)
    }

    /// Remove the char range `[from, to)` from a text node
    pub fn splice_text(&mut self, id: NodeId, from: usize, to: usize) -> Result<()> {
        let text = self
            .text(id)
            .ok_or_else(|| EditError::mutation("splice_text on a non-text node"))?;
        let start = byte_index(text, from)
            .ok_or_else(|| EditError::boundary(format!("char offset {} out of range", from)))?;
        let end = byte_index(text, to)
            .ok_or_else(|| EditError::boundary(format!("char offset {} out of range", to)))?;
        if start > end {
            return Err(EditError::boundary("splice range reversed"));
        }
        if let NodeKind::Text(s) = &mut self.node_mut(id).kind {
            s.replace_range(start..end, "");
        }
        Ok(())
    }

    /// Insert a string at a char offset within a text node
    pub fn insert_in_text(&mut self, id: NodeId, at: usize, insert: &str) -> Result<()> {
        let text = self
            .text(id)
            .ok_or_else(|| EditError::mutation("insert_in_text on a non-text node"))?;
        let byte = byte_index(text, at)
            .ok_or_else(|| EditError::boundary(format!("char offset {} out of range", at)))?;
        if let NodeKind::Text(s) = &mut self.node_mut(id).kind {
            s.insert_str(byte, insert);
        }
        Ok(())
    }

    /// Concatenated text of the node's subtree, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        match &self.node(id).kind {
            NodeKind::Text(s) => s.clone(),
            NodeKind::Element { .. } => {
                let mut out = String::new();
                for &child in self.children(id) {
                    out.push_str(&self.text_content(child));
                }
                out
            }
        }
    }

    // ------------------------------------------------------------------
    // Classes and styles
    // ------------------------------------------------------------------

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        match &self.node(id).kind {
            NodeKind::Element { classes, .. } => classes.iter().any(|c| c == class),
            NodeKind::Text(_) => false,
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        if let NodeKind::Element { classes, .. } = &mut self.node_mut(id).kind {
            classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let NodeKind::Element { classes, .. } = &mut self.node_mut(id).kind {
            classes.retain(|c| c != class);
        }
    }

    pub fn set_style(&mut self, id: NodeId, prop: &str, value: &str) {
        if let NodeKind::Element { style, .. } = &mut self.node_mut(id).kind {
            if let Some(entry) = style.iter_mut().find(|(p, _)| p == prop) {
                entry.1 = value.to_string();
            } else {
                style.push((prop.to_string(), value.to_string()));
            }
        }
    }

    fn explicit_style(&self, id: NodeId, prop: &str) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { style, .. } => style
                .iter()
                .find(|(p, _)| p == prop)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Nearest explicit style value on the node or its ancestors.
    /// PRE elements imply `white-space: pre` without an explicit entry.
    pub fn computed_style(&self, id: NodeId, prop: &str) -> Option<&str> {
        for node in self.ancestors(id) {
            if let Some(value) = self.explicit_style(node, prop) {
                return Some(value);
            }
            if prop == "white-space" && self.tag(node) == Some(Tag::Pre) {
                return Some("pre");
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Predicates and host lookup
    // ------------------------------------------------------------------

    /// Nearest editing host, including the node itself
    pub fn editing_host_of(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .into_iter()
            .find(|&n| self.is_editing_host(n))
    }

    pub fn has_linebreaking_style(&self, id: NodeId) -> bool {
        self.tag(id).is_some_and(Tag::is_linebreaking)
    }

    /// Whether the node produces visual content.
    /// Hosts always count as rendered so pruning never climbs past them.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        match &self.node(id).kind {
            NodeKind::Text(s) => s.chars().any(|c| !is_zero_width(c)),
            NodeKind::Element {
                tag, editable_host, ..
            } => {
                if *editable_host || tag.is_void() {
                    return true;
                }
                self.children(id).iter().any(|&c| self.is_rendered(c))
            }
        }
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Nearest ancestor (inclusive) for which the predicate fails
    pub fn up_while(&self, id: NodeId, pred: impl Fn(&Document, NodeId) -> bool) -> NodeId {
        let mut cur = id;
        while pred(self, cur) {
            match self.parent(cur) {
                Some(parent) => cur = parent,
                None => break,
            }
        }
        cur
    }

    /// Walk backward in document order from `start` (never into its own
    /// subtree), returning the first node matching the predicate.
    pub fn backward_preorder_backtrace_until(
        &self,
        start: NodeId,
        pred: impl Fn(&Document, NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut node = start;
        loop {
            while self.prev_sibling(node).is_none() {
                node = self.parent(node)?;
                if pred(self, node) {
                    return Some(node);
                }
            }
            node = self.prev_sibling(node)?;
            if pred(self, node) {
                return Some(node);
            }
            while let Some(&last) = self.children(node).last() {
                node = last;
                if pred(self, node) {
                    return Some(node);
                }
            }
        }
    }

    /// Forward counterpart of `backward_preorder_backtrace_until`
    pub fn forward_preorder_backtrace_until(
        &self,
        start: NodeId,
        pred: impl Fn(&Document, NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut node = start;
        loop {
            while self.next_sibling(node).is_none() {
                node = self.parent(node)?;
                if pred(self, node) {
                    return Some(node);
                }
            }
            node = self.next_sibling(node)?;
            if pred(self, node) {
                return Some(node);
            }
            while let Some(&first) = self.children(node).first() {
                node = first;
                if pred(self, node) {
                    return Some(node);
                }
            }
        }
    }
}

fn byte_index(s: &str, char_idx: usize) -> Option<usize> {
    s.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}
