//! Mutable CSS document tree.
//!
//! Provides the tree the shorthand expander operates on:
//! - Stable node identifiers via arena-based storage
//! - Parent-child relationships with subtree removal
//! - Node constructors for at-rules, rules, declarations and comments
//! - Source positions for diagnostics
//!
//! The operations mirror what a PostCSS-style host offers a plugin:
//! [`Document::append`], [`Document::insert_before`],
//! [`Document::replace_with`] and [`Document::remove`].
//!
//! # Example
//!
//! ```
//! use type_shorthand_core::document::{Document, NodeKind};
//!
//! let mut doc = Document::new();
//! let media = doc.create_at_rule_block("media", "(--s)");
//! let decl = doc.create_declaration("font-size", "15px");
//! doc.append(media, decl).unwrap();
//! doc.append(doc.root(), media).unwrap();
//!
//! assert_eq!(doc.children(doc.root()).unwrap(), &[media]);
//! assert!(matches!(doc.kind(decl).unwrap(), NodeKind::Declaration { .. }));
//! ```

mod node;
mod source;

use std::fmt;
use std::path::{Path, PathBuf};

use slotmap::SlotMap;

pub use node::{NodeId, NodeKind};
pub use source::{Location, Position, SourceSpan};

use crate::logging::targets;

/// Errors that can occur during tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The node ID is invalid or the node has been removed.
    InvalidNodeId,
    /// Attempted to insert a node into itself or one of its descendants.
    CircularParentage,
    /// The parent cannot hold children (declarations and comments).
    NotAContainer,
    /// The anchor node is not a child of the given parent.
    NotAChild,
    /// The operation needs a node that is attached to a parent.
    Detached,
    /// The root node cannot be moved, replaced or removed.
    RootNode,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNodeId => write!(f, "Invalid or removed node ID"),
            Self::CircularParentage => {
                write!(f, "Cannot insert a node into itself or its descendants")
            }
            Self::NotAContainer => write!(f, "Node cannot contain children"),
            Self::NotAChild => write!(f, "Anchor node is not a child of the parent"),
            Self::Detached => write!(f, "Node is not attached to a parent"),
            Self::RootNode => write!(f, "The root node cannot be moved or removed"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Result type for tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;

/// Internal data stored in the arena for each node.
#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    source: Option<SourceSpan>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            source: None,
        }
    }
}

/// An ordered, mutable tree of CSS nodes.
///
/// Uses arena-based storage via SlotMap, so handles stay valid while
/// siblings are inserted or removed. Nodes created through the `create_*`
/// constructors start detached and join the tree once inserted.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
    file: Option<PathBuf>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::new(NodeKind::Root));
        Self {
            nodes,
            root,
            file: None,
        }
    }

    /// Create an empty document that remembers the file it came from.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let mut doc = Self::new();
        doc.file = Some(path.into());
        doc
    }

    /// The file this document was read from, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root and detached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes
            .get(self.root)
            .is_none_or(|root| root.children.is_empty())
    }

    /// Check if a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the payload of a node.
    pub fn kind(&self, id: NodeId) -> TreeResult<&NodeKind> {
        self.data(id).map(|d| &d.kind)
    }

    /// Get the payload of a node for in-place edits.
    pub fn kind_mut(&mut self, id: NodeId) -> TreeResult<&mut NodeKind> {
        self.nodes
            .get_mut(id)
            .map(|d| &mut d.kind)
            .ok_or(TreeError::InvalidNodeId)
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        self.data(id).map(|d| d.parent)
    }

    /// Get the children of a node.
    pub fn children(&self, id: NodeId) -> TreeResult<&[NodeId]> {
        self.data(id).map(|d| d.children.as_slice())
    }

    /// Get the source span of a node.
    pub fn source(&self, id: NodeId) -> TreeResult<Option<SourceSpan>> {
        self.data(id).map(|d| d.source)
    }

    /// Set or clear the source span of a node.
    pub fn set_source(&mut self, id: NodeId, source: Option<SourceSpan>) -> TreeResult<()> {
        self.nodes
            .get_mut(id)
            .map(|d| d.source = source)
            .ok_or(TreeError::InvalidNodeId)
    }

    /// Resolve a node's start position into a diagnostic location.
    ///
    /// Returns `None` when the node is unknown or carries no source span.
    pub fn location(&self, id: NodeId) -> Option<Location> {
        let span = self.nodes.get(id)?.source?;
        Some(Location {
            file: self.file.clone(),
            line: span.start.line,
            column: span.start.column,
        })
    }

    /// Create a detached at-rule without a block (`@name params;`).
    pub fn create_at_rule(&mut self, name: impl Into<String>, params: impl Into<String>) -> NodeId {
        self.create(NodeKind::AtRule {
            name: name.into(),
            params: params.into(),
            has_block: false,
        })
    }

    /// Create a detached at-rule with an empty block (`@name params {}`).
    pub fn create_at_rule_block(
        &mut self,
        name: impl Into<String>,
        params: impl Into<String>,
    ) -> NodeId {
        self.create(NodeKind::AtRule {
            name: name.into(),
            params: params.into(),
            has_block: true,
        })
    }

    /// Create a detached qualified rule.
    pub fn create_rule(&mut self, selector: impl Into<String>) -> NodeId {
        self.create(NodeKind::Rule {
            selector: selector.into(),
        })
    }

    /// Create a detached declaration.
    pub fn create_declaration(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> NodeId {
        self.create(NodeKind::Declaration {
            property: property.into(),
            value: value.into(),
            important: false,
        })
    }

    /// Create a detached comment.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.create(NodeKind::Comment { text: text.into() })
    }

    fn create(&mut self, kind: NodeKind) -> NodeId {
        let type_name = kind.type_name();
        let id = self.nodes.insert(NodeData::new(kind));
        tracing::trace!(target: targets::DOCUMENT, ?id, type_name, "created node");
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is already attached elsewhere is moved.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.check_insertable(parent, child)?;
        self.detach(child);
        let index = self.data(parent)?.children.len();
        self.attach(parent, index, child);
        Ok(())
    }

    /// Insert `node` into `parent` directly before `anchor`.
    ///
    /// A node that is already attached elsewhere is moved.
    pub fn insert_before(&mut self, parent: NodeId, anchor: NodeId, node: NodeId) -> TreeResult<()> {
        self.check_insertable(parent, node)?;
        self.index_of(parent, anchor)?;
        if node == anchor {
            return Ok(());
        }
        self.detach(node);
        let index = self.index_of(parent, anchor)?;
        self.attach(parent, index, node);
        Ok(())
    }

    /// Put `node` where `anchor` is and remove `anchor` with its subtree.
    pub fn replace_with(&mut self, anchor: NodeId, node: NodeId) -> TreeResult<()> {
        let parent = self.parent(anchor)?.ok_or(TreeError::Detached)?;
        self.insert_before(parent, anchor, node)?;
        self.remove(anchor)
    }

    /// Remove a node and all its descendants from the document.
    pub fn remove(&mut self, id: NodeId) -> TreeResult<()> {
        if id == self.root {
            return Err(TreeError::RootNode);
        }
        let descendants = self.collect_descendants(id)?;
        tracing::trace!(target: targets::DOCUMENT, ?id, descendant_count = descendants.len(), "removing node");

        self.detach(id);
        for child in descendants {
            self.nodes.remove(child);
        }
        self.nodes.remove(id);
        Ok(())
    }

    /// Position of `child` within `parent`.
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> TreeResult<usize> {
        self.children(parent)?
            .iter()
            .position(|&c| c == child)
            .ok_or(TreeError::NotAChild)
    }

    /// All descendants of `id` in depth-first pre-order.
    ///
    /// The result is a snapshot: it does not follow later mutations.
    pub fn walk(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let mut result = Vec::new();
        self.walk_recursive(id, &mut result)?;
        Ok(result)
    }

    fn walk_recursive(&self, id: NodeId, result: &mut Vec<NodeId>) -> TreeResult<()> {
        for &child in &self.data(id)?.children {
            result.push(child);
            self.walk_recursive(child, result)?;
        }
        Ok(())
    }

    /// Collect all descendant IDs, children before parents.
    fn collect_descendants(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(&self, id: NodeId, result: &mut Vec<NodeId>) -> TreeResult<()> {
        for &child in &self.data(id)?.children {
            self.collect_descendants_recursive(child, result)?;
            result.push(child);
        }
        Ok(())
    }

    fn check_insertable(&self, parent: NodeId, node: NodeId) -> TreeResult<()> {
        if !self.data(parent)?.kind.is_container() {
            return Err(TreeError::NotAContainer);
        }
        if node == self.root {
            return Err(TreeError::RootNode);
        }
        self.data(node)?;
        if self.is_ancestor_of(node, parent) {
            return Err(TreeError::CircularParentage);
        }
        Ok(())
    }

    /// Check if `potential_ancestor` is `id` or one of its ancestors.
    fn is_ancestor_of(&self, potential_ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    fn detach(&mut self, id: NodeId) {
        let old_parent = self.nodes.get_mut(id).and_then(|d| d.parent.take());
        if let Some(parent_id) = old_parent
            && let Some(parent) = self.nodes.get_mut(parent_id)
        {
            parent.children.retain(|&child| child != id);
        }
    }

    fn attach(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children.insert(index, child);
            if let NodeKind::AtRule { has_block, .. } = &mut parent_data.kind {
                *has_block = true;
            }
        }
        if let Some(child_data) = self.nodes.get_mut(child) {
            child_data.parent = Some(parent);
        }
        tracing::trace!(target: targets::DOCUMENT, ?parent, ?child, index, "attached node");
    }

    fn data(&self, id: NodeId) -> TreeResult<&NodeData> {
        self.nodes.get(id).ok_or(TreeError::InvalidNodeId)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
