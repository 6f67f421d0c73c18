//! Node identifiers and node payloads.

use slotmap::new_key_type;

new_key_type! {
    /// A stable handle to a node in a [`Document`](super::Document).
    ///
    /// `NodeId`s stay valid while the tree around them is rearranged. They
    /// become invalid once the node (or one of its ancestors) is removed.
    pub struct NodeId;
}

/// The payload of a document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. There is exactly one per document.
    Root,
    /// An at-rule such as `@media (--s) { ... }` or `@type 10px;`.
    AtRule {
        /// Name without the leading `@`.
        name: String,
        /// Everything between the name and the block or `;`, trimmed.
        params: String,
        /// Whether the rule owns a `{ ... }` block.
        has_block: bool,
    },
    /// A qualified rule such as `h1 { ... }`.
    Rule {
        /// Raw selector text, trimmed.
        selector: String,
    },
    /// A `property: value` declaration.
    Declaration {
        property: String,
        value: String,
        important: bool,
    },
    /// A `/* ... */` comment.
    Comment {
        /// Comment body without the delimiters.
        text: String,
    },
}

impl NodeKind {
    /// Short type name, as used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::AtRule { .. } => "atrule",
            Self::Rule { .. } => "rule",
            Self::Declaration { .. } => "decl",
            Self::Comment { .. } => "comment",
        }
    }

    /// Whether nodes of this kind may own children.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Root | Self::AtRule { .. } | Self::Rule { .. })
    }

    /// Returns `true` for an at-rule with the given name.
    pub fn is_at_rule_named(&self, wanted: &str) -> bool {
        matches!(self, Self::AtRule { name, .. } if name == wanted)
    }

    /// Returns `true` for a declaration of the given property.
    pub fn is_declaration_of(&self, wanted: &str) -> bool {
        matches!(self, Self::Declaration { property, .. } if property == wanted)
    }
}
