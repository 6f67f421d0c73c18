//! Serialize a document tree back into CSS text.
//!
//! The printer emits a canonical layout rather than reproducing the input's
//! whitespace: four spaces of indentation per block level, one statement per
//! line, and no `;` after the last statement of a block.

use crate::document::{Document, NodeId, NodeKind};

const INDENT: &str = "    ";

/// Serialize a document to CSS.
///
/// # Example
///
/// ```
/// use type_shorthand_core::{Document, to_css};
///
/// let mut doc = Document::new();
/// let media = doc.create_at_rule_block("media", "(--s)");
/// let decl = doc.create_declaration("font-size", "15px");
/// doc.append(media, decl).unwrap();
/// doc.append(doc.root(), media).unwrap();
///
/// assert_eq!(to_css(&doc), "@media (--s) {\n    font-size: 15px\n}");
/// ```
pub fn to_css(doc: &Document) -> String {
    let mut out = String::new();
    let children = doc.children(doc.root()).unwrap_or_default();

    for (i, &child) in children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_node(doc, child, 0, &mut out);
        if needs_semicolon(doc, child) {
            out.push(';');
        }
    }

    out
}

fn write_node(doc: &Document, id: NodeId, depth: usize, out: &mut String) {
    let Ok(kind) = doc.kind(id) else {
        return;
    };

    match kind {
        NodeKind::Root => {}
        NodeKind::AtRule {
            name,
            params,
            has_block,
        } => {
            out.push('@');
            out.push_str(name);
            if !params.is_empty() {
                out.push(' ');
                out.push_str(params);
            }
            if *has_block {
                out.push(' ');
                write_block(doc, id, depth, out);
            }
        }
        NodeKind::Rule { selector } => {
            out.push_str(selector);
            if !selector.is_empty() {
                out.push(' ');
            }
            write_block(doc, id, depth, out);
        }
        NodeKind::Declaration {
            property,
            value,
            important,
        } => {
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            if *important {
                out.push_str(" !important");
            }
        }
        NodeKind::Comment { text } => {
            out.push_str("/*");
            out.push_str(text);
            out.push_str("*/");
        }
    }
}

fn write_block(doc: &Document, id: NodeId, depth: usize, out: &mut String) {
    let children = doc.children(id).unwrap_or_default();
    if children.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    let last = children.len() - 1;
    for (i, &child) in children.iter().enumerate() {
        for _ in 0..=depth {
            out.push_str(INDENT);
        }
        write_node(doc, child, depth + 1, out);
        if i < last && needs_semicolon(doc, child) {
            out.push(';');
        }
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push('}');
}

/// Declarations and blockless at-rules are terminated by `;`.
fn needs_semicolon(doc: &Document, id: NodeId) -> bool {
    matches!(
        doc.kind(id),
        Ok(NodeKind::Declaration { .. }) | Ok(NodeKind::AtRule { has_block: false, .. })
    )
}
