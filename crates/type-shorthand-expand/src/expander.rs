//! The shorthand expander.
//!
//! Walks a [`Document`] and replaces every `@type ...;` at-rule and every
//! `type: ...;` declaration with the declarations it stands for:
//!
//! ```text
//! @type --s 10px 15px 1px;      @media (--s) {
//!                          =>       font-size: 10px;
//!                                   line-height: 1.5;
//!                                   letter-spacing: 0.1em
//!                               }
//! ```
//!
//! Without a custom media query the declarations are inserted where the
//! shorthand was.

use type_shorthand_core::{Document, NodeId, NodeKind, TreeError};

use crate::options::ExpandOptions;
use crate::shorthand::{ParsedShorthand, TypographyValues};
use crate::targets;
use crate::{Error, Result};

/// Name of the at-rule and property that carry the shorthand.
pub const SHORTHAND_NAME: &str = "type";

/// Message of the error raised for a shorthand without a font size.
pub const MISSING_DECLARATIONS: &str = "Missing typography declarations for @type.";

/// Counters describing what one pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandReport {
    /// Shorthand occurrences that were expanded.
    pub shorthands: usize,
    /// Declarations generated in total.
    pub declarations: usize,
    /// Media blocks created for custom media queries.
    pub media_blocks: usize,
}

/// Expands typography shorthands with a fixed set of options.
///
/// # Example
///
/// ```
/// use type_shorthand_core::{parse_css, to_css};
/// use type_shorthand_expand::{ExpandOptions, ShorthandExpander};
///
/// let mut doc = parse_css("@type 10px 15px;").unwrap();
/// let expander = ShorthandExpander::new(ExpandOptions::new().with_root_size("16px"));
/// expander.expand(&mut doc).unwrap();
///
/// assert_eq!(to_css(&doc), "font-size: 0.625rem;\nline-height: 1.5;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShorthandExpander {
    options: ExpandOptions,
}

impl ShorthandExpander {
    /// Create an expander.
    pub fn new(options: ExpandOptions) -> Self {
        Self { options }
    }

    /// Expand every shorthand in `doc`.
    ///
    /// Invalid options fail before the document is touched. An invalid
    /// shorthand stops the pass; occurrences expanded before it stay expanded.
    #[tracing::instrument(skip_all, target = "type_shorthand_expand::expander", level = "debug")]
    pub fn expand(&self, doc: &mut Document) -> Result<ExpandReport> {
        self.options.validate()?;
        let root_size = self.options.root_size();
        let mut report = ExpandReport::default();

        for id in doc.walk(doc.root())? {
            // Skip nodes that went away with an expanded ancestor.
            if !doc.contains(id) {
                continue;
            }

            let raw = match doc.kind(id)? {
                NodeKind::AtRule { name, params, .. } if name == SHORTHAND_NAME => params.clone(),
                NodeKind::Declaration {
                    property, value, ..
                } if property == SHORTHAND_NAME => value.clone(),
                _ => continue,
            };

            expand_node(doc, id, &raw, root_size, &mut report)?;
        }

        tracing::debug!(
            target: targets::EXPANDER,
            shorthands = report.shorthands,
            declarations = report.declarations,
            media_blocks = report.media_blocks,
            "expanded document"
        );
        Ok(report)
    }
}

/// Expand every shorthand in `doc` with the given options.
pub fn expand(doc: &mut Document, options: &ExpandOptions) -> Result<ExpandReport> {
    ShorthandExpander::new(options.clone()).expand(doc)
}

fn expand_node(
    doc: &mut Document,
    anchor: NodeId,
    raw: &str,
    root_size: Option<&str>,
    report: &mut ExpandReport,
) -> Result<()> {
    let shorthand = ParsedShorthand::parse(raw);
    if shorthand.font_size.is_none() {
        return Err(Error::shorthand(MISSING_DECLARATIONS, doc.location(anchor)));
    }

    let values = TypographyValues::resolve(&shorthand, root_size);
    let source = doc.source(anchor)?;

    let mut declarations = Vec::with_capacity(3);
    for (property, value) in values.declarations() {
        let decl = doc.create_declaration(property, value);
        doc.set_source(decl, source)?;
        declarations.push(decl);
    }

    if let Some(media) = shorthand.media {
        let block = doc.create_at_rule_block("media", format!("({media})"));
        doc.set_source(block, source)?;
        for &decl in &declarations {
            doc.append(block, decl)?;
        }
        doc.replace_with(anchor, block)?;
        report.media_blocks += 1;
    } else {
        let parent = doc.parent(anchor)?.ok_or(TreeError::Detached)?;
        for &decl in &declarations {
            doc.insert_before(parent, anchor, decl)?;
        }
        doc.remove(anchor)?;
    }

    tracing::debug!(
        target: targets::EXPANDER,
        line = source.map(|s| s.start.line),
        column = source.map(|s| s.start.column),
        media = shorthand.media,
        declarations = declarations.len(),
        "expanded shorthand '{raw}'"
    );

    report.shorthands += 1;
    report.declarations += declarations.len();
    Ok(())
}
