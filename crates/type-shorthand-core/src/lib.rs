//! Document layer for the typography shorthand.
//!
//! This crate provides the CSS tree that transforms operate on:
//!
//! - **Document tree**: arena-backed nodes with parent links and stable IDs
//! - **Tree operations**: append, insert-before, replace and remove
//! - **CSS Parsing**: read stylesheet text into a tree with source positions
//! - **Printing**: serialize a tree back into CSS text
//!
//! # Example
//!
//! ```
//! use type_shorthand_core::prelude::*;
//!
//! let mut doc = parse_css("h1 { type: 20px; }").unwrap();
//! let rule = doc.children(doc.root()).unwrap()[0];
//! let decl = doc.children(rule).unwrap()[0];
//!
//! let font_size = doc.create_declaration("font-size", "20px");
//! doc.replace_with(decl, font_size).unwrap();
//!
//! assert_eq!(to_css(&doc), "h1 {\n    font-size: 20px\n}");
//! ```

pub mod document;
pub mod logging;
pub mod parser;
pub mod printer;

mod error;

pub use document::{
    Document, Location, NodeId, NodeKind, Position, SourceSpan, TreeError, TreeResult,
};
pub use error::{Error, Result};
pub use parser::{parse_css, parse_css_file, parse_css_with_file};
pub use printer::to_css;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::document::{Document, Location, NodeId, NodeKind, SourceSpan};
    pub use crate::parser::{parse_css, parse_css_file, parse_css_with_file};
    pub use crate::printer::to_css;
}
