//! CSS parsing module.

mod css_parser;

pub use css_parser::{parse_css, parse_css_file, parse_css_with_file};
