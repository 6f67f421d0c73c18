//! Type Shorthand - expand the `@type` typography shorthand in CSS.
//!
//! This is the umbrella crate: it re-exports the document layer and the
//! expander, and wires them into a text-in/text-out pipeline.
//!
//! # Example
//!
//! ```
//! use type_shorthand::{process, ExpandOptions};
//!
//! let css = process("@type --s 10px 15px 1px;", &ExpandOptions::default()).unwrap();
//! assert_eq!(
//!     css,
//!     "@media (--s) {\n    font-size: 10px;\n    line-height: 1.5;\n    letter-spacing: 0.1em\n}"
//! );
//! ```

use std::path::{Path, PathBuf};

pub use type_shorthand_core::*;
pub use type_shorthand_expand::{
    expand, ExpandOptions, ExpandReport, ShorthandExpander, MISSING_DECLARATIONS,
    ROOT_SIZE_POSITIVE, ROOT_SIZE_UNIT,
};

/// The expansion crate: options, shorthand parsing and unit helpers.
pub mod expansion {
    pub use type_shorthand_expand::*;
}

/// Target names for log filtering.
pub mod targets {
    /// Text-in/text-out pipeline target.
    pub const PIPELINE: &str = "type_shorthand::pipeline";
}

/// Result type alias for the pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while processing a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or parsing the stylesheet failed.
    #[error(transparent)]
    Document(#[from] type_shorthand_core::Error),

    /// Expanding the shorthand failed.
    #[error(transparent)]
    Expand(#[from] type_shorthand_expand::Error),

    /// An options file could not be read.
    #[error("Failed to read options '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An options file could not be decoded.
    #[error("Invalid options in '{path}': {source}")]
    Options {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse `css`, expand every shorthand in it and print the result.
pub fn process(css: &str, options: &ExpandOptions) -> Result<String> {
    let mut doc = parse_css(css)?;
    expand(&mut doc, options)?;
    Ok(to_css(&doc))
}

/// Like [`process`], with `file` named in diagnostics.
pub fn process_with_file(
    css: &str,
    file: impl Into<PathBuf>,
    options: &ExpandOptions,
) -> Result<String> {
    let mut doc = parse_css_with_file(css, file)?;
    expand(&mut doc, options)?;
    Ok(to_css(&doc))
}

/// Read a stylesheet from disk and process it.
pub fn process_file(path: impl AsRef<Path>, options: &ExpandOptions) -> Result<String> {
    let mut doc = parse_css_file(path)?;
    let report = expand(&mut doc, options)?;
    tracing::info!(
        target: targets::PIPELINE,
        file = ?doc.file(),
        shorthands = report.shorthands,
        declarations = report.declarations,
        "processed stylesheet"
    );
    Ok(to_css(&doc))
}

/// Load expansion options from a TOML file.
///
/// ```toml
/// rootSize = "16px"
/// ```
pub fn load_options(path: impl AsRef<Path>) -> Result<ExpandOptions> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| Error::Options {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_reports_location_with_file() {
        let err = process_with_file("h1 {}\n@type;", "app.css", &ExpandOptions::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "app.css:2:1: Missing typography declarations for @type."
        );
    }

    #[test]
    fn process_config_error() {
        let err = process("@type 16px;", &ExpandOptions::new().with_root_size("16"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Expand(type_shorthand_expand::Error::Config { .. })
        ));
        assert_eq!(err.to_string(), ROOT_SIZE_UNIT);
    }

    #[test]
    fn expansion_module_exposes_unit_helpers() {
        assert_eq!(expansion::units::px_to_em("1px", "10px").as_deref(), Some("0.1em"));
        assert_eq!(expansion::targets::EXPANDER, "type_shorthand_expand::expander");
    }
}
