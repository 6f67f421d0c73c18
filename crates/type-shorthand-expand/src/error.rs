//! Error types for shorthand expansion.

use type_shorthand_core::{Location, TreeError};

/// Result type alias for expansion.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while expanding a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The options are invalid. Raised before the document is touched.
    #[error("{message}")]
    Config { message: String },

    /// A shorthand occurrence could not be expanded.
    #[error("{}{message}", .location.as_ref().map(|l| format!("{l}: ")).unwrap_or_default())]
    Shorthand {
        message: String,
        location: Option<Location>,
    },

    /// A tree operation failed.
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a shorthand error pointing at the offending node.
    pub fn shorthand(message: impl Into<String>, location: Option<Location>) -> Self {
        Self::Shorthand {
            message: message.into(),
            location,
        }
    }

    /// The message without location prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::Config { message } | Self::Shorthand { message, .. } => message.clone(),
            Self::Tree(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn shorthand_display_includes_location() {
        let err = Error::shorthand(
            "Missing typography declarations for @type.",
            Some(Location {
                file: Some(PathBuf::from("app.css")),
                line: 2,
                column: 5,
            }),
        );
        assert_eq!(
            err.to_string(),
            "app.css:2:5: Missing typography declarations for @type."
        );
        assert_eq!(err.reason(), "Missing typography declarations for @type.");
    }

    #[test]
    fn shorthand_display_without_location() {
        let err = Error::shorthand("Missing typography declarations for @type.", None);
        assert_eq!(err.to_string(), "Missing typography declarations for @type.");
    }
}
