//! Error types for the document layer.

use std::path::PathBuf;

use crate::document::TreeError;

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or manipulating a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS parsing error reported by `cssparser`.
    ///
    /// The reader recovers from malformed statements on its own, so this only
    /// shows up when the tokenizer itself gives up on a statement.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid tree operation.
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
