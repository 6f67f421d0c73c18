//! Source positions attached to document nodes.

use std::fmt;
use std::path::PathBuf;

/// A position in the input stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The region of the input a node was read from.
///
/// Nodes generated by a transform carry a copy of the span of the node they
/// replace, so diagnostics keep pointing at the authored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// Where the node starts.
    pub start: Position,
    /// Where the node ends, when known.
    pub end: Option<Position>,
}

impl SourceSpan {
    /// Create a span that only knows its start.
    pub fn at(line: u32, column: u32) -> Self {
        Self {
            start: Position::new(line, column),
            end: None,
        }
    }

    /// Set the end position.
    pub fn with_end(mut self, end: Position) -> Self {
        self.end = Some(end);
        self
    }
}

/// A resolved location suitable for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Input file, if the document was read from one.
    pub file: Option<PathBuf>,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.column),
            None => write!(f, "<input>:{}:{}", self.line, self.column),
        }
    }
}
