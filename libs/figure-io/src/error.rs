//! # Error Types
//!
//! Errors raised while reading or writing the text formats.
//!
//! Parse errors carry the 1-based line number of the offending record. For
//! input that ends early the line number is the one just past the last line.

use figure_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur during mesh or patch file I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Underlying read or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The text did not follow the expected layout.
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Parsed data was rejected by the mesh library.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl IoError {
    /// Creates a malformed input error at `line`.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Line number of a parse error, if this is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for file I/O.
pub type IoResult<T> = Result<T, IoError>;
