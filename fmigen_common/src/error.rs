//! Error types for header generation.
//!
//! Every variant is fatal for the run. Unrecognized variable kinds are not
//! errors; they are reported as [`Diagnostic`](crate::Diagnostic) values.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum FmiGenError {
    /// The input could not be read or is not well-formed XML.
    #[error("Failed to parse '{path}': {details}")]
    Parse {
        /// The document that failed to load.
        path: PathBuf,
        /// Reader or parser message.
        details: String,
    },

    /// A required attribute or element is missing or malformed.
    #[error("Invalid model description: {0}")]
    Schema(String),

    /// The header cannot be emitted or written.
    #[error("Cannot produce header: {0}")]
    Output(String),
}

impl FmiGenError {
    /// Create a parse error for the document at `path`.
    pub fn parse(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a schema error for a required attribute that is absent.
    pub fn missing_attr(element: &str, attr: &str) -> Self {
        Self::Schema(format!("<{element}> is missing required attribute '{attr}'"))
    }

    /// Create an output error.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

/// Result alias used across the fmigen crates.
pub type Result<T> = std::result::Result<T, FmiGenError>;
