//! Error types for Pagesmith operations.
//!
//! This module provides the main error type [`PagesmithError`] which wraps
//! the error conditions that can occur while parsing and compiling pages.

use std::io;

use thiserror::Error;

use pagesmith_parser::error::ParseError;

/// The main error type for Pagesmith operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the manifest source next to the diagnostics so
/// callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum PagesmithError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl PagesmithError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
