//! Error types for cfn-tdv operations.
//!
//! [`CfnTdvError`] wraps every failure that can stop a run. Analysis itself
//! never fails; errors come from reading, parsing, configuration and writing
//! the result.

use std::{
    io::{self, ErrorKind},
    path::PathBuf,
};

use thiserror::Error;

use cfn_tdv_parser::error::ParseError;

/// The main error type for cfn-tdv operations.
///
/// The `Parse` variant keeps the template source next to the structured
/// [`ParseError`] so diagnostics can be rendered with source snippets.
#[derive(Debug, Error)]
pub enum CfnTdvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot write output to {}: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },
}

impl CfnTdvError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// Output failures are distinguished by cause: `2` when the output path
    /// is a directory, `3` when its parent does not exist, `4` when
    /// permission is denied. Everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Output { source, .. } => match source.kind() {
                ErrorKind::IsADirectory => 2,
                ErrorKind::NotFound => 3,
                ErrorKind::PermissionDenied => 4,
                _ => 1,
            },
            Self::Io(_) | Self::Parse { .. } | Self::Config(_) => 1,
        }
    }
}
