//! Error codes for loader diagnostics.
//!
//! - `E0xx` - Document errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Invalid YAML syntax.
    ///
    /// The template could not be read as YAML (or JSON). The label points at
    /// the location reported by the YAML reader when one is available.
    E001,

    /// Multiple documents.
    ///
    /// The file contains more than one YAML document separated by `---`.
    /// A CloudFormation template is a single document.
    E002,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid YAML syntax",
            ErrorCode::E002 => "multiple documents in template",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
