//! The ParseError type returned when a template cannot be loaded.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for loading a template.
///
/// Wraps the display name of the template and one or more diagnostics.
#[derive(Debug)]
pub struct ParseError {
    template: String,
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error for `template` from diagnostics.
    pub fn new(template: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            template: template.into(),
            diagnostics,
        }
    }

    /// Display name of the template that failed to load.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}", self.template)?;
        if let Some(first) = self.diagnostics.first() {
            write!(f, ": {first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
