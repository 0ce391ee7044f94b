//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a location in the template source.
///
/// ```text
/// error[E001]: did not find expected key
///   --> vpc.yml:12:3
///    |
/// 12 |   Export Name: VpcId
///    |   ^ invalid YAML here
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    /// Create a new label.
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
