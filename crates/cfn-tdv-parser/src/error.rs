//! Error and diagnostic system for the template loader.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the template source
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error message with optional error code, source
//! locations, and help text. Diagnostics are wrapped in [`ParseError`] when
//! returned from [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use cfn_tdv_parser::error::{Diagnostic, ErrorCode};
//! # use cfn_tdv_parser::Span;
//!
//! let diag = Diagnostic::error("mapping values are not allowed in this context")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(42..43), "invalid YAML here")
//!     .with_help("check the indentation of the surrounding block");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
