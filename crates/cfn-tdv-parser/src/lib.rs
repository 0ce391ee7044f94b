//! # cfn-tdv Parser
//!
//! Loader for CloudFormation templates. YAML and JSON templates are read into
//! the [`TemplateDocument`] tree defined in `cfn-tdv-core`, with short-form
//! intrinsic function tags (`!ImportValue`, `!Sub`, ...) preserved as tagged
//! nodes.
//!
//! ## Usage
//!
//! ```
//! # use cfn_tdv_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//! Outputs:
//!   VpcId:
//!     Value: !Ref Vpc
//!     Export:
//!       Name: VpcStackVpcId
//! "#;
//!
//!     let document = parse("vpc.yml", source)?;
//!     assert_eq!(document.name(), "vpc.yml");
//!     Ok(())
//! }
//! ```

pub mod error;

mod loader;
mod span;

pub use span::Span;

use cfn_tdv_core::template::TemplateDocument;

use error::ParseError;

/// Parse template source text into a [`TemplateDocument`].
///
/// # Arguments
///
/// * `name` - Display name of the template (its file name)
/// * `source` - YAML or JSON source text
///
/// # Errors
///
/// Returns a [`ParseError`] with an `E001` diagnostic when the text is not
/// valid YAML, or an `E002` diagnostic when it holds more than one document.
pub fn parse(name: &str, source: &str) -> Result<TemplateDocument, ParseError> {
    loader::load(name, source)
}
