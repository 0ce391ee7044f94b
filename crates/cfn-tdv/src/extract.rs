//! Per-template extraction.
//!
//! Each template is reduced to [`TemplateFacts`]: the export names it declares
//! and every reference it makes. Extraction never fails; parts of a template
//! that do not have the expected shape simply contribute nothing.

mod exports;
mod references;

pub use references::{DynamicReferences, dynamic_references};

use cfn_tdv_core::{
    reference::{ExportDeclaration, ImportReference},
    template::TemplateDocument,
};

/// Long-form name of the import intrinsic function.
pub const IMPORT_VALUE_FUNCTION: &str = "Fn::ImportValue";

/// Short-form tag of the import intrinsic function, without the `!`.
pub const IMPORT_VALUE_TAG: &str = "ImportValue";

/// Everything the analysis needs to know about one template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFacts {
    name: String,
    exports: Vec<ExportDeclaration>,
    references: Vec<ImportReference>,
}

impl TemplateFacts {
    /// Extract the facts of `document`.
    pub fn extract(document: &TemplateDocument) -> Self {
        Self {
            name: document.name().to_string(),
            exports: exports::extract_exports(document),
            references: references::extract_references(document),
        }
    }

    /// Display name of the template.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared exports, each name once, in document order.
    pub fn exports(&self) -> &[ExportDeclaration] {
        &self.exports
    }

    /// Every reference occurrence, in document order.
    pub fn references(&self) -> &[ImportReference] {
        &self.references
    }
}
