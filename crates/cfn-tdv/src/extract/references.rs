//! Import and dynamic references anywhere in a template.

use log::debug;

use cfn_tdv_core::{
    reference::{DynamicService, ImportReference},
    template::{Node, Tagged, TemplateDocument, Visitor},
};

use super::{IMPORT_VALUE_FUNCTION, IMPORT_VALUE_TAG};

const RESOLVE_PREFIX: &str = "{{resolve:";
const RESOLVE_SUFFIX: &str = "}}";

/// Collect every reference occurrence in `document`, in document order.
pub(super) fn extract_references(document: &TemplateDocument) -> Vec<ImportReference> {
    let mut collector = ReferenceCollector {
        template: document.name(),
        references: Vec::new(),
    };
    collector.visit_node(document.root());
    collector.references
}

struct ReferenceCollector<'a> {
    template: &'a str,
    references: Vec<ImportReference>,
}

impl ReferenceCollector<'_> {
    fn record_import(&mut self, operand: &Node) {
        match operand.as_literal() {
            Some(export) => self
                .references
                .push(ImportReference::named(self.template, export)),
            None => debug!(template = self.template; "Skipping non-literal import operand"),
        }
    }
}

impl Visitor for ReferenceCollector<'_> {
    fn visit_entry(&mut self, key: &str, value: &Node) {
        if key == IMPORT_VALUE_FUNCTION {
            self.record_import(value);
        }
        self.visit_node(value);
    }

    fn visit_tagged(&mut self, tagged: &Tagged) {
        if tagged.tag() == IMPORT_VALUE_TAG {
            self.record_import(tagged.value());
        }
        self.visit_node(tagged.value());
    }

    fn visit_string(&mut self, value: &str) {
        for (service, parameter) in dynamic_references(value) {
            self.references
                .push(ImportReference::dynamic(self.template, service, parameter));
        }
    }
}

/// Scan `text` for `{{resolve:SERVICE:PARAMETER}}` expressions.
///
/// Occurrences are reported left to right. Expressions naming a service other
/// than `ssm`, `ssm-secure` or `secretsmanager` are skipped, as are those with
/// an empty parameter.
///
/// # Examples
///
/// ```
/// use cfn_tdv::extract::dynamic_references;
/// use cfn_tdv::reference::DynamicService;
///
/// let found: Vec<_> =
///     dynamic_references("{{resolve:ssm:golden-ami}}-{{resolve:s3:x}}").collect();
/// assert_eq!(found, vec![(DynamicService::Ssm, "golden-ami")]);
/// ```
pub fn dynamic_references(text: &str) -> DynamicReferences<'_> {
    DynamicReferences { rest: text }
}

/// Iterator returned by [`dynamic_references`].
#[derive(Debug, Clone)]
pub struct DynamicReferences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for DynamicReferences<'a> {
    type Item = (DynamicService, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.rest.find(RESOLVE_PREFIX)? + RESOLVE_PREFIX.len();
            let Some(length) = self.rest[start..].find(RESOLVE_SUFFIX) else {
                self.rest = "";
                return None;
            };

            let body = &self.rest[start..start + length];
            self.rest = &self.rest[start + length + RESOLVE_SUFFIX.len()..];

            if let Some((service, parameter)) = body.split_once(':')
                && !parameter.is_empty()
                && let Ok(service) = service.parse::<DynamicService>()
            {
                return Some((service, parameter));
            }
        }
    }
}
