//! YAML template loading.
//!
//! Templates are read with `serde_yaml`, which keeps CloudFormation short-form
//! tags such as `!ImportValue` as tagged values. The resulting
//! [`serde_yaml::Value`] is converted into the crate-independent
//! [`Node`] tree used by the analysis.

use log::{debug, trace};
use serde::Deserialize;
use serde_yaml::Value;

use cfn_tdv_core::template::{Node, Scalar, TemplateDocument};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Load a template's source text into a [`TemplateDocument`] named `name`.
pub(crate) fn load(name: &str, source: &str) -> Result<TemplateDocument, ParseError> {
    let mut documents = Vec::new();

    for document in serde_yaml::Deserializer::from_str(source) {
        let value = Value::deserialize(document)
            .map_err(|err| ParseError::new(name, vec![yaml_diagnostic(&err, source)]))?;
        documents.push(value);
    }

    if documents.len() > 1 {
        return Err(ParseError::new(
            name,
            vec![
                Diagnostic::error(format!(
                    "template contains {} YAML documents",
                    documents.len()
                ))
                .with_code(ErrorCode::E002)
                .with_help("split the documents into separate template files"),
            ],
        ));
    }

    let root = documents
        .pop()
        .map(|value| convert(name, value))
        .unwrap_or_default();
    trace!(template = name, root:?; "Loaded template");

    Ok(TemplateDocument::new(name, root))
}

/// Build an `E001` diagnostic from a YAML reader error.
fn yaml_diagnostic(err: &serde_yaml::Error, source: &str) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.to_string()).with_code(ErrorCode::E001);

    match err.location() {
        Some(location) => {
            diagnostic.with_label(Span::at(location.index(), source.len()), "invalid YAML here")
        }
        None => diagnostic,
    }
}

fn convert(name: &str, value: Value) -> Node {
    match value {
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(value) => Node::Scalar(Scalar::Bool(value)),
        Value::Number(value) => Node::Scalar(Scalar::Number(value.to_string())),
        Value::String(value) => Node::Scalar(Scalar::String(value)),
        Value::Sequence(items) => {
            Node::Sequence(items.into_iter().map(|item| convert(name, item)).collect())
        }
        Value::Mapping(mapping) => Node::Mapping(
            mapping
                .into_iter()
                .filter_map(|(key, value)| match key_text(&key) {
                    Some(key) => Some((key, convert(name, value))),
                    None => {
                        debug!(template = name, key:?; "Skipping non-scalar mapping key");
                        None
                    }
                })
                .collect(),
        ),
        Value::Tagged(tagged) => Node::tagged(tagged.tag.to_string(), convert(name, tagged.value)),
    }
}

/// Textual form of a scalar mapping key.
fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(key) => Some(key.clone()),
        Value::Number(key) => Some(key.to_string()),
        Value::Bool(key) => Some(key.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}
