//! Resolved dependency edges and self-reference warnings.
//!
//! [`ResolvedEdge`] carries a total order that sorts by source file, then
//! label, then target text, all compared on their literal string form. The
//! order is what makes rendered output independent of the order in which
//! templates were discovered.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use crate::reference::DynamicService;

/// Text used for the target of an import that no analyzed template exports.
pub const UNRESOLVED_TARGET: &str = "(unknown)";

/// The mechanism that produced an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    /// `Fn::ImportValue` / `!ImportValue`
    Import,
    /// `{{resolve:...}}` against the given service
    Dynamic(DynamicService),
}

/// The node an edge points at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeTarget {
    /// Another (or the same) analyzed template, by display name.
    Template(String),
    /// An external parameter or secret, by parameter-identifier.
    Parameter(String),
    /// An import whose export is not declared by any analyzed template.
    Unresolved,
}

impl EdgeTarget {
    /// The literal text of the target, used for ordering and rendering.
    pub fn name(&self) -> &str {
        match self {
            EdgeTarget::Template(name) | EdgeTarget::Parameter(name) => name,
            EdgeTarget::Unresolved => UNRESOLVED_TARGET,
        }
    }
}

/// A directed dependency from a template to its target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedEdge {
    source: String,
    label: String,
    target: EdgeTarget,
    kind: EdgeKind,
}

impl ResolvedEdge {
    /// An import edge from `source` to the template `target` that exports `export`.
    pub fn import(
        source: impl Into<String>,
        export: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            label: export.into(),
            target: EdgeTarget::Template(target.into()),
            kind: EdgeKind::Import,
        }
    }

    /// An import edge whose export is not declared by any analyzed template.
    pub fn unresolved(source: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: export.into(),
            target: EdgeTarget::Unresolved,
            kind: EdgeKind::Import,
        }
    }

    /// A dynamic-reference edge from `source` to an external parameter.
    pub fn dynamic(
        source: impl Into<String>,
        service: DynamicService,
        parameter: impl Into<String>,
    ) -> Self {
        let parameter = parameter.into();
        Self {
            source: source.into(),
            label: parameter.clone(),
            target: EdgeTarget::Parameter(parameter),
            kind: EdgeKind::Dynamic(service),
        }
    }

    /// Display name of the referencing template.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Export name for imports, parameter-identifier for dynamic references.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &EdgeTarget {
        &self.target
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Returns `true` if the edge points back at its own template.
    pub fn is_self_loop(&self) -> bool {
        matches!(&self.target, EdgeTarget::Template(target) if *target == self.source)
    }

    fn sort_key(&self) -> (&str, &str, &str, EdgeKind) {
        (
            self.source.as_str(),
            self.label.as_str(),
            self.target.name(),
            self.kind,
        )
    }
}

impl Ord for ResolvedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for ResolvedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A template importing an export it declares itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelfReferenceWarning {
    file: String,
    export: String,
}

impl SelfReferenceWarning {
    pub fn new(file: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            export: export.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn export(&self) -> &str {
        &self.export
    }
}

impl Display for SelfReferenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} references its own template's Export({}) using Fn::ImportValue or !ImportValue.",
            self.file, self.export
        )
    }
}
