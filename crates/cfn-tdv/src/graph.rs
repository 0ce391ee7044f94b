//! The dependency graph handed to renderers.

use std::collections::BTreeSet;

use cfn_tdv_core::dependency::{ResolvedEdge, SelfReferenceWarning};

/// Deduplicated, ordered edges plus the warnings collected while resolving.
///
/// Edges are sorted by their total order, so the graph is identical for any
/// permutation of the analyzed templates. Warnings keep the order in which
/// they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: Vec<ResolvedEdge>,
    warnings: Vec<SelfReferenceWarning>,
}

impl DependencyGraph {
    /// Build a graph from possibly repeated edges.
    pub fn build(
        edges: impl IntoIterator<Item = ResolvedEdge>,
        warnings: Vec<SelfReferenceWarning>,
    ) -> Self {
        let edges: BTreeSet<_> = edges.into_iter().collect();
        Self {
            edges: edges.into_iter().collect(),
            warnings,
        }
    }

    pub fn edges(&self) -> &[ResolvedEdge] {
        &self.edges
    }

    pub fn warnings(&self) -> &[SelfReferenceWarning] {
        &self.warnings
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
