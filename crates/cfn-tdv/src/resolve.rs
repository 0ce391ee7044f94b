//! Cross-template reference resolution.
//!
//! Builds an index from export name to declaring template, then turns every
//! reference occurrence into a [`ResolvedEdge`]. Imports of exports declared
//! by the importing template itself produce a [`SelfReferenceWarning`] next to
//! the edge.

use std::collections::{BTreeMap, btree_map::Entry};

use log::{debug, warn};

use cfn_tdv_core::{
    dependency::{ResolvedEdge, SelfReferenceWarning},
    reference::ReferenceKind,
};

use crate::extract::TemplateFacts;

/// Result of resolving the references of a set of templates.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    pub edges: Vec<ResolvedEdge>,
    pub warnings: Vec<SelfReferenceWarning>,
}

/// Resolve every reference in `templates`.
///
/// Edges are produced per occurrence and may repeat. Warnings are produced per
/// self-import occurrence, in template then document order. Imports of
/// undeclared exports are dropped unless `show_unresolved` is set.
pub(crate) fn resolve(templates: &[TemplateFacts], show_unresolved: bool) -> Resolution {
    let exports = export_index(templates);
    let mut resolution = Resolution::default();

    for template in templates {
        for reference in template.references() {
            match reference.kind() {
                ReferenceKind::Named { export } => match exports.get(export.as_str()) {
                    Some(target) => {
                        let edge = ResolvedEdge::import(template.name(), export, *target);
                        if edge.is_self_loop() {
                            resolution
                                .warnings
                                .push(SelfReferenceWarning::new(template.name(), export));
                        }
                        resolution.edges.push(edge);
                    }
                    None if show_unresolved => {
                        resolution
                            .edges
                            .push(ResolvedEdge::unresolved(template.name(), export));
                    }
                    None => {
                        debug!(template = template.name(), export; "Dropping unresolved import");
                    }
                },
                ReferenceKind::Dynamic { service, parameter } => {
                    resolution
                        .edges
                        .push(ResolvedEdge::dynamic(template.name(), *service, parameter));
                }
            }
        }
    }

    resolution
}

/// Map each export name to the template declaring it.
///
/// When several templates declare the same name, the lexicographically
/// smallest template name wins regardless of input order.
fn export_index(templates: &[TemplateFacts]) -> BTreeMap<&str, &str> {
    let mut index: BTreeMap<&str, &str> = BTreeMap::new();

    for template in templates {
        for export in template.exports() {
            match index.entry(export.name()) {
                Entry::Vacant(entry) => {
                    entry.insert(export.file());
                }
                Entry::Occupied(mut entry) => {
                    let current = *entry.get();
                    if current == export.file() {
                        continue;
                    }
                    let winner = current.min(export.file());
                    warn!(
                        export = export.name(),
                        first = current,
                        second = export.file(),
                        chosen = winner;
                        "Export declared by more than one template"
                    );
                    entry.insert(winner);
                }
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use cfn_tdv_core::{
        dependency::EdgeTarget,
        reference::DynamicService,
        template::{Node, TemplateDocument},
    };

    use super::*;

    fn outputs(exports: &[&str]) -> Node {
        Node::mapping(exports.iter().map(|export| {
            (
                format!("Out{export}"),
                Node::mapping([("Export", Node::mapping([("Name", Node::string(*export))]))]),
            )
        }))
    }

    fn exporting(exports: &[&str]) -> Node {
        Node::mapping([("Outputs", outputs(exports))])
    }

    fn facts(name: &str, root: Node) -> TemplateFacts {
        TemplateFacts::extract(&TemplateDocument::new(name, root))
    }

    fn importing(exports: &[&str]) -> Node {
        Node::Sequence(
            exports
                .iter()
                .map(|export| Node::tagged("ImportValue", Node::string(*export)))
                .collect(),
        )
    }

    #[test]
    fn test_import_resolves_to_exporter() {
        let templates = vec![
            facts("vpc.yml", exporting(&["VpcStackSecurityGroup"])),
            facts("ec2.yml", importing(&["VpcStackSecurityGroup"])),
        ];

        let resolution = resolve(&templates, false);
        assert_eq!(
            resolution.edges,
            vec![ResolvedEdge::import("ec2.yml", "VpcStackSecurityGroup", "vpc.yml")]
        );
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_self_import_warns_per_occurrence() {
        let root = Node::mapping([
            ("Outputs", outputs(&["Sg"])),
            ("Resources", importing(&["Sg", "Sg"])),
        ]);
        let templates = vec![facts("vpc.yml", root)];

        let resolution = resolve(&templates, false);
        assert_eq!(resolution.edges.len(), 2);
        assert!(resolution.edges.iter().all(ResolvedEdge::is_self_loop));
        assert_eq!(
            resolution.warnings,
            vec![
                SelfReferenceWarning::new("vpc.yml", "Sg"),
                SelfReferenceWarning::new("vpc.yml", "Sg"),
            ]
        );
    }

    #[test]
    fn test_unresolved_import_dropped_by_default() {
        let templates = vec![facts("ec2.yml", importing(&["Missing"]))];

        let resolution = resolve(&templates, false);
        assert!(resolution.edges.is_empty());
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_unresolved_import_kept_when_requested() {
        let templates = vec![facts("ec2.yml", importing(&["Missing"]))];

        let resolution = resolve(&templates, true);
        assert_eq!(resolution.edges, vec![ResolvedEdge::unresolved("ec2.yml", "Missing")]);
        assert_eq!(resolution.edges[0].target(), &EdgeTarget::Unresolved);
    }

    #[test]
    fn test_dynamic_references_always_produce_edges() {
        let root = Node::mapping([("ImageId", Node::string("{{resolve:ssm:golden-ami}}"))]);
        let templates = vec![facts("ec2.yml", root)];

        let resolution = resolve(&templates, false);
        assert_eq!(
            resolution.edges,
            vec![ResolvedEdge::dynamic("ec2.yml", DynamicService::Ssm, "golden-ami")]
        );
    }

    #[test]
    fn test_ambiguous_export_picks_smallest_template_name() {
        let forward = vec![
            facts("b.yml", exporting(&["Shared"])),
            facts("a.yml", exporting(&["Shared"])),
            facts("c.yml", importing(&["Shared"])),
        ];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();

        for templates in [forward, backward] {
            let resolution = resolve(&templates, false);
            assert_eq!(
                resolution.edges,
                vec![ResolvedEdge::import("c.yml", "Shared", "a.yml")]
            );
        }
    }
}
