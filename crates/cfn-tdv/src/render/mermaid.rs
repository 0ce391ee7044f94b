//! Mermaid flowchart output.
//!
//! The document is a Markdown heading followed by a fenced `mermaid` block:
//!
//! ````text
//! # CFn template dependency
//!
//! ```mermaid
//! graph LR
//!     ec2.yml-->|VpcStackSecurityGroup|vpc.yml
//!     ec2.yml-->|ssm|golden-ami[(golden-ami)]
//! ```
//! ````
//!
//! Templates are plain nodes, dynamic-reference parameters are cylinders and
//! unresolved imports point at a single hexagon placeholder.

use indexmap::IndexSet;
use log::debug;

use cfn_tdv_core::{
    dependency::{EdgeKind, EdgeTarget, ResolvedEdge},
    direction::Direction,
};

use crate::{config::RenderConfig, graph::DependencyGraph};

use super::Renderer;

const INDENT: &str = "    ";
const FENCE: &str = "```";
const UNRESOLVED_NODE: &str = "unknown{{\"(unknown)\"}}";

/// Renders a [`DependencyGraph`] as a Markdown document holding a Mermaid graph.
#[derive(Debug, Clone)]
pub struct MermaidRenderer {
    direction: Direction,
    title: String,
}

impl MermaidRenderer {
    pub fn new(direction: Direction, title: impl Into<String>) -> Self {
        Self {
            direction,
            title: title.into(),
        }
    }

    fn edge_line(edge: &ResolvedEdge) -> String {
        match (edge.kind(), edge.target()) {
            (EdgeKind::Dynamic(service), target) => {
                let node = node_id(target.name());
                format!("{INDENT}{}-->|{service}|{node}[({node})]", edge.source())
            }
            (EdgeKind::Import, EdgeTarget::Unresolved) => {
                format!("{INDENT}{}-->|{}|{UNRESOLVED_NODE}", edge.source(), edge.label())
            }
            (EdgeKind::Import, target) => {
                format!("{INDENT}{}-->|{}|{}", edge.source(), edge.label(), target.name())
            }
        }
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for MermaidRenderer {
    fn from(config: &RenderConfig) -> Self {
        Self::new(config.direction(), config.title())
    }
}

impl Renderer for MermaidRenderer {
    fn render(&self, graph: &DependencyGraph) -> String {
        // Distinct edges can normalize to the same line.
        let lines: IndexSet<String> = graph.edges().iter().map(Self::edge_line).collect();
        debug!(lines = lines.len(), direction:% = self.direction; "Rendering Mermaid graph");

        let mut text = format!(
            "# {}\n\n{FENCE}mermaid\ngraph {}\n",
            self.title, self.direction
        );
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str(FENCE);
        text.push('\n');
        text
    }
}

/// Mermaid node id for a dynamic-reference parameter.
///
/// `${Var}` becomes `$Var` and any other brace is dropped, since braces
/// delimit node shapes in Mermaid.
fn node_id(parameter: &str) -> String {
    parameter.replace(['{', '}'], "")
}

#[cfg(test)]
mod tests {
    use cfn_tdv_core::reference::DynamicService;

    use super::*;

    fn render(edges: Vec<ResolvedEdge>) -> String {
        MermaidRenderer::default().render(&DependencyGraph::build(edges, Vec::new()))
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(
            render(Vec::new()),
            "# CFn template dependency\n\n```mermaid\ngraph LR\n```\n"
        );
    }

    #[test]
    fn test_import_and_dynamic_edges() {
        let text = render(vec![
            ResolvedEdge::dynamic("ec2.yml", DynamicService::Ssm, "golden-ami"),
            ResolvedEdge::import("ec2.yml", "VpcStackSecurityGroup", "vpc.yml"),
        ]);

        assert_eq!(
            text,
            "# CFn template dependency\n\n```mermaid\ngraph LR\n\
             \x20   ec2.yml-->|VpcStackSecurityGroup|vpc.yml\n\
             \x20   ec2.yml-->|ssm|golden-ami[(golden-ami)]\n\
             ```\n"
        );
    }

    #[test]
    fn test_direction_and_title() {
        let renderer = MermaidRenderer::new(Direction::BT, "Stacks");
        let text = renderer.render(&DependencyGraph::default());

        assert!(text.starts_with("# Stacks\n\n```mermaid\ngraph BT\n"));
    }

    #[test]
    fn test_unresolved_edge_uses_placeholder_node() {
        let text = render(vec![ResolvedEdge::unresolved("ec2.yml", "Missing")]);

        assert!(text.contains("    ec2.yml-->|Missing|unknown{{\"(unknown)\"}}\n"));
    }

    #[test]
    fn test_dynamic_node_is_normalized() {
        let text = render(vec![ResolvedEdge::dynamic(
            "db.yml",
            DynamicService::SecretsManager,
            "${MySecret}:SecretString:${username}",
        )]);

        assert!(text.contains(
            "    db.yml-->|secretsmanager|$MySecret:SecretString:$username[($MySecret:SecretString:$username)]\n"
        ));
    }

    #[test]
    fn test_lines_that_normalize_alike_are_written_once() {
        let text = render(vec![
            ResolvedEdge::dynamic("a.yml", DynamicService::Ssm, "${Ami}"),
            ResolvedEdge::dynamic("a.yml", DynamicService::Ssm, "$Ami"),
        ]);

        assert_eq!(text.matches("-->").count(), 1);
    }

    #[test]
    fn test_node_id() {
        assert_eq!(node_id("golden-ami:2"), "golden-ami:2");
        assert_eq!(node_id("${Env}-ami"), "$Env-ami");
        assert_eq!(node_id("broken}{"), "broken");
    }
}
