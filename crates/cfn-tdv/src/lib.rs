//! cfn-tdv - Dependency diagrams for CloudFormation templates.
//!
//! Templates are connected by the exports they declare in `Outputs`, the
//! `Fn::ImportValue` / `!ImportValue` calls that consume them, and the
//! `{{resolve:...}}` dynamic references that read external parameters. This
//! crate extracts those links, resolves them into a deterministic
//! [`DependencyGraph`] and renders it as a Mermaid flowchart.

pub mod config;
pub mod extract;
pub mod graph;
pub mod render;

mod error;
mod resolve;

pub use cfn_tdv_core::{dependency, direction, reference, template};

pub use error::CfnTdvError;
pub use graph::DependencyGraph;

use log::{debug, info, trace};

use config::AppConfig;
use extract::TemplateFacts;
use render::{MermaidRenderer, Renderer};
use template::TemplateDocument;

/// Entry point for parsing, analyzing and rendering a set of templates.
///
/// # Examples
///
/// ```
/// use cfn_tdv::{DependencyAnalyzer, config::AppConfig};
///
/// let analyzer = DependencyAnalyzer::new(AppConfig::default());
///
/// let vpc = analyzer
///     .parse("vpc.yml", "Outputs:\n  Sg:\n    Export:\n      Name: VpcSg\n")
///     .expect("Failed to parse");
/// let ec2 = analyzer
///     .parse("ec2.yml", "Resources:\n  Host:\n    SecurityGroup: !ImportValue VpcSg\n")
///     .expect("Failed to parse");
///
/// let graph = analyzer.analyze(&[vpc, ec2]);
/// let text = analyzer.render(&graph);
/// assert!(text.contains("    ec2.yml-->|VpcSg|vpc.yml\n"));
/// ```
#[derive(Debug, Default)]
pub struct DependencyAnalyzer {
    config: AppConfig,
}

impl DependencyAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse the source of one template.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the template, used as its node in the graph
    /// * `source` - YAML or JSON template text
    ///
    /// # Errors
    ///
    /// Returns [`CfnTdvError::Parse`] if the source is not a single valid YAML
    /// document.
    pub fn parse(&self, name: &str, source: &str) -> Result<TemplateDocument, CfnTdvError> {
        debug!(template = name; "Parsing template");

        let document = cfn_tdv_parser::parse(name, source)
            .map_err(|err| CfnTdvError::new_parse_error(err, source))?;

        trace!(template = name; "Template parsed");
        Ok(document)
    }

    /// Analyze `documents` into a dependency graph.
    ///
    /// The result depends only on the set of documents, not on their order,
    /// except for the order of self-reference warnings.
    pub fn analyze(&self, documents: &[TemplateDocument]) -> DependencyGraph {
        info!(templates = documents.len(); "Analyzing templates");

        let facts: Vec<TemplateFacts> = documents.iter().map(TemplateFacts::extract).collect();
        for template in &facts {
            debug!(
                template = template.name(),
                exports = template.exports().len(),
                references = template.references().len();
                "Extracted template facts"
            );
        }

        let resolution = resolve::resolve(&facts, self.config.analysis().show_unresolved());
        let graph = DependencyGraph::build(resolution.edges, resolution.warnings);

        info!(
            edges = graph.edges().len(),
            warnings = graph.warnings().len();
            "Dependency graph built"
        );
        graph
    }

    /// Render `graph` as Markdown with a Mermaid block.
    pub fn render(&self, graph: &DependencyGraph) -> String {
        MermaidRenderer::from(self.config.render()).render(graph)
    }
}
