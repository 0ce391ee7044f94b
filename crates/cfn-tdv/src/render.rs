//! Text renderers for dependency graphs.

pub mod mermaid;

pub use mermaid::MermaidRenderer;

use crate::graph::DependencyGraph;

/// Turns a [`DependencyGraph`] into a textual diagram.
pub trait Renderer {
    /// Render `graph`. Rendering cannot fail and is deterministic.
    fn render(&self, graph: &DependencyGraph) -> String;
}
