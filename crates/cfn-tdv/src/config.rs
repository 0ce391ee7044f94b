//! Configuration types for dependency analysis and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`RenderConfig`] - Diagram direction and heading.
//! - [`AnalysisConfig`] - How references are resolved into edges.
//! - [`DiscoveryConfig`] - Which files count as templates.
//!
//! # Example
//!
//! ```
//! # use cfn_tdv::{config::AppConfig, direction::Direction};
//! let config = AppConfig::default();
//! assert_eq!(config.render().direction(), Direction::LR);
//! assert!(!config.analysis().show_unresolved());
//! ```

use serde::Deserialize;

use cfn_tdv_core::direction::Direction;

/// Heading written above the Mermaid block unless configured otherwise.
pub const DEFAULT_TITLE: &str = "CFn template dependency";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    render: RenderConfig,

    #[serde(default)]
    analysis: AnalysisConfig,

    #[serde(default)]
    discovery: DiscoveryConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        render: RenderConfig,
        analysis: AnalysisConfig,
        discovery: DiscoveryConfig,
    ) -> Self {
        Self {
            render,
            analysis,
            discovery,
        }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the analysis configuration.
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    /// Returns the discovery configuration.
    pub fn discovery(&self) -> &DiscoveryConfig {
        &self.discovery
    }

    /// Overrides the diagram direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.render.direction = direction;
        self
    }

    /// Overrides whether unresolved imports are rendered.
    pub fn with_show_unresolved(mut self, show_unresolved: bool) -> Self {
        self.analysis.show_unresolved = show_unresolved;
        self
    }
}

/// Diagram rendering options.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Flow direction of the Mermaid graph.
    #[serde(default)]
    direction: Direction,

    /// Markdown heading written above the Mermaid block.
    #[serde(default = "default_title")]
    title: String,
}

impl RenderConfig {
    pub fn new(direction: Direction, title: impl Into<String>) -> Self {
        Self {
            direction,
            title: title.into(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Direction::default(), DEFAULT_TITLE)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Reference resolution options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Emit edges to a placeholder node for imports nobody exports.
    #[serde(default)]
    show_unresolved: bool,
}

impl AnalysisConfig {
    pub fn new(show_unresolved: bool) -> Self {
        Self { show_unresolved }
    }

    /// Returns `true` if unresolved imports become edges instead of being dropped.
    pub fn show_unresolved(&self) -> bool {
        self.show_unresolved
    }
}

/// Template discovery options.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// File extensions, without the dot, that are treated as templates.
    #[serde(default = "default_extensions")]
    extensions: Vec<String>,
}

impl DiscoveryConfig {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns `true` if `extension` (without the dot) is a template extension.
    pub fn matches(&self, extension: &str) -> bool {
        self.extensions.iter().any(|candidate| candidate == extension)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::new(default_extensions())
    }
}

fn default_extensions() -> Vec<String> {
    vec!["yml".to_string(), "yaml".to_string()]
}
