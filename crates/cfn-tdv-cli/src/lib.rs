//! CLI logic for the cfn-tdv tool.
//!
//! Discovers the templates in a directory, runs them through the
//! [`DependencyAnalyzer`] and writes the Mermaid text.

pub mod discovery;
pub mod error_adapter;
pub mod output;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, error, info, warn};

use cfn_tdv::{CfnTdvError, DependencyAnalyzer};

/// Run the cfn-tdv CLI application, writing to standard output
///
/// # Errors
///
/// See [`run_to`].
pub fn run(args: &Args) -> Result<(), CfnTdvError> {
    let stdout = io::stdout();
    run_to(args, &mut stdout.lock())
}

/// Run the cfn-tdv CLI application, writing anything meant for standard
/// output to `out`
///
/// # Errors
///
/// Returns `CfnTdvError` for:
/// - Configuration loading errors
/// - An unreadable template directory or template file
/// - Template parsing errors
/// - Output file errors
pub fn run_to(args: &Args, out: &mut impl Write) -> Result<(), CfnTdvError> {
    info!(directory = args.directory.display().to_string(); "Searching for templates");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(direction) = args.direction {
        app_config = app_config.with_direction(direction);
    }
    if args.show_unresolved {
        app_config = app_config.with_show_unresolved(true);
    }

    let paths = discovery::discover_templates(&args.directory, app_config.discovery())?;
    let names: Vec<String> = paths.iter().map(|path| discovery::display_name(path)).collect();
    debug!(templates:? = names; "Exploration templates");

    let analyzer = DependencyAnalyzer::new(app_config);

    let mut documents = Vec::with_capacity(paths.len());
    for (path, name) in paths.iter().zip(&names) {
        let source = fs::read_to_string(path).inspect_err(|err| {
            error!(path = path.display().to_string(), err:%; "Cannot read template");
        })?;
        documents.push(analyzer.parse(name, &source)?);
    }

    let graph = analyzer.analyze(&documents);
    for warning in graph.warnings() {
        warn!("{warning}");
    }

    let text = analyzer.render(&graph);
    output::write_output(&text, args.output_file.as_deref(), out)?;

    info!(edges = graph.edges().len(); "Dependency diagram written");
    Ok(())
}
