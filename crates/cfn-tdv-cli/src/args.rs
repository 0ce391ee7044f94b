//! Command-line argument definitions for the cfn-tdv CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the template directory, the output
//! destination, diagram options and logging verbosity.

use std::path::PathBuf;

use clap::Parser;

use cfn_tdv::direction::Direction;

/// CloudFormation template dependency visualization tool
#[derive(Parser, Debug)]
#[command(name = "cfn-tdv", author, version, about, long_about = None)]
pub struct Args {
    /// Directory to search for templates
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// File to write the Mermaid text to (e.g. result.md). Standard output is used if omitted.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Direction of the diagram (LR: left to right, BT: bottom to top)
    #[arg(short = 'D', long)]
    pub direction: Option<Direction>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render imports of exports that no template declares
    #[arg(long)]
    pub show_unresolved: bool,

    /// Output detailed logs, including the templates explored
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
