//! Command-line argument definitions for the depgrid CLI.
//!
//! Arguments select the input and output paths, the configuration file,
//! output overrides and logging verbosity.

use clap::Parser;

use depgrid::config::OutputFormat;

/// Lay out a dependency graph description on a grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input `.dep` file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (json, text); overrides the configuration file
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Fill empty grid cells with placeholder nodes
    #[arg(long)]
    pub fill: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
