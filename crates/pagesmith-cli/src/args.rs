//! Command-line argument definitions for the Pagesmith CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the manifest and output paths,
//! configuration file selection and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Pagesmith page compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the page manifest (TOML)
    #[arg(help = "Path to the page manifest")]
    pub input: String,

    /// Directory that receives components, docs and TypeScript files
    #[arg(short, long, default_value = "out")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the root layout's outline to stdout before compiling
    #[arg(long)]
    pub outline: bool,
}
