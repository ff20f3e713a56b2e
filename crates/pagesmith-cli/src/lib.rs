//! CLI logic for the Pagesmith page compiler.
//!
//! This module reads a page manifest, compiles its root layout and writes
//! every artifact below the output directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use pagesmith::{PageCompiler, PagesmithError, sink::DirSink};

use error_adapter::ManifestReport;

/// Run the Pagesmith CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PagesmithError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Manifest parsing errors
pub fn run(args: &Args) -> Result<(), PagesmithError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing manifest"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let compiler = PageCompiler::new(app_config);
    let manifest = compiler.parse(&source)?;

    for warning in manifest.warnings() {
        warn!("{}", error_adapter::render(&ManifestReport::new(warning, &source)));
    }

    if args.outline {
        print!("{}", compiler.outline(manifest.root()));
    }

    let mut sink = DirSink::new(&args.output);
    let doc = compiler.compile(manifest.root(), &mut sink)?;

    info!(
        output_dir = args.output,
        root = doc.id.as_str(),
        sub_layouts = doc.sub_layouts.len();
        "Artifacts written successfully"
    );

    Ok(())
}
