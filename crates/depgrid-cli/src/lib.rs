//! CLI logic for the depgrid layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use depgrid::{DepgridError, GridBuilder};

use error_adapter::{render, source_reports};

/// Run the depgrid CLI application
///
/// Reads the input description, lays it out and writes the export to the
/// output file, or to stdout when no output path is given.
///
/// # Errors
///
/// Returns `DepgridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Dependency cycles
/// - Layout and export errors
pub fn run(args: &Args) -> Result<(), DepgridError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing graph description"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config.output_mut().set_format(format);
    }
    if args.fill {
        app_config.output_mut().set_fill_placeholders(true);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = GridBuilder::new(app_config);
    let document = builder.parse(&source)?;
    for report in source_reports(document.warnings(), &source) {
        warn!("{}", render(&*report));
    }

    let dag = builder.layout(&document)?;
    let rendered = builder.export(&dag)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Grid exported successfully");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
