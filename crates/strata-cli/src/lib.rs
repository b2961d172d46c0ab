//! CLI logic for the Strata stacking tool.
//!
//! This module contains the core CLI logic: it reads a segment file,
//! stacks the segments and writes the offsets back out as TOML.

pub mod error_adapter;

mod args;
mod config;
mod input;
mod output;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use strata::{Stacker, StrataError, config::LayoutConfig};

use input::InputFile;
use output::OutputFile;

/// Run the Strata CLI application
///
/// This function stacks the segments of the input file and writes the
/// resulting offsets to the output file, or to stdout.
///
/// # Errors
///
/// Returns `StrataError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input parsing errors
/// - Invalid segments
pub fn run(args: &Args) -> Result<(), StrataError> {
    info!(input_path = args.input; "Processing segments");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(order) = args.order {
        app_config = app_config.with_layout(LayoutConfig::new(order));
    }

    let input = InputFile::load(&args.input)?;

    let stacker = Stacker::new(app_config);
    let layout = stacker.stack(&input.segments())?;

    let rendered = OutputFile::new(&input, &layout)
        .to_toml()
        .map_err(io::Error::other)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Stacked layout exported successfully");
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
