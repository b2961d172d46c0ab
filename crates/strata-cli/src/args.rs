//! Command-line argument definitions for the Strata CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, ordering, and logging verbosity.

use clap::Parser;

use strata::SegmentOrder;

/// Command-line arguments for the Strata stacking tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input segment file (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Segment ordering (chronological, input); overrides the configuration
    #[arg(long)]
    pub order: Option<SegmentOrder>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
