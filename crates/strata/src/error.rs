//! Error types for Strata operations.
//!
//! This module provides the main error type [`StrataError`] which wraps
//! the error conditions that can occur while stacking segments.

use std::io;

use thiserror::Error;

use strata_core::segment::InvalidSegment;

/// The main error type for Strata operations.
///
/// # Validation Variant
///
/// The `InvalidSegment` variant identifies the offending input record by
/// its position in the caller's slice and names the violated constraint.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    InvalidSegment(#[from] InvalidSegment),

    #[error("Layout error: {0}")]
    Layout(String),
}
