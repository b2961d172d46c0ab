//! Error adapter for converting StrataError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use strata::StrataError;

/// Adapter presenting a [`StrataError`] as a miette diagnostic.
pub struct ErrorReport<'a> {
    err: &'a StrataError,
}

impl<'a> ErrorReport<'a> {
    /// Create a new error report.
    pub fn new(err: &'a StrataError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReport")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorReport<'_> {}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            StrataError::Io(_) => "strata::io",
            StrataError::InvalidSegment(_) => "strata::invalid_segment",
            StrataError::Layout(_) => "strata::layout",
        };
        Some(Box::new(code) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            StrataError::InvalidSegment(invalid) => {
                let help = format!(
                    "check [[segment]] entry #{} (counting from 0): {}",
                    invalid.index(),
                    invalid.constraint().help()
                );
                Some(Box::new(help) as Box<dyn fmt::Display>)
            }
            StrataError::Io(_) | StrataError::Layout(_) => None,
        }
    }
}

/// Wrap an error for rendering with a miette report handler.
pub fn to_reportable(err: &StrataError) -> ErrorReport<'_> {
    ErrorReport::new(err)
}

#[cfg(test)]
mod tests {
    use strata::segment::{InvalidSegment, Segment, SegmentConstraint};

    use super::*;

    #[test]
    fn test_invalid_segment_has_code_and_help() {
        let segment = Segment::new(10.0, 5.0, 1.0);
        let err = StrataError::from(InvalidSegment::new(
            3,
            &segment,
            SegmentConstraint::EmptyExtent,
        ));
        let report = to_reportable(&err);

        let code = report.code().map(|c| c.to_string());
        let help = report.help().map(|h| h.to_string());

        assert_eq!(code.as_deref(), Some("strata::invalid_segment"));
        let help = help.expect("Invalid segments should carry help");
        assert!(help.contains("#3"));
        assert!(help.contains("left is strictly less than right"));
        assert_eq!(report.to_string(), err.to_string());
    }

    #[test]
    fn test_layout_error_has_no_help() {
        let err = StrataError::Layout("broken".to_string());
        let report = to_reportable(&err);

        assert!(report.help().is_none());
        assert_eq!(
            report.code().map(|c| c.to_string()).as_deref(),
            Some("strata::layout")
        );
    }
}
