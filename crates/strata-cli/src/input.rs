//! Segment input files.
//!
//! An input file is a TOML document with one `[[segment]]` table per
//! segment:
//!
//! ```toml
//! [[segment]]
//! label = "Standup"
//! left = 0
//! right = 40
//! height = 22
//! ```

use std::{fs, io, path::Path};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use strata::{StrataError, segment::Segment};

/// Input-file errors for CLI
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to parse segment file: {0}")]
    Parse(String),
}

impl From<InputError> for StrataError {
    fn from(err: InputError) -> Self {
        StrataError::Io(io::Error::other(err.to_string()))
    }
}

/// A parsed segment file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFile {
    #[serde(default, rename = "segment")]
    segments: Vec<InputSegment>,
}

/// One `[[segment]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSegment {
    #[serde(default)]
    label: Option<String>,
    left: f32,
    right: f32,
    height: f32,
}

impl InputSegment {
    /// Optional display label carried through to the output
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Converts the entry into a [`Segment`] for stacking
    pub fn to_segment(&self) -> Segment {
        Segment::new(self.left, self.right, self.height)
    }
}

impl InputFile {
    /// Parse an input file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid segment file.
    pub fn parse(content: &str) -> Result<Self, StrataError> {
        let input: InputFile =
            toml::from_str(content).map_err(|e| InputError::Parse(e.to_string()))?;
        debug!(segments = input.segments.len(); "Segment file parsed");
        Ok(input)
    }

    /// Read and parse an input file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StrataError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Entries in file order
    pub fn entries(&self) -> &[InputSegment] {
        &self.segments
    }

    /// Segments in file order, ready for stacking
    pub fn segments(&self) -> Vec<Segment> {
        self.segments.iter().map(InputSegment::to_segment).collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_parse_segments_in_order() {
        let input = InputFile::parse(
            r#"
            [[segment]]
            label = "first"
            left = 0
            right = 10.5
            height = 20

            [[segment]]
            left = 5
            right = 15
            height = 30
            "#,
        )
        .expect("Input should parse");

        assert_eq!(input.entries().len(), 2);
        assert_eq!(input.entries()[0].label(), Some("first"));
        assert_eq!(input.entries()[1].label(), None);

        let segments = input.segments();
        assert_approx_eq!(f32, segments[0].right(), 10.5);
        assert_approx_eq!(f32, segments[1].height(), 30.0);
    }

    #[test]
    fn test_parse_empty_file() {
        let input = InputFile::parse("").expect("Empty input should parse");

        assert!(input.segments().is_empty());
    }

    #[test]
    fn test_parse_missing_field_fails() {
        let result = InputFile::parse("[[segment]]\nleft = 0\nright = 10\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_field_fails() {
        let result = InputFile::parse("[[segment]]\nleft = 0\nright = 10\nheight = 5\ntop = 3\n");

        assert!(result.is_err());
    }
}
