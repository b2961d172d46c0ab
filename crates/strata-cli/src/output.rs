//! Stacked output files.

use serde::Serialize;

use strata::StackedLayout;

use crate::input::InputFile;

/// Serialized result of a stacking pass.
#[derive(Debug, Serialize)]
pub struct OutputFile<'a> {
    total_height: f32,
    level_count: usize,
    #[serde(rename = "segment")]
    segments: Vec<OutputSegment<'a>>,
}

#[derive(Debug, Serialize)]
struct OutputSegment<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    left: f32,
    right: f32,
    top: f32,
    height: f32,
}

impl<'a> OutputFile<'a> {
    /// Pairs input entries with their stacked offsets, in input order.
    pub fn new(input: &'a InputFile, layout: &StackedLayout) -> Self {
        let segments = input
            .entries()
            .iter()
            .zip(layout.iter())
            .map(|(entry, placed)| OutputSegment {
                label: entry.label(),
                left: placed.segment().left(),
                right: placed.segment().right(),
                top: placed.top(),
                height: placed.segment().height(),
            })
            .collect();

        Self {
            total_height: layout.total_height(),
            level_count: layout.level_count(),
            segments,
        }
    }

    /// Render as TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
