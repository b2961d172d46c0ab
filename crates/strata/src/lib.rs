//! Strata - collision-free vertical stacking of timeline segments.
//!
//! Segments share a horizontal axis and may overlap in time. Strata assigns
//! each segment a top offset so that horizontally overlapping segments never
//! overlap vertically, while keeping the stack as compact as a single
//! greedy pass allows. Rendering is left to the caller: apply each returned
//! `top` to the matching element and size the container to
//! [`StackedLayout::total_height`].

pub mod config;
pub mod layout;

mod error;

pub use strata_core::{geometry, segment};

pub use error::StrataError;
pub use layout::{SegmentOrder, StackedLayout, StackedSegment};

use std::cmp::Ordering;

use log::{debug, info};

use config::AppConfig;
use segment::Segment;

/// Entry point for stacking segment sets with a fixed configuration.
///
/// A `Stacker` holds no state between calls; every call to
/// [`Stacker::stack`] is an independent pass.
///
/// # Examples
///
/// ```rust
/// use strata::{Stacker, segment::Segment};
///
/// let segments = [
///     Segment::new(0.0, 10.0, 20.0),
///     Segment::new(5.0, 15.0, 30.0),
/// ];
///
/// let stacker = Stacker::default();
/// let layout = stacker.stack(&segments).expect("Failed to stack");
///
/// assert_eq!(layout.top(0), Some(0.0));
/// assert_eq!(layout.top(1), Some(20.0));
/// assert_eq!(layout.total_height(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stacker {
    config: AppConfig,
}

impl Stacker {
    /// Create a new stacker with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including the segment ordering
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this stacker was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Stack segments using the configured [`SegmentOrder`].
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidSegment` if a segment has a non-finite
    /// value, an empty extent, or a non-positive height.
    pub fn stack(&self, segments: &[Segment]) -> Result<StackedLayout, StrataError> {
        let order = self.config.layout().order();
        info!(segments = segments.len(), order:? = order; "Stacking segments");

        let layout = layout::stack(segments, order)?;
        Self::log_result(&layout);

        Ok(layout)
    }

    /// Stack segments ordered by a caller-supplied comparator.
    ///
    /// The configured ordering is ignored. Sorting is stable.
    ///
    /// # Errors
    ///
    /// Same as [`Stacker::stack`].
    pub fn stack_by<F>(&self, segments: &[Segment], compare: F) -> Result<StackedLayout, StrataError>
    where
        F: FnMut(&Segment, &Segment) -> Ordering,
    {
        info!(segments = segments.len(); "Stacking segments with custom order");

        let layout = layout::stack_by(segments, compare)?;
        Self::log_result(&layout);

        Ok(layout)
    }

    fn log_result(layout: &StackedLayout) {
        info!(
            total_height = layout.total_height(),
            levels = layout.level_count();
            "Segments stacked"
        );
        debug!(tops:? = layout.tops(); "Stacked offsets");
    }
}
