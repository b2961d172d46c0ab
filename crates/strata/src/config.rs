//! Configuration types for segment stacking.
//!
//! This module provides configuration structures that control how segments
//! are stacked. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Controls which [`SegmentOrder`] is applied before stacking.
//!
//! # Example
//!
//! ```
//! # use strata::{SegmentOrder, config::AppConfig};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().order(), SegmentOrder::Chronological);
//! ```

use serde::Deserialize;

use crate::layout::SegmentOrder;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    ///
    /// # Arguments
    ///
    /// * `layout` - Stacking settings.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Replaces the layout configuration (builder style).
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// Stacking configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// [`SegmentOrder`] applied before level assignment.
    #[serde(default)]
    order: SegmentOrder,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified ordering.
    pub fn new(order: SegmentOrder) -> Self {
        Self { order }
    }

    /// Returns the configured [`SegmentOrder`].
    pub fn order(&self) -> SegmentOrder {
        self.order
    }
}
