//! Segment stacking.
//!
//! A stacking pass runs in four steps:
//!
//! 1. Every segment is validated; the first malformed one aborts the pass.
//! 2. Segments are stable-sorted by the requested ordering.
//! 3. [`levels`] places each sorted segment on the shallowest level it fits
//!    and records which segments it must clear.
//! 4. [`offsets`] turns those relations into top offsets and a total height.
//!
//! The result is reported in input order, so callers can zip it with
//! whatever visual elements the segments came from.

mod levels;
mod offsets;
mod order;

pub use order::SegmentOrder;

use std::cmp::Ordering;

use log::{debug, trace};

use strata_core::{
    geometry::{Bounds, Point, Size},
    segment::{Segment, validate_all},
};

use crate::error::StrataError;

/// Stacks `segments` using one of the built-in orderings.
///
/// # Errors
///
/// Returns [`StrataError::InvalidSegment`] if any segment is malformed.
pub fn stack(segments: &[Segment], order: SegmentOrder) -> Result<StackedLayout, StrataError> {
    stack_by(segments, |a, b| order.compare(a, b))
}

/// Stacks `segments` after stable-sorting them with `compare`.
///
/// Segments that compare equal keep their relative input order.
///
/// # Errors
///
/// Returns [`StrataError::InvalidSegment`] if any segment is malformed, and
/// [`StrataError::Layout`] if the offset computation hits an internal
/// inconsistency.
///
/// # Examples
///
/// ```
/// # use strata::{layout, segment::Segment};
/// let segments = [Segment::new(0.0, 10.0, 20.0), Segment::new(5.0, 15.0, 30.0)];
///
/// // Later starts first
/// let stacked = layout::stack_by(&segments, |a, b| b.left().total_cmp(&a.left())).unwrap();
/// assert_eq!(stacked.top(1), Some(0.0));
/// assert_eq!(stacked.top(0), Some(30.0));
/// ```
pub fn stack_by<F>(segments: &[Segment], mut compare: F) -> Result<StackedLayout, StrataError>
where
    F: FnMut(&Segment, &Segment) -> Ordering,
{
    validate_all(segments)?;

    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by(|&a, &b| compare(&segments[a], &segments[b]));
    trace!(order:? = order; "Segments sorted");

    let sorted: Vec<Segment> = order.iter().map(|&index| segments[index]).collect();

    let assignment = levels::assign_levels(&sorted);
    debug!(
        segments = sorted.len(),
        levels = assignment.level_count();
        "Levels assigned"
    );

    let offsets = offsets::compute_offsets(&sorted, &assignment)?;
    debug!(total_height = offsets.total_height(); "Offsets computed");

    let mut tops = vec![0.0; segments.len()];
    for (position, &index) in order.iter().enumerate() {
        tops[index] = offsets.top(position);
    }

    Ok(StackedLayout {
        segments: segments.to_vec(),
        tops,
        total_height: offsets.total_height(),
        level_count: assignment.level_count(),
    })
}

/// Result of a stacking pass, indexed by input position.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedLayout {
    segments: Vec<Segment>,
    tops: Vec<f32>,
    total_height: f32,
    level_count: usize,
}

impl StackedLayout {
    /// Height the container must have to fit every segment.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Top offset of the segment at input `index`, if it exists.
    pub fn top(&self, index: usize) -> Option<f32> {
        self.tops.get(index).copied()
    }

    /// All top offsets in input order.
    pub fn tops(&self) -> &[f32] {
        &self.tops
    }

    /// Number of levels the pass needed.
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Number of stacked segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segments were stacked
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the stacked segments in input order.
    pub fn iter(&self) -> impl Iterator<Item = StackedSegment> + '_ {
        self.segments
            .iter()
            .zip(&self.tops)
            .enumerate()
            .map(|(index, (&segment, &top))| StackedSegment {
                index,
                segment,
                top,
            })
    }
}

/// A segment together with its computed top offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedSegment {
    index: usize,
    segment: Segment,
    top: f32,
}

impl StackedSegment {
    /// Position of the segment in the input slice
    pub fn index(&self) -> usize {
        self.index
    }

    /// The segment as it was given
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Distance from the container's top edge
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Distance from the container's top edge to the segment's bottom edge
    pub fn bottom(&self) -> f32 {
        self.top + self.segment.height()
    }

    /// Top-left corner in container coordinates
    pub fn position(&self) -> Point {
        Point::new(self.segment.left(), self.top)
    }

    /// Width and height of the placed segment
    pub fn size(&self) -> Size {
        Size::new(self.segment.width(), self.segment.height())
    }

    /// Rectangle the placed segment occupies
    pub fn bounds(&self) -> Bounds {
        self.segment.bounds_at(self.top)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use strata_core::segment::SegmentConstraint;

    fn tops(layout: &StackedLayout) -> Vec<f32> {
        layout.iter().map(|placed| placed.top()).collect()
    }

    #[test]
    fn test_two_overlapping_segments() {
        let segments = [Segment::new(0.0, 10.0, 20.0), Segment::new(5.0, 15.0, 30.0)];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();

        assert_eq!(tops(&layout), vec![0.0, 20.0]);
        assert_approx_eq!(f32, layout.total_height(), 50.0);
        assert_eq!(layout.level_count(), 2);
    }

    #[test]
    fn test_disjoint_segments_share_top_row() {
        let segments = [
            Segment::new(0.0, 10.0, 12.0),
            Segment::new(20.0, 30.0, 31.0),
            Segment::new(40.0, 50.0, 7.0),
        ];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();

        assert_eq!(tops(&layout), vec![0.0, 0.0, 0.0]);
        assert_approx_eq!(f32, layout.total_height(), 31.0);
        assert_eq!(layout.level_count(), 1);
    }

    #[test]
    fn test_chain_does_not_over_constrain_touching_segments() {
        let segments = [
            Segment::new(0.0, 10.0, 20.0),
            Segment::new(5.0, 15.0, 20.0),
            Segment::new(10.0, 20.0, 20.0),
        ];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();

        assert_eq!(tops(&layout), vec![0.0, 20.0, 0.0]);
        assert_approx_eq!(f32, layout.total_height(), 40.0);
    }

    #[test]
    fn test_downward_propagation_clears_later_segment() {
        // The middle segment is pushed to level 1 by the first one, and the
        // tall third segment lands on level 0 underneath it.
        let segments = [
            Segment::new(0.0, 10.0, 10.0),
            Segment::new(5.0, 20.0, 10.0),
            Segment::new(15.0, 30.0, 40.0),
        ];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();

        assert_eq!(tops(&layout), vec![0.0, 40.0, 0.0]);
        assert_approx_eq!(f32, layout.total_height(), 50.0);
    }

    #[test]
    fn test_results_are_reported_in_input_order() {
        let segments = [Segment::new(5.0, 15.0, 30.0), Segment::new(0.0, 10.0, 20.0)];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();

        // The second input sorts first and takes the top row
        assert_eq!(layout.top(1), Some(0.0));
        assert_eq!(layout.top(0), Some(20.0));
        assert_eq!(layout.top(2), None);
    }

    #[test]
    fn test_input_order_keeps_given_sequence() {
        let segments = [Segment::new(5.0, 15.0, 30.0), Segment::new(0.0, 10.0, 20.0)];
        let layout = stack(&segments, SegmentOrder::Input).unwrap();

        assert_eq!(tops(&layout), vec![0.0, 30.0]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let segments = [
            Segment::new(0.0, 10.0, 5.0),
            Segment::new(0.0, 10.0, 7.0),
            Segment::new(0.0, 10.0, 9.0),
        ];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();

        assert_eq!(tops(&layout), vec![0.0, 5.0, 12.0]);
        assert_approx_eq!(f32, layout.total_height(), 21.0);
    }

    #[test]
    fn test_empty_input() {
        let layout = stack(&[], SegmentOrder::Chronological).unwrap();

        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert_eq!(layout.level_count(), 0);
        assert_approx_eq!(f32, layout.total_height(), 0.0);
    }

    #[test]
    fn test_invalid_segment_is_reported_by_input_index() {
        let segments = [
            Segment::new(0.0, 10.0, 20.0),
            Segment::new(0.0, 10.0, 20.0),
            Segment::new(15.0, 15.0, 20.0),
        ];
        let err = stack(&segments, SegmentOrder::Chronological).unwrap_err();

        match err {
            StrataError::InvalidSegment(invalid) => {
                assert_eq!(invalid.index(), 2);
                assert_eq!(invalid.constraint(), SegmentConstraint::EmptyExtent);
            }
            other => panic!("Expected InvalidSegment, got {other:?}"),
        }
    }

    #[test]
    fn test_stacked_segment_geometry() {
        let segments = [Segment::new(0.0, 10.0, 20.0), Segment::new(5.0, 15.0, 30.0)];
        let layout = stack(&segments, SegmentOrder::Chronological).unwrap();
        let second = layout.iter().nth(1).unwrap();

        assert_eq!(second.index(), 1);
        assert_eq!(second.segment(), &segments[1]);
        assert_approx_eq!(f32, second.bottom(), 50.0);
        assert_eq!(second.position(), Point::new(5.0, 20.0));
        assert_eq!(second.size(), Size::new(10.0, 30.0));

        let bounds = second.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 5.0);
        assert_approx_eq!(f32, bounds.max_x(), 15.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_y(), 50.0);
    }
}
