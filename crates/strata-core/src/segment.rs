//! Segments: horizontal spans placed on a shared timeline axis.
//!
//! A [`Segment`] carries the inputs of a stacking pass: its horizontal
//! extent (`left`..`right`) and its `height`. Where it ends up vertically
//! is not stored here; the layout engine returns offsets separately so a
//! segment set can be stacked any number of times without being mutated.

use std::fmt;

use thiserror::Error;

use crate::geometry::Bounds;

/// One horizontal visual span to be stacked.
///
/// # Examples
///
/// ```
/// # use strata_core::segment::Segment;
/// let meeting = Segment::new(0.0, 10.0, 20.0);
/// let lunch = Segment::new(5.0, 15.0, 30.0);
/// let evening = Segment::new(10.0, 20.0, 20.0);
///
/// assert!(meeting.collides_with(&lunch));
/// assert!(!meeting.collides_with(&evening)); // touching is not colliding
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    left: f32,
    right: f32,
    height: f32,
}

impl Segment {
    /// Creates a segment spanning `left..right` with the given height.
    ///
    /// No validation happens here. Layout entry points call
    /// [`Segment::validate`] on every segment before stacking.
    pub fn new(left: f32, right: f32, height: f32) -> Self {
        Self {
            left,
            right,
            height,
        }
    }

    /// Returns the left edge on the timeline axis
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Returns the right edge on the timeline axis
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Returns the horizontal width (`right - left`)
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the fixed vertical size of the segment
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns `true` if the horizontal extents of both segments overlap.
    ///
    /// Extents are half-open, so segments that merely touch
    /// (`a.right == b.left`) do not collide. The relation is symmetric.
    pub fn collides_with(&self, other: &Segment) -> bool {
        collide(self, other)
    }

    /// Returns the rectangle this segment occupies when placed at `top`.
    pub fn bounds_at(&self, top: f32) -> Bounds {
        Bounds::new(self.left, top, self.right, top + self.height)
    }

    /// Checks the constraints the layout engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`SegmentConstraint`]:
    /// non-finite coordinates are reported before an empty extent,
    /// which is reported before a non-positive height.
    pub fn validate(&self) -> Result<(), SegmentConstraint> {
        if !(self.left.is_finite() && self.right.is_finite() && self.height.is_finite()) {
            return Err(SegmentConstraint::NonFiniteValue);
        }
        if self.left >= self.right {
            return Err(SegmentConstraint::EmptyExtent);
        }
        if self.height <= 0.0 {
            return Err(SegmentConstraint::NonPositiveHeight);
        }
        Ok(())
    }
}

/// Collision predicate between two segments.
///
/// `collide(a, b) := a.left < b.right && a.right > b.left`
pub fn collide(a: &Segment, b: &Segment) -> bool {
    a.left < b.right && a.right > b.left
}

/// A constraint a [`Segment`] must satisfy before it can be stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentConstraint {
    /// `left`, `right` and `height` must all be finite numbers.
    NonFiniteValue,
    /// `left` must be strictly less than `right`.
    EmptyExtent,
    /// `height` must be strictly positive.
    NonPositiveHeight,
}

impl SegmentConstraint {
    /// Short human-readable hint on how to fix the input.
    pub fn help(self) -> &'static str {
        match self {
            Self::NonFiniteValue => "use finite numbers for left, right and height",
            Self::EmptyExtent => "make sure left is strictly less than right",
            Self::NonPositiveHeight => "give the segment a height greater than zero",
        }
    }
}

impl fmt::Display for SegmentConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NonFiniteValue => "coordinates and height must be finite",
            Self::EmptyExtent => "left must be less than right",
            Self::NonPositiveHeight => "height must be positive",
        };
        write!(f, "{s}")
    }
}

/// A segment rejected at the layout boundary.
///
/// `index` is the position of the offending segment in the caller's input,
/// before any sorting took place.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid segment #{index} (left={left}, right={right}, height={height}): {constraint}")]
pub struct InvalidSegment {
    index: usize,
    left: f32,
    right: f32,
    height: f32,
    constraint: SegmentConstraint,
}

impl InvalidSegment {
    /// Creates an error for the segment at `index` violating `constraint`.
    pub fn new(index: usize, segment: &Segment, constraint: SegmentConstraint) -> Self {
        Self {
            index,
            left: segment.left,
            right: segment.right,
            height: segment.height,
            constraint,
        }
    }

    /// Returns the input position of the offending segment
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the violated constraint
    pub fn constraint(&self) -> SegmentConstraint {
        self.constraint
    }
}

/// Validates every segment, reporting the first offender by input index.
///
/// # Errors
///
/// Returns [`InvalidSegment`] for the first segment that fails
/// [`Segment::validate`].
pub fn validate_all(segments: &[Segment]) -> Result<(), InvalidSegment> {
    segments.iter().enumerate().try_for_each(|(index, segment)| {
        segment
            .validate()
            .map_err(|constraint| InvalidSegment::new(index, segment, constraint))
    })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_overlapping_segments_collide() {
        let a = Segment::new(0.0, 10.0, 20.0);
        let b = Segment::new(5.0, 15.0, 30.0);

        assert!(collide(&a, &b));
        assert!(collide(&b, &a));
    }

    #[test]
    fn test_touching_segments_do_not_collide() {
        let a = Segment::new(0.0, 10.0, 20.0);
        let b = Segment::new(10.0, 20.0, 20.0);

        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));
    }

    #[test]
    fn test_contained_segment_collides() {
        let outer = Segment::new(0.0, 100.0, 10.0);
        let inner = Segment::new(40.0, 60.0, 10.0);

        assert!(outer.collides_with(&inner));
        assert!(inner.collides_with(&outer));
    }

    #[test]
    fn test_disjoint_segments_do_not_collide() {
        let a = Segment::new(0.0, 10.0, 20.0);
        let b = Segment::new(20.0, 30.0, 20.0);

        assert!(!a.collides_with(&b));
    }

    #[test]
    fn test_bounds_at_top() {
        let segment = Segment::new(5.0, 15.0, 30.0);
        let bounds = segment.bounds_at(20.0);

        assert_approx_eq!(f32, bounds.min_x(), 5.0);
        assert_approx_eq!(f32, bounds.max_x(), 15.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_y(), 50.0);
    }

    #[test]
    fn test_validate_accepts_well_formed_segment() {
        assert_eq!(Segment::new(-5.0, 5.0, 0.5).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        assert_eq!(
            Segment::new(10.0, 10.0, 20.0).validate(),
            Err(SegmentConstraint::EmptyExtent)
        );
    }

    #[test]
    fn test_validate_rejects_inverted_extent() {
        assert_eq!(
            Segment::new(10.0, 5.0, 20.0).validate(),
            Err(SegmentConstraint::EmptyExtent)
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_height() {
        assert_eq!(
            Segment::new(0.0, 5.0, 0.0).validate(),
            Err(SegmentConstraint::NonPositiveHeight)
        );
        assert_eq!(
            Segment::new(0.0, 5.0, -1.0).validate(),
            Err(SegmentConstraint::NonPositiveHeight)
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        for segment in [
            Segment::new(f32::NAN, 5.0, 1.0),
            Segment::new(0.0, f32::INFINITY, 1.0),
            Segment::new(0.0, 5.0, f32::NAN),
        ] {
            assert_eq!(segment.validate(), Err(SegmentConstraint::NonFiniteValue));
        }
    }

    #[test]
    fn test_validate_all_reports_first_offender() {
        let segments = [
            Segment::new(0.0, 10.0, 20.0),
            Segment::new(5.0, 15.0, -3.0),
            Segment::new(9.0, 1.0, 20.0),
        ];

        let err = validate_all(&segments).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.constraint(), SegmentConstraint::NonPositiveHeight);
        assert!(err.to_string().contains("#1"));
        assert!(err.to_string().contains("height must be positive"));
    }

    #[test]
    fn test_validate_all_empty_is_ok() {
        assert!(validate_all(&[]).is_ok());
    }
}
