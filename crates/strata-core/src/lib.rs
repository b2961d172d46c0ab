//! Strata Core Types and Definitions
//!
//! This crate provides the foundational types for the Strata segment
//! stacking engine. It includes:
//!
//! - **Segments**: Horizontal spans with a fixed height ([`segment::Segment`]),
//!   the collision predicate ([`segment::collide`]) and boundary validation
//!   ([`segment::InvalidSegment`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod geometry;
pub mod segment;
