//! Level (lane) assignment for sorted segments.
//!
//! Each segment goes to the shallowest level whose members it does not
//! collide with. While scanning, every colliding member of a skipped level
//! is recorded in the segment's above set. Once the segment is placed,
//! deeper levels are scanned once more: segments placed there earlier may
//! overlap the newcomer without having been compared to it, and they must
//! clear it as well.
//!
//! Every above edge points from a deeper level to a strictly shallower
//! one, which keeps the above relation acyclic.

use log::trace;

use strata_core::segment::Segment;

/// Outcome of assigning a sorted sequence of segments to levels.
///
/// All indices are positions in the sorted slice passed to
/// [`assign_levels`].
#[derive(Debug, Default)]
pub(super) struct LevelAssignment {
    above: Vec<Vec<usize>>,
    home: Vec<usize>,
    level_count: usize,
}

impl LevelAssignment {
    /// Positions of the segments that the segment at `position` must clear.
    pub(super) fn above(&self, position: usize) -> &[usize] {
        &self.above[position]
    }

    /// Level the segment at `position` was placed on.
    pub(super) fn level_of(&self, position: usize) -> usize {
        self.home[position]
    }

    /// Number of levels created during the pass.
    pub(super) fn level_count(&self) -> usize {
        self.level_count
    }

    /// Number of segments that were assigned.
    pub(super) fn len(&self) -> usize {
        self.home.len()
    }
}

/// Assigns every segment in `segments`, in order, to a level.
///
/// The result only depends on the order of `segments`; callers must sort
/// deterministically beforehand to get reproducible layouts.
pub(super) fn assign_levels(segments: &[Segment]) -> LevelAssignment {
    let mut levels: Vec<Vec<usize>> = Vec::new();
    let mut above: Vec<Vec<usize>> = Vec::with_capacity(segments.len());
    let mut home = Vec::with_capacity(segments.len());

    for (position, segment) in segments.iter().enumerate() {
        let mut clears = Vec::new();

        // Find the first level without collisions
        let mut level = 0;
        while let Some(members) = levels.get(level) {
            let collisions_before = clears.len();
            clears.extend(
                members
                    .iter()
                    .copied()
                    .filter(|&placed| segment.collides_with(&segments[placed])),
            );
            if clears.len() == collisions_before {
                break;
            }
            level += 1;
        }

        match levels.get_mut(level) {
            Some(members) => members.push(position),
            None => levels.push(vec![position]),
        }
        trace!(position = position, level = level, above:? = clears; "Segment placed");
        above.push(clears);
        home.push(level);

        // Deeper segments placed earlier may still overlap this one
        for members in &levels[level + 1..] {
            for &below in members {
                if segment.collides_with(&segments[below]) {
                    above[below].push(position);
                }
            }
        }
    }

    LevelAssignment {
        above,
        home,
        level_count: levels.len(),
    }
}
