//! Vertical offsets over the above relation.
//!
//! A segment's top is the largest extent (`top + height`) among the
//! segments it must clear, or zero if it clears nothing. Offsets are
//! resolved in post-order over the above graph, so every dependency is
//! cached before the segments that rely on it.

use log::trace;
use petgraph::{
    algo::is_cyclic_directed,
    graph::{DiGraph, NodeIndex},
    visit::{DfsPostOrder, VisitMap},
};

use strata_core::segment::Segment;

use super::levels::LevelAssignment;
use crate::error::StrataError;

/// Resolved offsets for a sorted segment sequence.
#[derive(Debug)]
pub(super) struct Offsets {
    tops: Vec<f32>,
    total_height: f32,
}

impl Offsets {
    /// Top offset of the segment at sorted `position`.
    pub(super) fn top(&self, position: usize) -> f32 {
        self.tops[position]
    }

    /// Largest extent over all segments, or zero when there are none.
    pub(super) fn total_height(&self) -> f32 {
        self.total_height
    }
}

/// Builds the above graph: an edge `a -> b` means `a` must sit below `b`.
///
/// Node weights are sorted positions, and node `i` holds position `i`.
fn above_graph(assignment: &LevelAssignment) -> DiGraph<usize, ()> {
    let mut graph = DiGraph::with_capacity(assignment.len(), assignment.len());
    for position in 0..assignment.len() {
        graph.add_node(position);
    }

    for position in 0..assignment.len() {
        for &other in assignment.above(position) {
            debug_assert!(
                assignment.level_of(other) < assignment.level_of(position),
                "above edge must point to a shallower level"
            );
            graph.add_edge(NodeIndex::new(position), NodeIndex::new(other), ());
        }
    }

    graph
}

/// Computes every segment's top offset and the total stacked height.
///
/// # Errors
///
/// Returns [`StrataError::Layout`] if a segment is reached before one of
/// the segments it must clear, which only happens if the above relation
/// is not a DAG.
pub(super) fn compute_offsets(
    segments: &[Segment],
    assignment: &LevelAssignment,
) -> Result<Offsets, StrataError> {
    let graph = above_graph(assignment);
    debug_assert!(!is_cyclic_directed(&graph), "above relation must be acyclic");

    let mut cache: Vec<Option<f32>> = vec![None; segments.len()];
    let mut dfs = DfsPostOrder::empty(&graph);

    for start in graph.node_indices() {
        if dfs.discovered.is_visited(&start) {
            continue;
        }
        dfs.move_to(start);

        while let Some(node) = dfs.next(&graph) {
            let position = graph[node];
            let top = graph
                .neighbors(node)
                .try_fold(0.0_f32, |top, dependency| -> Result<f32, StrataError> {
                    let other = graph[dependency];
                    let other_top = cache[other].ok_or_else(|| {
                        StrataError::Layout(format!(
                            "segment at position {other} was not resolved before segment at position {position}"
                        ))
                    })?;
                    Ok(top.max(other_top + segments[other].height()))
                })?;

            trace!(position = position, top = top; "Offset resolved");
            cache[position] = Some(top);
        }
    }

    let tops = cache
        .into_iter()
        .enumerate()
        .map(|(position, top)| {
            top.ok_or_else(|| {
                StrataError::Layout(format!("segment at position {position} has no offset"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_height = tops
        .iter()
        .zip(segments)
        .map(|(top, segment)| top + segment.height())
        .fold(0.0, f32::max);

    Ok(Offsets { tops, total_height })
}
