//! Connectivity-restricted flood fill over candidate cells

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::math::{BlockPos, Bounds};
use crate::world::WorldView;

use super::candidate::CandidateFilter;

/// Discover the cells of one structure by 6-connected breadth-first
/// search from the anchors, restricted to candidate cells inside
/// `bounds`.
///
/// Only cells reachable through an unbroken chain of candidate cells
/// are admitted, so two structures separated by even a single air gap
/// or foreign block are never merged. Every examined cell is marked
/// visited whether or not it is accepted, which bounds the walk by
/// the cell count of `bounds`.
///
/// The result is ordered (lexicographic by position) so downstream
/// classification is deterministic.
pub fn discover(
    world: &dyn WorldView,
    filter: &CandidateFilter<'_>,
    bounds: &Bounds,
    controller_pos: BlockPos,
    anchors: &[BlockPos],
) -> BTreeSet<BlockPos> {
    let mut result = BTreeSet::new();
    // Visited set keyed by packed coordinates; this is the scan hot path.
    let mut visited: HashSet<u64> = HashSet::new();
    let mut queue: VecDeque<BlockPos> = VecDeque::new();

    for &anchor in anchors.iter().chain(std::iter::once(&controller_pos)) {
        if visited.insert(anchor.packed()) {
            queue.push_back(anchor);
        }
    }

    if filter.is_candidate(&world.snapshot(controller_pos)) {
        result.insert(controller_pos);
    }

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            if !bounds.contains(next) {
                continue;
            }
            if !visited.insert(next.packed()) {
                continue;
            }
            if !filter.is_candidate(&world.snapshot(next)) {
                continue;
            }
            result.insert(next);
            queue.push_back(next);
        }
    }

    log::debug!(
        "flood fill found {} cells in {}x{}x{} bounds around {:?}",
        result.len(),
        bounds.span_x(),
        bounds.span_y(),
        bounds.span_z(),
        controller_pos
    );

    result
}
