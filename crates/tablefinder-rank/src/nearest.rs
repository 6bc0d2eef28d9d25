//! Bounded k-nearest selection.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tablefinder_core::{Candidate, Coordinate};

use crate::geometry::squared_distance;

/// Heap entry ordered by squared distance, then input position, so the heap
/// top is always the farthest (and, among equals, the latest) candidate.
struct Entry<'a> {
    squared: f64,
    position: usize,
    candidate: &'a Candidate,
}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.squared
            .total_cmp(&other.squared)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}

/// Select the `k` candidates closest to `reference`.
///
/// Keeps a max-heap of at most `k` entries and evicts the farthest whenever it
/// overflows: O(n log k) time, O(k) space. Equidistant candidates are kept in
/// input order, so earlier ones win the last slot.
///
/// The result is ordered nearest first. `k == 0` yields an empty `Vec`;
/// `k >= candidates.len()` yields every candidate.
#[must_use]
pub fn k_nearest(candidates: &[Candidate], reference: Coordinate, k: usize) -> Vec<Candidate> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(k.min(candidates.len()).saturating_add(1));
    for (position, candidate) in candidates.iter().enumerate() {
        heap.push(Entry {
            squared: squared_distance(candidate.coordinate, reference),
            position,
            candidate,
        });
        if heap.len() > k {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|entry| entry.candidate.clone())
        .collect()
}
