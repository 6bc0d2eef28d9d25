//! Stable top-down merge sort.
//!
//! The output is a new `Vec`; the input slice is left untouched. Ties are
//! resolved in favour of the left run, which is what keeps equal elements in
//! their input order.

use std::cmp::Ordering;

/// Sort `items` by `compare`, preserving the relative order of equal elements.
///
/// Runs in O(n log n) comparisons. Each element is cloned once at the leaves
/// and moved through the merges after that.
pub fn stable_sort<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_run(items, &mut compare)
}

fn sort_run<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_run(&items[..mid], compare);
    let right = sort_run(&items[mid..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
