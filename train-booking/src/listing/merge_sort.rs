//! Stable merge sort.
//!
//! Listings are presented in an order that callers rely on being preserved
//! among equal keys (e.g. catalogue order within the same departure time),
//! so the sort used here must be stable. The merge is bottom-up: adjacent
//! runs are merged pairwise until one run remains, with no recursion.

use std::cmp::Ordering;

/// Sort `items` by the key extracted with `key`, preserving the relative
/// order of items whose keys compare equal.
///
/// # Examples
///
/// ```
/// use train_booking::listing::stable_sort_by_key;
///
/// let trains = vec![("T2", 10), ("T1", 9), ("T3", 10), ("T4", 9)];
/// let sorted = stable_sort_by_key(trains, |(_, dep)| *dep);
/// assert_eq!(sorted, vec![("T1", 9), ("T4", 9), ("T2", 10), ("T3", 10)]);
/// ```
pub fn stable_sort_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    stable_sort_by(items, |a, b| key(a).cmp(&key(b)))
}

/// Sort `items` with a three-way comparison, preserving the relative order
/// of items that compare `Equal`.
pub fn stable_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut runs: Vec<Vec<T>> = items.into_iter().map(|item| vec![item]).collect();

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pending = runs.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(merge(left, right, &mut compare)),
                None => merged.push(left),
            }
        }
        runs = merged;
    }

    runs.pop().unwrap_or_default()
}

/// Merge two sorted runs, taking from `left` whenever the fronts compare
/// equal.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }

    out.extend(left);
    out.extend(right);
    out
}
