//! Single-source shortest paths over a route graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::domain::Station;
use crate::graph::RouteGraph;

/// Total cost to reach a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    /// No path exists. Distinct from a zero-cost path.
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite cost, if any.
    pub fn finite(&self) -> Option<f64> {
        match self {
            Distance::Finite(cost) => Some(*cost),
            Distance::Unreachable => None,
        }
    }
}

/// Predecessor of each reached station on one of its shortest paths.
///
/// The source maps to `None`.
pub type Predecessors = HashMap<Station, Option<Station>>;

/// Result of a single-source shortest path search.
///
/// Holds the minimum cost and one shortest-path predecessor for every
/// station reachable from the source.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    distances: HashMap<Station, f64>,
    predecessors: Predecessors,
}

impl ShortestPaths {
    /// Minimum total cost from the source to `target`.
    pub fn distance(&self, target: &Station) -> Distance {
        self.distances
            .get(target)
            .map_or(Distance::Unreachable, |cost| Distance::Finite(*cost))
    }

    /// One minimum-cost path from the source to `target`, source first.
    ///
    /// Returns `None` if `target` is unreachable.
    pub fn path_to(&self, target: &Station) -> Option<Vec<Station>> {
        reconstruct_path(&self.predecessors, target)
    }

    /// Every reachable station with its distance, in no particular order.
    pub fn reachable(&self) -> impl Iterator<Item = (&Station, f64)> {
        self.distances.iter().map(|(station, cost)| (station, *cost))
    }
}

/// Run Dijkstra's algorithm from `source`.
///
/// Edge costs are non-negative by construction of [`RouteGraph`], which is
/// what makes the greedy extraction order correct. The source always reaches
/// itself at cost zero, even when the graph does not know it. Path costs
/// that overflow are reported as `f64::MAX`.
pub fn shortest_paths(graph: &RouteGraph, source: &Station) -> ShortestPaths {
    let mut distances: HashMap<Station, f64> = HashMap::new();
    let mut predecessors: Predecessors = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source.clone(), 0.0);
    predecessors.insert(source.clone(), None);
    queue.push(QueueEntry::new(source.clone(), 0.0));

    let mut settled = 0usize;

    while let Some(entry) = queue.pop() {
        let best = distances
            .get(&entry.station)
            .copied()
            .unwrap_or(f64::INFINITY);
        // Stale entry superseded by a cheaper relaxation
        if entry.cost.0 > best {
            continue;
        }
        settled += 1;

        for edge in graph.neighbors(&entry.station) {
            // Saturates at f64::MAX so a reachable station stays finite
            let next_cost = (best + edge.cost).min(f64::MAX);
            let improves = match distances.get(&edge.destination) {
                None => true,
                Some(current) => next_cost < *current,
            };
            if improves {
                distances.insert(edge.destination.clone(), next_cost);
                predecessors.insert(edge.destination.clone(), Some(entry.station.clone()));
                queue.push(QueueEntry::new(edge.destination.clone(), next_cost));
            }
        }
    }

    trace!(source = %source, settled, "shortest paths computed");

    ShortestPaths {
        distances,
        predecessors,
    }
}

/// Walk predecessors back from `target` and return the path source-first.
///
/// Returns `None` if `target` has no predecessor entry, or if the map does
/// not lead back to a source (a cycle or a dangling link).
pub fn reconstruct_path(predecessors: &Predecessors, target: &Station) -> Option<Vec<Station>> {
    let mut path = Vec::new();
    let mut current = target;

    loop {
        // Each station can appear at most once on a valid path
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(current.clone());
        match predecessors.get(current)? {
            Some(previous) => current = previous,
            None => break,
        }
    }

    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    station: Station,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(station: Station, cost: f64) -> Self {
        Self {
            station,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
