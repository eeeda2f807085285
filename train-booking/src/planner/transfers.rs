//! Fewest-transfer searches.
//!
//! [`fewest_transfers`] counts hops: the number of edges on the path with
//! fewest edges, ignoring cost. Each hop may mean boarding a different
//! train, so the hop count is an upper bound on train changes, not the exact
//! figure: riding one train through several stations still counts one hop
//! per station.
//!
//! [`fewest_train_changes`] tracks which train the traveller arrived on and
//! only counts a change when the next edge belongs to a different train.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::domain::{Station, TrainId};
use crate::graph::RouteGraph;

/// Outcome of a fewest-transfer search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfers {
    /// Minimum count found.
    Count(usize),
    /// Destination cannot be reached from the source.
    Unreachable,
}

impl Transfers {
    /// The count, or `-1` when unreachable.
    pub fn as_sentinel(&self) -> i64 {
        match self {
            Transfers::Count(n) => i64::try_from(*n).unwrap_or(i64::MAX),
            Transfers::Unreachable => -1,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Transfers::Count(_))
    }
}

impl Serialize for Transfers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_sentinel())
    }
}

/// Minimum number of edges between `source` and `destination`.
///
/// Breadth-first search; each station is enqueued at most once, so the
/// search is O(V + E). A station always reaches itself in zero hops.
pub fn fewest_transfers(graph: &RouteGraph, source: &Station, destination: &Station) -> Transfers {
    if source == destination {
        return Transfers::Count(0);
    }

    let mut visited: HashSet<&Station> = HashSet::new();
    let mut queue: VecDeque<(&Station, usize)> = VecDeque::new();

    visited.insert(source);
    queue.push_back((source, 0));

    while let Some((station, hops)) = queue.pop_front() {
        if station == destination {
            trace!(source = %source, destination = %destination, hops, "fewest hops found");
            return Transfers::Count(hops);
        }

        for edge in graph.neighbors(station) {
            if visited.insert(&edge.destination) {
                queue.push_back((&edge.destination, hops + 1));
            }
        }
    }

    trace!(
        source = %source,
        destination = %destination,
        visited = visited.len(),
        "destination unreachable"
    );
    Transfers::Unreachable
}

/// Search state: where the traveller is and which train they arrived on.
type RideState<'a> = (&'a Station, Option<&'a TrainId>);

/// Minimum number of changes between distinct trains.
///
/// Staying on the same train id across consecutive edges is free; boarding
/// a different train costs one. The result is trains boarded minus one, so
/// a direct train is zero changes. Uses 0-1 BFS over
/// (station, arriving train) states.
pub fn fewest_train_changes(
    graph: &RouteGraph,
    source: &Station,
    destination: &Station,
) -> Transfers {
    if source == destination {
        return Transfers::Count(0);
    }

    let mut boardings: HashMap<RideState<'_>, usize> = HashMap::new();
    let mut deque: VecDeque<(RideState<'_>, usize)> = VecDeque::new();

    boardings.insert((source, None), 0);
    deque.push_back(((source, None), 0));

    while let Some(((station, riding), boarded)) = deque.pop_front() {
        if boardings
            .get(&(station, riding))
            .is_some_and(|best| boarded > *best)
        {
            continue;
        }

        if station == destination {
            trace!(
                source = %source,
                destination = %destination,
                boarded,
                "fewest train changes found"
            );
            return Transfers::Count(boarded.saturating_sub(1));
        }

        for edge in graph.neighbors(station) {
            let same_train = riding == Some(&edge.train);
            let next_boarded = if same_train { boarded } else { boarded + 1 };
            let next = (&edge.destination, Some(&edge.train));

            let improved = match boardings.entry(next) {
                Entry::Occupied(mut best) if next_boarded < *best.get() => {
                    best.insert(next_boarded);
                    true
                }
                Entry::Occupied(_) => false,
                Entry::Vacant(slot) => {
                    slot.insert(next_boarded);
                    true
                }
            };

            if improved {
                if same_train {
                    deque.push_front((next, next_boarded));
                } else {
                    deque.push_back((next, next_boarded));
                }
            }
        }
    }

    Transfers::Unreachable
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::planner::dijkstra::{Distance, shortest_paths};
    use proptest::prelude::*;

    fn station(i: u8) -> Station {
        Station::parse(&format!("S{i}")).unwrap()
    }

    fn graph_from(edges: &[(u8, u8, u8)]) -> RouteGraph {
        let mut graph = RouteGraph::new();
        for (a, b, train) in edges {
            graph
                .add_route(
                    station(*a),
                    station(*b),
                    1.0,
                    TrainId::new(format!("T{train}")).unwrap(),
                )
                .unwrap();
        }
        graph
    }

    proptest! {
        /// With unit costs, hop count equals Dijkstra distance
        #[test]
        fn hops_match_unit_cost_dijkstra(
            edges in prop::collection::vec((0u8..10, 0u8..10, 0u8..3), 0..30),
            from in 0u8..10,
            to in 0u8..10,
        ) {
            let graph = graph_from(&edges);
            let hops = fewest_transfers(&graph, &station(from), &station(to));
            let dist = shortest_paths(&graph, &station(from)).distance(&station(to));

            match (hops, dist) {
                (Transfers::Count(n), Distance::Finite(d)) => prop_assert_eq!(n as f64, d),
                (Transfers::Unreachable, Distance::Unreachable) => {}
                (h, d) => prop_assert!(false, "hops {:?} disagree with distance {:?}", h, d),
            }
        }

        /// Train changes never exceed hops minus one, and reachability agrees
        #[test]
        fn changes_bounded_by_hops(
            edges in prop::collection::vec((0u8..10, 0u8..10, 0u8..3), 0..30),
            from in 0u8..10,
            to in 0u8..10,
        ) {
            let graph = graph_from(&edges);
            let hops = fewest_transfers(&graph, &station(from), &station(to));
            let changes = fewest_train_changes(&graph, &station(from), &station(to));

            prop_assert_eq!(hops.is_reachable(), changes.is_reachable());
            if let (Transfers::Count(h), Transfers::Count(c)) = (hops, changes) {
                prop_assert!(c <= h.saturating_sub(1));
            }
        }
    }
}
