//! Copy-on-write sharing of a route graph between writers and queries.

use std::sync::{Arc, PoisonError, RwLock};

use super::route_graph::{GraphError, RouteGraph, invalid_cost};
use crate::domain::{Station, TrainId};

/// A route graph shared between request handlers.
///
/// Queries take a [`snapshot`](Self::snapshot) and run against it without
/// holding any lock. Mutations replace the current graph; a snapshot taken
/// before a mutation keeps seeing the graph as it was.
#[derive(Debug, Clone, Default)]
pub struct SharedRouteGraph {
    current: Arc<RwLock<Arc<RouteGraph>>>,
}

impl SharedRouteGraph {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// The graph as of the most recent completed mutation.
    pub fn snapshot(&self) -> Arc<RouteGraph> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Add a route, cloning the graph first if snapshots are outstanding.
    ///
    /// A rejected route neither takes the write lock nor clones the graph.
    pub fn add_route(
        &self,
        origin: Station,
        destination: Station,
        cost: f64,
        train: TrainId,
    ) -> Result<(), GraphError> {
        if let Some(reason) = invalid_cost(cost) {
            return Err(GraphError::InvalidEdge {
                origin,
                destination,
                cost,
                reason,
            });
        }
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut *guard).add_route(origin, destination, cost, train)
    }
}

impl From<RouteGraph> for SharedRouteGraph {
    fn from(graph: RouteGraph) -> Self {
        Self::new(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn train(s: &str) -> TrainId {
        TrainId::new(s.to_string()).unwrap()
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let shared = SharedRouteGraph::default();
        shared
            .add_route(station("A"), station("B"), 1.0, train("T1"))
            .unwrap();

        let before = shared.snapshot();
        shared
            .add_route(station("B"), station("C"), 1.0, train("T2"))
            .unwrap();
        let after = shared.snapshot();

        assert_eq!(before.edge_count(), 1);
        assert!(!before.contains(&station("C")));
        assert_eq!(after.edge_count(), 2);
        assert!(after.contains(&station("C")));
    }

    #[test]
    fn rejected_mutation_leaves_graph_unchanged() {
        let shared = SharedRouteGraph::new(RouteGraph::new());
        assert!(
            shared
                .add_route(station("A"), station("B"), -5.0, train("T1"))
                .is_err()
        );
        assert_eq!(shared.snapshot().station_count(), 0);
    }

    #[test]
    fn rejected_mutation_keeps_outstanding_snapshot_current() {
        let shared = SharedRouteGraph::default();
        shared
            .add_route(station("A"), station("B"), 1.0, train("T1"))
            .unwrap();

        let held = shared.snapshot();
        let err = shared
            .add_route(station("B"), station("C"), f64::NAN, train("T2"))
            .unwrap_err();

        assert!(matches!(err, GraphError::InvalidEdge { .. }));
        assert!(Arc::ptr_eq(&held, &shared.snapshot()));
    }

    #[test]
    fn concurrent_writers_lose_nothing() {
        let shared = SharedRouteGraph::default();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        shared
                            .add_route(
                                station(&format!("S{i}")),
                                station(&format!("S{i}-{j}")),
                                1.0,
                                train(&format!("T{i}")),
                            )
                            .unwrap();
                        // Readers interleave with writers
                        let _ = shared.snapshot().edge_count();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.snapshot().edge_count(), 200);
    }
}
