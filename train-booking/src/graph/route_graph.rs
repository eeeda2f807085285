//! Route graph: an undirected, weighted multigraph of stations.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Station, TrainId};

/// Error raised when a graph mutation is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Edge cost is negative or not a finite number.
    #[error("invalid edge {origin} - {destination} (cost {cost}): {reason}")]
    InvalidEdge {
        origin: Station,
        destination: Station,
        cost: f64,
        reason: &'static str,
    },
}

/// Why `cost` cannot label an edge, if it cannot.
pub(crate) fn invalid_cost(cost: f64) -> Option<&'static str> {
    if cost.is_nan() {
        Some("cost must be a number")
    } else if cost.is_infinite() {
        Some("cost must be finite")
    } else if cost < 0.0 {
        Some("cost must not be negative")
    } else {
        None
    }
}

/// One direction of a route between two stations.
///
/// Every route is stored twice, once in each endpoint's adjacency list, with
/// identical cost and train id.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    /// Station reached by traversing this edge.
    pub destination: Station,
    /// Non-negative, finite traversal cost.
    pub cost: f64,
    /// Train serving this connection.
    pub train: TrainId,
}

/// Adjacency structure for route planning.
///
/// Parallel edges are kept: two trains between the same pair of stations are
/// distinct alternatives. Edges incident to a station are kept in insertion
/// order, which makes query results deterministic.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<Station, Vec<RouteEdge>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bidirectional route.
    ///
    /// Rejects negative and non-finite costs, leaving the graph unchanged.
    /// Adding the same route twice creates two parallel edges.
    pub fn add_route(
        &mut self,
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

        debug!(
            origin = %origin,
            destination = %destination,
            cost,
            train = %train,
            "adding route"
        );

        self.adjacency
            .entry(origin.clone())
            .or_default()
            .push(RouteEdge {
                destination: destination.clone(),
                cost,
                train: train.clone(),
            });
        self.adjacency
            .entry(destination)
            .or_default()
            .push(RouteEdge {
                destination: origin,
                cost,
                train,
            });
        self.edge_count += 1;

        Ok(())
    }

    /// Register a station without any routes.
    ///
    /// Has no effect if the station is already known.
    pub fn add_station(&mut self, station: Station) {
        self.adjacency.entry(station).or_default();
    }

    /// Edges leaving `station`, in insertion order.
    ///
    /// Unknown stations have no neighbours.
    pub fn neighbors(&self, station: &Station) -> &[RouteEdge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the station has at least one route or was registered.
    pub fn contains(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of routes added (each bidirectional route counts once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
