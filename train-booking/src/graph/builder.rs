//! Fluent construction of route graphs from raw route tuples.

use tracing::warn;

use super::route_graph::{GraphError, RouteGraph};
use crate::domain::{Station, TrainId};

/// A route as supplied by the catalogue owner, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRoute {
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub train: String,
}

/// Error raised when a raw route cannot be turned into a graph edge.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteInputError {
    #[error(transparent)]
    Station(#[from] crate::domain::InvalidStation),

    #[error(transparent)]
    Train(#[from] crate::domain::InvalidTrainId),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl RouteGraph {
    /// Validate and add a raw route.
    pub fn add_raw_route(&mut self, route: &RawRoute) -> Result<(), RouteInputError> {
        let origin = Station::parse(&route.origin)?;
        let destination = Station::parse(&route.destination)?;
        let train = TrainId::new(route.train.clone())?;
        self.add_route(origin, destination, route.cost, train)?;
        Ok(())
    }

    /// Build a graph from an ordered list of routes, stopping at the first
    /// invalid one.
    pub fn from_routes<'a, I>(routes: I) -> Result<Self, RouteInputError>
    where
        I: IntoIterator<Item = &'a RawRoute>,
    {
        let mut graph = RouteGraph::new();
        for route in routes {
            graph.add_raw_route(route)?;
        }
        Ok(graph)
    }
}

/// Builder for creating route graphs.
///
/// Provides a fluent API for adding routes. Invalid routes are logged and
/// skipped.
#[derive(Debug, Default)]
pub struct RouteGraphBuilder {
    inner: RouteGraph,
}

impl RouteGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    pub fn route(mut self, origin: &str, destination: &str, cost: f64, train: &str) -> Self {
        let raw = RawRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost,
            train: train.to_string(),
        };
        if let Err(e) = self.inner.add_raw_route(&raw) {
            warn!(error = %e, "skipping invalid route");
        }
        self
    }

    /// Register a station with no routes.
    pub fn station(mut self, name: &str) -> Self {
        match Station::parse(name) {
            Ok(station) => self.inner.add_station(station),
            Err(e) => warn!(error = %e, "skipping invalid station"),
        }
        self
    }

    /// Build the route graph.
    pub fn build(self) -> RouteGraph {
        self.inner
    }
}

/// The three-city demonstration network.
pub fn sample_network() -> RouteGraph {
    RouteGraphBuilder::new()
        .route("City1", "City2", 3.0, "T101")
        .route("City1", "City3", 5.0, "T102")
        .route("City2", "City3", 2.0, "T103")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn raw(origin: &str, destination: &str, cost: f64, train: &str) -> RawRoute {
        RawRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost,
            train: train.to_string(),
        }
    }

    #[test]
    fn builder() {
        let graph = RouteGraphBuilder::new()
            .route("A", "B", 1.0, "T1")
            .route("B", "C", 2.0, "T2")
            .station("D")
            .build();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.station_count(), 4);
        assert!(graph.contains(&station("D")));
    }

    #[test]
    fn builder_skips_invalid_routes() {
        let graph = RouteGraphBuilder::new()
            .route("", "B", 1.0, "T1") // blank station
            .route("A", "B", 1.0, "") // empty train id
            .route("A", "B", -1.0, "T1") // negative cost
            .route("A", "B", 1.0, "T1") // valid
            .build();

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn from_routes_stops_at_first_error() {
        let routes = vec![raw("A", "B", 1.0, "T1"), raw("B", "C", -2.0, "T2")];
        let err = RouteGraph::from_routes(&routes).unwrap_err();
        assert!(matches!(
            err,
            RouteInputError::Graph(GraphError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn from_routes_reports_bad_station() {
        let routes = vec![raw("  ", "B", 1.0, "T1")];
        let err = RouteGraph::from_routes(&routes).unwrap_err();
        assert!(matches!(err, RouteInputError::Station(_)));
    }

    #[test]
    fn sample_network_shape() {
        let graph = sample_network();

        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&station("City1")).len(), 2);
        assert_eq!(graph.neighbors(&station("City3")).len(), 2);
    }
}
