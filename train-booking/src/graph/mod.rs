//! Route network model.
//!
//! Stations are connected by bidirectional, train-tagged routes with a
//! non-negative cost. The graph is a multigraph: several trains between the
//! same pair of stations are kept as separate edges.

mod builder;
mod route_graph;
mod shared;

pub use builder::{RawRoute, RouteGraphBuilder, RouteInputError, sample_network};
pub use route_graph::{GraphError, RouteEdge, RouteGraph};
pub use shared::SharedRouteGraph;
