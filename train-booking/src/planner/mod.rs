//! Route planning over a route graph snapshot.
//!
//! Two questions are answered here: the cheapest way between two stations
//! (Dijkstra) and the way with the fewest transfers (breadth-first search).
//! All searches are read-only over a `RouteGraph` and hold no shared state,
//! so any number may run in parallel against the same snapshot.

mod dijkstra;
mod query;
mod transfers;

pub use dijkstra::{Distance, Predecessors, ShortestPaths, reconstruct_path, shortest_paths};
pub use query::{PlanError, RouteAnswer, RouteQuery, Strategy, plan_route};
pub use transfers::{Transfers, fewest_train_changes, fewest_transfers};
