//! Route queries: choose a strategy, run it, and shape the answer.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::dijkstra::{Distance, shortest_paths};
use super::transfers::{Transfers, fewest_train_changes, fewest_transfers};
use crate::domain::Station;
use crate::graph::RouteGraph;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Strategy name not recognised
    #[error("unknown route strategy: {0}")]
    UnknownStrategy(String),
}

/// How a route is optimised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Minimum total cost.
    #[default]
    Shortest,
    /// Minimum number of hops.
    FewestTransfers,
    /// Minimum number of changes between distinct trains.
    FewestTrainChanges,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Shortest => "shortest",
            Strategy::FewestTransfers => "fewest_transfers",
            Strategy::FewestTrainChanges => "fewest_train_changes",
        }
    }
}

impl FromStr for Strategy {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortest" => Ok(Strategy::Shortest),
            "fewest_transfers" => Ok(Strategy::FewestTransfers),
            "fewest_train_changes" => Ok(Strategy::FewestTrainChanges),
            other => Err(PlanError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for a route between two stations.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub source: Station,
    pub destination: Station,
    pub strategy: Strategy,
}

impl RouteQuery {
    /// Create a new route query.
    pub fn new(source: Station, destination: Station, strategy: Strategy) -> Self {
        Self {
            source,
            destination,
            strategy,
        }
    }
}

/// Answer to a route query.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAnswer {
    /// Minimum-cost route. `path` is empty when `distance` is unreachable.
    Shortest { distance: Distance, path: Vec<Station> },
    /// Minimum transfer count under the requested strategy.
    FewestTransfers { min_changes: Transfers },
}

impl RouteAnswer {
    pub fn is_reachable(&self) -> bool {
        match self {
            RouteAnswer::Shortest { distance, .. } => distance.is_reachable(),
            RouteAnswer::FewestTransfers { min_changes } => min_changes.is_reachable(),
        }
    }
}

/// Answer a route query against a graph snapshot.
///
/// Unknown stations are not an error: they yield an unreachable answer,
/// except that a station always reaches itself.
pub fn plan_route(graph: &RouteGraph, query: &RouteQuery) -> RouteAnswer {
    let answer = match query.strategy {
        Strategy::Shortest => {
            let paths = shortest_paths(graph, &query.source);
            RouteAnswer::Shortest {
                distance: paths.distance(&query.destination),
                path: paths.path_to(&query.destination).unwrap_or_default(),
            }
        }
        Strategy::FewestTransfers => RouteAnswer::FewestTransfers {
            min_changes: fewest_transfers(graph, &query.source, &query.destination),
        },
        Strategy::FewestTrainChanges => RouteAnswer::FewestTransfers {
            min_changes: fewest_train_changes(graph, &query.source, &query.destination),
        },
    };

    debug!(
        source = %query.source,
        destination = %query.destination,
        strategy = %query.strategy,
        reachable = answer.is_reachable(),
        "route planned"
    );

    answer
}
