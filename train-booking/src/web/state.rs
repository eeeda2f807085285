//! Application state for the web layer.

use std::sync::Arc;

use crate::admission::SharedAdmissionQueue;
use crate::domain::TrainListing;
use crate::graph::{RouteGraph, SharedRouteGraph};

/// Shared application state.
///
/// Contains everything the handlers need. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Route network, copy-on-write
    pub graph: SharedRouteGraph,

    /// Pending booking requests
    pub admissions: SharedAdmissionQueue,

    /// Train catalogue snapshot supplied at startup
    pub catalogue: Arc<Vec<TrainListing>>,
}

impl AppState {
    /// Create a new app state with an empty admission queue.
    pub fn new(graph: RouteGraph, catalogue: Vec<TrainListing>) -> Self {
        Self {
            graph: SharedRouteGraph::new(graph),
            admissions: SharedAdmissionQueue::new(),
            catalogue: Arc::new(catalogue),
        }
    }
}
