//! Data transfer objects for web requests and responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::admission::BookingRequest;
use crate::domain::{Station, TrainListing};
use crate::planner::{RouteAnswer, Transfers};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin station
    pub source: String,

    /// Destination station
    pub destination: String,

    /// "shortest" (default), "fewest_transfers" or "fewest_train_changes"
    pub strategy: Option<String>,
}

/// Minimum-cost route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortestRouteResponse {
    /// Total cost, `null` when the destination is unreachable
    pub shortest_distance: Option<f64>,

    /// Stations from source to destination, empty when unreachable
    pub path: Vec<Station>,
}

/// Fewest-transfer route.
#[derive(Debug, Serialize)]
pub struct TransfersResponse {
    /// Minimum count, `-1` when the destination is unreachable
    pub min_train_changes: Transfers,
}

/// Either kind of route answer, serialized without a tag.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlanRouteResponse {
    Shortest(ShortestRouteResponse),
    Transfers(TransfersResponse),
}

impl From<RouteAnswer> for PlanRouteResponse {
    fn from(answer: RouteAnswer) -> Self {
        match answer {
            RouteAnswer::Shortest { distance, path } => {
                PlanRouteResponse::Shortest(ShortestRouteResponse {
                    shortest_distance: distance.finite(),
                    path,
                })
            }
            RouteAnswer::FewestTransfers { min_changes } => {
                PlanRouteResponse::Transfers(TransfersResponse {
                    min_train_changes: min_changes,
                })
            }
        }
    }
}

/// A user identifier as sent by clients: any JSON number or a string.
///
/// Booleans, `null`, arrays and objects are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRef::Unsigned(n) => write!(f, "{n}"),
            UserRef::Signed(n) => write!(f, "{n}"),
            UserRef::Float(n) => write!(f, "{n}"),
            UserRef::Text(s) => f.write_str(s),
        }
    }
}

/// Request to queue a booking. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct BookTicketRequest {
    pub user_id: UserRef,
    pub is_vip: bool,
}

/// One request in an admission order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueEntryView {
    pub user_id: String,
    pub vip: bool,
}

impl From<&BookingRequest> for QueueEntryView {
    fn from(request: &BookingRequest) -> Self {
        Self {
            user_id: request.requester().to_string(),
            vip: request.priority().is_vip(),
        }
    }
}

/// Current admission order after a submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingOrderResponse {
    pub booking_order: Vec<QueueEntryView>,
}

/// Requests removed from the queue, in admission order.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdmittedResponse {
    pub admitted: Vec<QueueEntryView>,
}

/// Query parameters for listing trains.
#[derive(Debug, Deserialize)]
pub struct TrainSearchQuery {
    pub source: String,
    pub destination: String,
}

/// Trains between two stations, ordered by departure.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainsResponse {
    pub trains: Vec<TrainListing>,
}

/// Request to add a route to the network.
#[derive(Debug, Deserialize)]
pub struct AddRouteRequest {
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub train_id: String,
}

/// Network size after a route was added.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddRouteResponse {
    pub stations: usize,
    pub routes: usize,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
