//! Train listing records.
//!
//! A `TrainListing` is a read-only snapshot of a scheduled train as supplied
//! by the catalogue owner. Seat counts are informational here: admission
//! against inventory happens outside this crate.

use serde::{Deserialize, Serialize};

use super::{Station, TimetableTime, TrainId};

/// A scheduled train between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainListing {
    pub id: TrainId,
    pub name: String,
    pub source: Station,
    pub destination: Station,
    pub departure_time: TimetableTime,
    pub arrival_time: TimetableTime,
    pub seats: u32,
}

impl TrainListing {
    /// Whether this train runs from `source` to `destination`.
    pub fn serves(&self, source: &Station, destination: &Station) -> bool {
        &self.source == source && &self.destination == destination
    }
}
