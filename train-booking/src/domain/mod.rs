//! Domain types for the train booking core.
//!
//! This module contains the validated value types shared by the route
//! planner, the admission queue and the listing sorter. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod station;
mod time;
mod train;
mod train_id;

pub use station::{InvalidStation, Station};
pub use time::{TimeError, TimetableTime};
pub use train::TrainListing;
pub use train_id::{InvalidTrainId, TrainId};
