//! Web layer for the train booking service.
//!
//! Provides JSON endpoints for route planning, booking admission and train
//! listings on top of the core modules.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
