//! Booking admission ordering.
//!
//! Competing booking requests are admitted VIP first, then by arrival time,
//! then in submission order. This module decides the order only; seat
//! inventory checks happen wherever the admission order is consumed.

mod queue;
mod request;

pub use queue::{BookingAdmissionQueue, SharedAdmissionQueue};
pub use request::{BookingRequest, PriorityClass, admission_cmp};
