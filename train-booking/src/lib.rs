//! Train booking core.
//!
//! Answers two questions for a booking service: how to get between two
//! stations (cheapest route or fewest transfers), and in which order
//! competing booking requests should be admitted. A thin JSON web layer
//! exposes both.

pub mod admission;
pub mod config;
pub mod domain;
pub mod graph;
pub mod listing;
pub mod planner;
pub mod web;
