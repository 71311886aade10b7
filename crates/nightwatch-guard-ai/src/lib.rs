//! Guard AI for NIGHTWATCH.
//!
//! Implements the patrol/chase behavior state machine and the
//! waypoint routing policy. Pure functions over plain data —
//! no ECS dependency.

pub mod fsm;
pub mod profiles;
pub mod route;

pub use nightwatch_core as core;
