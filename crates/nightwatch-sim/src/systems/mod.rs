//! Simulation systems, run in a fixed order each tick by the engine.

pub mod death;
pub mod guard_ai;
pub mod movement;
pub mod navigation;
pub mod snapshot;
