//! Guard perception for NIGHTWATCH.
//!
//! Implements the line-of-sight visibility test (range, cone,
//! occlusion) and the static obstacle geometry it raycasts against.

pub mod fov;
pub mod occlusion;

pub use fov::{can_see, ViewProfile};
pub use occlusion::{Aabb, ObstacleSet, Occluder};

pub use nightwatch_core as core;
