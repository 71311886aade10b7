//! Behavior tuning parameters for a guard.

use serde::{Deserialize, Serialize};

use nightwatch_core::constants::*;

/// Per-guard behavior durations and look-sweep shape.
///
/// Vision parameters (range, cone, eye height) live in
/// nightwatch-vision's `ViewProfile`; this covers everything the state
/// machine itself times and animates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuardProfile {
    /// Time spent standing at each waypoint (seconds).
    pub wait_secs: f64,
    /// Hesitation after a mid-patrol sighting before investigating (seconds).
    pub suspicion_secs: f64,
    /// Time spent searching the last known position (seconds).
    pub search_secs: f64,
    /// Idle head-sweep amplitude (radians).
    pub look_angle: f64,
    /// Idle head-sweep frequency (rad/s of sine phase).
    pub look_speed: f64,
    /// Search sweep frequency multiplier (slower).
    pub search_look_speed_factor: f64,
    /// Search sweep amplitude multiplier (wider).
    pub search_look_angle_factor: f64,
}

impl Default for GuardProfile {
    fn default() -> Self {
        Self {
            wait_secs: WAYPOINT_WAIT_SECS,
            suspicion_secs: SUSPICION_SECS,
            search_secs: SEARCH_SECS,
            look_angle: LOOK_ANGLE,
            look_speed: LOOK_SPEED,
            search_look_speed_factor: SEARCH_LOOK_SPEED_FACTOR,
            search_look_angle_factor: SEARCH_LOOK_ANGLE_FACTOR,
        }
    }
}

impl GuardProfile {
    /// Yaw offset from the base facing for the idle look-around.
    pub fn wait_look_offset(&self, elapsed_secs: f64) -> f64 {
        (elapsed_secs * self.look_speed).sin() * self.look_angle
    }

    /// Yaw offset from the base facing while searching: slower sweep,
    /// wider arc, to read as active searching.
    pub fn search_look_offset(&self, elapsed_secs: f64) -> f64 {
        (elapsed_secs * self.look_speed * self.search_look_speed_factor).sin()
            * self.look_angle
            * self.search_look_angle_factor
    }
}
