//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position and facing of an agent.
/// Coordinates are meters, Cartesian: x = East, y = North, z = Up.
/// Yaw is radians, 0 = North (+y), increasing clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub yaw: f64,
}

impl Pose {
    pub fn new(position: DVec3, yaw: f64) -> Self {
        Self { position, yaw }
    }

    /// Unit forward vector on the ground plane.
    pub fn forward(&self) -> DVec3 {
        DVec3::new(self.yaw.sin(), self.yaw.cos(), 0.0)
    }

    /// Bearing to another point in radians (0 = North, clockwise).
    pub fn bearing_to(&self, point: DVec3) -> f64 {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx.atan2(dy).rem_euclid(std::f64::consts::TAU)
    }

    /// Horizontal distance to a point (ignoring altitude).
    pub fn horizontal_distance_to(&self, point: DVec3) -> f64 {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
