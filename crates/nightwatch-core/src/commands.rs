//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Intruder control ---
    /// Teleport the intruder (used by the frontend's own mover).
    SetIntruderPosition { position: DVec3 },
    /// Set the intruder's velocity for continuous movement.
    SetIntruderVelocity { velocity: DVec3 },

    // --- Guard interaction ---
    /// Kill a guard. Idempotent: killing a dead guard is a no-op.
    KillGuard { guard_id: u32 },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },
    /// Start a new mission.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
