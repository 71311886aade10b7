//! World snapshot — the complete visible state sent to the frontend each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, GuardState};
use crate::events::GuardEvent;
use crate::types::SimTime;

/// Complete world state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub guards: Vec<GuardView>,
    pub intruder: Option<IntruderView>,
    pub events: Vec<GuardEvent>,
}

/// One guard as seen by the frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardView {
    pub guard_id: u32,
    pub position: DVec3,
    /// Facing in radians (0 = North, clockwise).
    pub yaw: f64,
    pub state: GuardState,
    /// Current patrol route index.
    pub route_index: usize,
    /// Last position at which the intruder was confirmed visible.
    pub last_known_pos: Option<DVec3>,
    /// Whether the intruder is visible to this guard this tick.
    /// Drives the vision-cone alert color in the frontend.
    pub sees_intruder: bool,
}

/// The intruder as seen by the frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntruderView {
    pub position: DVec3,
    /// How many guards currently see the intruder. Drives the
    /// detection indicator.
    pub seen_by: u32,
}
