//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior logic.
//! Guard decisions live in nightwatch-guard-ai, execution in systems.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{GUARD_MOVE_SPEED, NAV_STOPPING_DISTANCE};
use crate::enums::GuardState;

/// Marks an entity as a guard and carries its stable display id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Guard {
    pub guard_id: u32,
}

/// Marks the entity the guards are watching for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Intruder;

/// Free-movement velocity (m/s). Used by the intruder; guards move
/// through their `NavAgent` instead.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Behavior state owned by one guard's state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardBehavior {
    pub state: GuardState,
    /// Tick at which the current state began (for timed transitions).
    pub state_start_tick: u64,
    /// Most recent position at which the intruder was confirmed visible.
    /// Absent until the first sighting.
    pub last_known_pos: Option<DVec3>,
    /// Facing recorded at state entry; look sweeps offset from this,
    /// never from the live facing.
    pub base_yaw: f64,
    /// Current index into the patrol route. Always in [0, len) when
    /// the route is non-empty.
    pub route_index: usize,
    /// Perception result of the most recent tick. Kept only for the
    /// snapshot and for spotted/lost edge events; decisions always use
    /// the freshly computed result.
    pub sees_intruder: bool,
}

impl GuardBehavior {
    pub fn new(base_yaw: f64) -> Self {
        Self {
            state: GuardState::Patrolling,
            state_start_tick: 0,
            last_known_pos: None,
            base_yaw,
            route_index: 0,
            sees_intruder: false,
        }
    }
}

/// Ordered patrol waypoints. Immutable during play; the router in
/// nightwatch-guard-ai reads it, never owns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatrolRoute {
    pub waypoints: Vec<DVec3>,
    /// true: wrap from the last waypoint to the first.
    /// false: clamp at the last waypoint and stay there.
    pub looped: bool,
}

impl PatrolRoute {
    pub fn looping(waypoints: Vec<DVec3>) -> Self {
        Self {
            waypoints,
            looped: true,
        }
    }

    pub fn one_way(waypoints: Vec<DVec3>) -> Self {
        Self {
            waypoints,
            looped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// Navigation agent state — the data half of the movement adapter.
///
/// The behavior core only ever writes `destination`/`stopped` (through
/// nav intents) and reads `path_pending`/`remaining_distance` for its
/// arrival test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavAgent {
    /// Where the agent is heading, if anywhere.
    pub destination: Option<DVec3>,
    /// Halted by an explicit stop intent. Destination is retained.
    pub stopped: bool,
    /// Whether a path is still being computed. The straight-line
    /// adapter resolves paths instantly, so this clears the tick after
    /// a destination is set.
    pub path_pending: bool,
    /// Remaining distance to the destination (meters). Infinity when
    /// no destination is set.
    pub remaining_distance: f64,
    /// Travel speed (m/s).
    pub speed: f64,
    /// Arrival threshold (meters).
    pub stopping_distance: f64,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            stopped: false,
            path_pending: false,
            remaining_distance: f64::INFINITY,
            speed: GUARD_MOVE_SPEED,
            stopping_distance: NAV_STOPPING_DISTANCE,
        }
    }
}

impl NavAgent {
    /// The arrival test: no path pending and within stopping distance.
    /// A missing destination also counts as arrived — a nav agent that
    /// lost its path must not deadlock the state machine.
    pub fn arrived(&self) -> bool {
        match self.destination {
            Some(_) => !self.path_pending && self.remaining_distance <= self.stopping_distance,
            None => true,
        }
    }
}

/// Scheduled ragdoll activation for a killed guard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RagdollTimer {
    /// Tick at which the ragdoll event fires.
    pub activate_tick: u64,
}
