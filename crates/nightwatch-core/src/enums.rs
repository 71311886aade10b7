//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Guard behavior state.
///
/// One canonical machine for every guard. `Dead` is terminal: it is
/// entered exactly once via the kill command and never left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardState {
    /// Walking toward the current route waypoint.
    #[default]
    Patrolling,
    /// Standing at a waypoint, scanning left and right.
    Waiting,
    /// Just spotted the intruder mid-patrol; standing still, confirming.
    Suspicious,
    /// Walking to the intruder's last known position.
    Investigating,
    /// Actively following the intruder's live position.
    Chasing,
    /// Standing at the last known position, scanning before giving up.
    Searching,
    /// Killed. No further perception or movement.
    Dead,
}

impl GuardState {
    /// Whether this state accepts any further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuardState::Dead)
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}
