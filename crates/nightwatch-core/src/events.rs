//! Events emitted by the simulation for audio, UI, and animation feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::GuardState;

/// Guard behavior events for the frontend.
///
/// Fire-and-forget: the simulation sequences when they fire; how they
/// are rendered (animation, sound, indicator color) is external.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GuardEvent {
    /// A guard changed behavior state.
    StateChanged {
        guard_id: u32,
        from: GuardState,
        to: GuardState,
    },
    /// A guard gained sight of the intruder this tick.
    IntruderSpotted { guard_id: u32, position: DVec3 },
    /// A guard lost sight of the intruder this tick.
    IntruderLost { guard_id: u32 },
    /// A guard was killed. Cue the death animation.
    GuardKilled { guard_id: u32 },
    /// Fired once, a fixed delay after the kill. Cue ragdoll physics.
    RagdollActivated { guard_id: u32 },
}
