//! Snapshot assembly — the complete per-tick state for the frontend.

use hecs::World;

use nightwatch_core::components::{Guard, GuardBehavior, Intruder};
use nightwatch_core::enums::GamePhase;
use nightwatch_core::events::GuardEvent;
use nightwatch_core::state::{GuardView, IntruderView, WorldSnapshot};
use nightwatch_core::types::{Pose, SimTime};

/// Build the WorldSnapshot for the current tick.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GuardEvent>,
) -> WorldSnapshot {
    let mut guards = Vec::new();
    let mut seen_by = 0u32;

    {
        let mut query = world.query::<(&Guard, &Pose, &GuardBehavior)>();
        for (_entity, (guard, pose, behavior)) in query.iter() {
            if behavior.sees_intruder {
                seen_by += 1;
            }
            guards.push(GuardView {
                guard_id: guard.guard_id,
                position: pose.position,
                yaw: pose.yaw,
                state: behavior.state,
                route_index: behavior.route_index,
                last_known_pos: behavior.last_known_pos,
                sees_intruder: behavior.sees_intruder,
            });
        }
    }
    // Stable ordering regardless of ECS iteration order.
    guards.sort_by_key(|g| g.guard_id);

    let intruder = {
        let mut query = world.query::<(&Intruder, &Pose)>();
        query.iter().next().map(|(_entity, (_intruder, pose))| IntruderView {
            position: pose.position,
            seen_by,
        })
    };

    WorldSnapshot {
        time: *time,
        phase,
        guards,
        intruder,
        events,
    }
}
