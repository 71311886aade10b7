//! Death sequencing — delayed ragdoll activation.
//!
//! The kill command freezes the guard and emits the death-animation
//! event immediately; this system fires the ragdoll event once the
//! scheduled tick arrives, then removes the timer so it cannot fire
//! again.

use hecs::World;

use nightwatch_core::components::{Guard, RagdollTimer};
use nightwatch_core::events::GuardEvent;

/// Fire due ragdoll activations.
pub fn run(world: &mut World, current_tick: u64, events: &mut Vec<GuardEvent>) {
    let mut due: Vec<(hecs::Entity, u32)> = Vec::new();
    {
        let mut query = world.query::<(&Guard, &RagdollTimer)>();
        for (entity, (guard, timer)) in query.iter() {
            if current_tick >= timer.activate_tick {
                due.push((entity, guard.guard_id));
            }
        }
    }

    for (entity, guard_id) in due {
        events.push(GuardEvent::RagdollActivated { guard_id });
        let _ = world.remove_one::<RagdollTimer>(entity);
    }
}
