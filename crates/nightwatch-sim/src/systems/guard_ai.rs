//! Guard AI system — perception and behavior update each tick.
//!
//! Runs the visibility query and the behavior FSM from
//! nightwatch-guard-ai for every living guard, then applies the
//! resulting navigation and look directives to ECS components.

use glam::DVec3;
use hecs::World;

use nightwatch_core::components::{Guard, GuardBehavior, Intruder, NavAgent, PatrolRoute};
use nightwatch_core::constants::DT;
use nightwatch_core::events::GuardEvent;
use nightwatch_core::types::Pose;
use nightwatch_guard_ai::fsm::{evaluate, GuardContext, GuardUpdate, LookIntent, NavIntent};
use nightwatch_guard_ai::profiles::GuardProfile;
use nightwatch_vision::{can_see, ObstacleSet, ViewProfile};

/// Run the guard AI system: perceive, evaluate the FSM, apply updates.
pub fn run(
    world: &mut World,
    obstacles: &ObstacleSet,
    current_tick: u64,
    events: &mut Vec<GuardEvent>,
) {
    let intruder_position = find_intruder(world);

    // Collect updates in a buffer to avoid borrow issues with hecs.
    let mut updates: Vec<(hecs::Entity, u32, bool, GuardUpdate)> = Vec::new();

    {
        let mut query = world.query::<(
            &Guard,
            &Pose,
            &GuardBehavior,
            &NavAgent,
            &PatrolRoute,
            &GuardProfile,
            &ViewProfile,
        )>();
        for (entity, (guard, pose, behavior, nav, route, profile, view)) in query.iter() {
            if behavior.state.is_terminal() {
                continue;
            }

            let sees = can_see(pose, view, intruder_position, obstacles);

            let elapsed_in_state =
                current_tick.saturating_sub(behavior.state_start_tick) as f64 * DT;

            let ctx = GuardContext {
                state: behavior.state,
                position: pose.position,
                yaw: pose.yaw,
                route_index: behavior.route_index,
                last_known_pos: behavior.last_known_pos,
                elapsed_in_state_secs: elapsed_in_state,
                arrived: nav.arrived(),
                can_see_intruder: sees,
                intruder_position,
            };

            let update = evaluate(&ctx, route, profile);
            updates.push((entity, guard.guard_id, sees, update));
        }
    }

    // Apply updates.
    for (entity, guard_id, sees, update) in updates {
        if let Ok(mut behavior) = world.get::<&mut GuardBehavior>(entity) {
            let was_seeing = behavior.sees_intruder;
            let old_state = behavior.state;

            if update.state_changed {
                behavior.state = update.new_state;
                behavior.state_start_tick = current_tick;
                events.push(GuardEvent::StateChanged {
                    guard_id,
                    from: old_state,
                    to: update.new_state,
                });
            }
            if let Some(lkp) = update.new_last_known {
                behavior.last_known_pos = Some(lkp);
            }
            if let Some(index) = update.new_route_index {
                behavior.route_index = index;
            }
            if let Some(base) = update.new_base_yaw {
                behavior.base_yaw = base;
            }
            behavior.sees_intruder = sees;

            // Edge-triggered sighting events.
            if sees && !was_seeing {
                if let Some(position) = intruder_position {
                    events.push(GuardEvent::IntruderSpotted { guard_id, position });
                }
            } else if !sees && was_seeing {
                events.push(GuardEvent::IntruderLost { guard_id });
            }
        }

        apply_nav_intent(world, entity, update.nav);
        apply_look_intent(world, entity, update.look);
    }
}

/// The intruder's position, if one is bound to the level.
fn find_intruder(world: &World) -> Option<DVec3> {
    let mut query = world.query::<(&Intruder, &Pose)>();
    query.iter().next().map(|(_, (_, pose))| pose.position)
}

fn apply_nav_intent(world: &mut World, entity: hecs::Entity, intent: NavIntent) {
    let Ok(mut nav) = world.get::<&mut NavAgent>(entity) else {
        return;
    };
    match intent {
        NavIntent::MoveTo(point) => {
            nav.destination = Some(point);
            nav.stopped = false;
        }
        NavIntent::Stop => {
            nav.stopped = true;
        }
        NavIntent::NoChange => {}
    }
}

fn apply_look_intent(world: &mut World, entity: hecs::Entity, intent: LookIntent) {
    let base_yaw = match world.get::<&GuardBehavior>(entity) {
        Ok(behavior) => behavior.base_yaw,
        Err(_) => return,
    };
    let Ok(mut pose) = world.get::<&mut Pose>(entity) else {
        return;
    };
    match intent {
        LookIntent::OffsetFromBase(offset) => {
            pose.yaw = (base_yaw + offset).rem_euclid(std::f64::consts::TAU);
        }
        LookIntent::RestoreBase => {
            pose.yaw = base_yaw;
        }
        LookIntent::NoChange => {}
    }
}
