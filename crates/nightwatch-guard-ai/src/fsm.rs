//! Guard behavior finite state machine.
//!
//! Pure functions that compute state transitions, navigation intents,
//! and look directives for guard entities based on their current state,
//! perception result, and navigation progress. No ECS dependency —
//! operates on plain data.

use glam::DVec3;

use nightwatch_core::components::PatrolRoute;
use nightwatch_core::enums::GuardState;

use crate::profiles::GuardProfile;
use crate::route::{nearest_destination, next_destination};

/// Input to the guard FSM for a single tick.
#[derive(Debug, Clone)]
pub struct GuardContext {
    pub state: GuardState,
    pub position: DVec3,
    /// Live facing (radians, 0 = North, clockwise).
    pub yaw: f64,
    /// Current index into the patrol route.
    pub route_index: usize,
    /// Last position at which the intruder was confirmed visible.
    pub last_known_pos: Option<DVec3>,
    /// Seconds since the current state was entered.
    pub elapsed_in_state_secs: f64,
    /// Navigation progress: destination reached (or no path to follow).
    pub arrived: bool,
    /// Perception result for this tick.
    pub can_see_intruder: bool,
    /// Intruder position, when one is bound. Always `Some` on ticks
    /// where `can_see_intruder` is true.
    pub intruder_position: Option<DVec3>,
}

/// Navigation intent issued to the movement adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavIntent {
    /// Head to a point. Re-issuing the same destination every tick
    /// is expected.
    MoveTo(DVec3),
    /// Halt in place.
    Stop,
    /// Leave the adapter as it is.
    NoChange,
}

/// Facing directive applied by the external transform step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookIntent {
    /// Leave facing to the movement adapter.
    NoChange,
    /// Yaw offset from the facing recorded at state entry. Computed
    /// from the base, never the live facing, so the sweep cannot drift.
    OffsetFromBase(f64),
    /// Snap back to the recorded base facing.
    RestoreBase,
}

/// Output from the guard FSM for a single tick.
#[derive(Debug, Clone)]
pub struct GuardUpdate {
    pub new_state: GuardState,
    pub state_changed: bool,
    pub nav: NavIntent,
    pub look: LookIntent,
    /// `Some` overwrites the remembered last known position.
    pub new_last_known: Option<DVec3>,
    /// `Some` overwrites the route index.
    pub new_route_index: Option<usize>,
    /// `Some` re-records the base facing (on entry to a look-around state).
    pub new_base_yaw: Option<f64>,
}

impl GuardUpdate {
    fn no_change(ctx: &GuardContext) -> Self {
        Self {
            new_state: ctx.state,
            state_changed: false,
            nav: NavIntent::NoChange,
            look: LookIntent::NoChange,
            new_last_known: None,
            new_route_index: None,
            new_base_yaw: None,
        }
    }

    /// Transition into Chasing: remember where the intruder is and head
    /// for that live position.
    fn enter_chase(ctx: &GuardContext, intruder: DVec3) -> Self {
        Self {
            new_state: GuardState::Chasing,
            state_changed: ctx.state != GuardState::Chasing,
            nav: NavIntent::MoveTo(intruder),
            look: LookIntent::NoChange,
            new_last_known: Some(intruder),
            new_route_index: None,
            new_base_yaw: None,
        }
    }
}

/// Evaluate the FSM for one guard. Returns the next state plus the
/// navigation and facing directives for this tick.
pub fn evaluate(ctx: &GuardContext, route: &PatrolRoute, profile: &GuardProfile) -> GuardUpdate {
    // Terminal state — no transitions, no intents.
    if ctx.state.is_terminal() {
        return GuardUpdate::no_change(ctx);
    }

    match ctx.state {
        GuardState::Patrolling => evaluate_patrolling(ctx, route),
        GuardState::Waiting => evaluate_waiting(ctx, route, profile),
        GuardState::Suspicious => evaluate_suspicious(ctx, profile),
        GuardState::Investigating => evaluate_investigating(ctx),
        GuardState::Chasing => evaluate_chasing(ctx),
        GuardState::Searching => evaluate_searching(ctx, route, profile),
        GuardState::Dead => GuardUpdate::no_change(ctx),
    }
}

/// Walk toward the current waypoint. A sighting mid-stride goes through
/// Suspicious first; only an idle guard chases on sight.
fn evaluate_patrolling(ctx: &GuardContext, route: &PatrolRoute) -> GuardUpdate {
    if ctx.can_see_intruder {
        if let Some(intruder) = ctx.intruder_position {
            return GuardUpdate {
                new_state: GuardState::Suspicious,
                state_changed: true,
                nav: NavIntent::Stop,
                look: LookIntent::NoChange,
                new_last_known: Some(intruder),
                new_route_index: None,
                new_base_yaw: None,
            };
        }
    }

    if ctx.arrived {
        // Reached the waypoint (or there is nothing to walk to):
        // stand and look around.
        return GuardUpdate {
            new_state: GuardState::Waiting,
            state_changed: true,
            nav: NavIntent::Stop,
            look: LookIntent::NoChange,
            new_last_known: None,
            new_route_index: None,
            new_base_yaw: Some(ctx.yaw),
        };
    }

    let mut update = GuardUpdate::no_change(ctx);
    if let Some(&wp) = route.waypoints.get(ctx.route_index) {
        update.nav = NavIntent::MoveTo(wp);
    }
    update
}

/// Stand at the waypoint, sweeping left and right. An idle guard reacts
/// to a sighting immediately: straight to Chasing, no Suspicious beat.
fn evaluate_waiting(ctx: &GuardContext, route: &PatrolRoute, profile: &GuardProfile) -> GuardUpdate {
    if ctx.can_see_intruder {
        if let Some(intruder) = ctx.intruder_position {
            return GuardUpdate::enter_chase(ctx, intruder);
        }
    }

    if ctx.elapsed_in_state_secs >= profile.wait_secs {
        if let Some((index, wp)) = next_destination(route, ctx.route_index) {
            return GuardUpdate {
                new_state: GuardState::Patrolling,
                state_changed: true,
                nav: NavIntent::MoveTo(wp),
                look: LookIntent::RestoreBase,
                new_last_known: None,
                new_route_index: Some(index),
                new_base_yaw: None,
            };
        }
        // Empty route: nothing to patrol toward. Stay here, keep scanning.
    }

    let mut update = GuardUpdate::no_change(ctx);
    update.look = LookIntent::OffsetFromBase(profile.wait_look_offset(ctx.elapsed_in_state_secs));
    update
}

/// Hold position and confirm the sighting. Seen again → chase; timer
/// expires without re-acquisition → walk to the last known position.
fn evaluate_suspicious(ctx: &GuardContext, profile: &GuardProfile) -> GuardUpdate {
    if ctx.can_see_intruder {
        if let Some(intruder) = ctx.intruder_position {
            return GuardUpdate::enter_chase(ctx, intruder);
        }
    }

    if ctx.elapsed_in_state_secs >= profile.suspicion_secs {
        let nav = match ctx.last_known_pos {
            Some(lkp) => NavIntent::MoveTo(lkp),
            // No remembered position: Investigating will immediately
            // count as arrived and fall through to Searching.
            None => NavIntent::NoChange,
        };
        return GuardUpdate {
            new_state: GuardState::Investigating,
            state_changed: true,
            nav,
            look: LookIntent::NoChange,
            new_last_known: None,
            new_route_index: None,
            new_base_yaw: None,
        };
    }

    GuardUpdate::no_change(ctx)
}

/// Walk to the last known position. Re-acquisition at any point jumps
/// straight back to Chasing without restarting the suspicion beat.
fn evaluate_investigating(ctx: &GuardContext) -> GuardUpdate {
    if ctx.can_see_intruder {
        if let Some(intruder) = ctx.intruder_position {
            return GuardUpdate::enter_chase(ctx, intruder);
        }
    }

    if ctx.arrived {
        return GuardUpdate {
            new_state: GuardState::Searching,
            state_changed: true,
            nav: NavIntent::Stop,
            look: LookIntent::NoChange,
            new_last_known: None,
            new_route_index: None,
            new_base_yaw: Some(ctx.yaw),
        };
    }

    let mut update = GuardUpdate::no_change(ctx);
    if let Some(lkp) = ctx.last_known_pos {
        update.nav = NavIntent::MoveTo(lkp);
    }
    update
}

/// Follow the live intruder position, the only destination that tracks
/// a moving point. Losing sight drops straight into Searching; the
/// chase has already carried the guard to the last seen point.
fn evaluate_chasing(ctx: &GuardContext) -> GuardUpdate {
    if ctx.can_see_intruder {
        if let Some(intruder) = ctx.intruder_position {
            let mut update = GuardUpdate::no_change(ctx);
            update.nav = NavIntent::MoveTo(intruder);
            update.new_last_known = Some(intruder);
            return update;
        }
    }

    GuardUpdate {
        new_state: GuardState::Searching,
        state_changed: true,
        nav: NavIntent::Stop,
        look: LookIntent::NoChange,
        new_last_known: None,
        new_route_index: None,
        new_base_yaw: Some(ctx.yaw),
    }
}

/// Stand at the investigated point sweeping a wider arc, then give up
/// and rejoin the route at whichever waypoint is now nearest.
fn evaluate_searching(ctx: &GuardContext, route: &PatrolRoute, profile: &GuardProfile) -> GuardUpdate {
    if ctx.can_see_intruder {
        if let Some(intruder) = ctx.intruder_position {
            return GuardUpdate::enter_chase(ctx, intruder);
        }
    }

    if ctx.elapsed_in_state_secs >= profile.search_secs {
        if let Some((index, wp)) = nearest_destination(route, ctx.position) {
            return GuardUpdate {
                new_state: GuardState::Patrolling,
                state_changed: true,
                nav: NavIntent::MoveTo(wp),
                look: LookIntent::RestoreBase,
                new_last_known: None,
                new_route_index: Some(index),
                new_base_yaw: None,
            };
        }
        // Empty route: nowhere to go back to. Keep searching in place.
    }

    let mut update = GuardUpdate::no_change(ctx);
    update.look = LookIntent::OffsetFromBase(profile.search_look_offset(ctx.elapsed_in_state_secs));
    update
}
