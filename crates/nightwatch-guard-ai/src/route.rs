//! Waypoint routing policy.
//!
//! Sequential advance while patrolling; nearest-waypoint re-entry when
//! resuming patrol after a chase, since the guard may be far off route.

use glam::DVec3;

use nightwatch_core::components::PatrolRoute;

/// Advance to the next waypoint from `current`.
///
/// Looping routes wrap; non-looping routes clamp at the final waypoint
/// (repeated calls keep returning it). An empty route yields `None` and
/// the caller keeps its index unchanged.
pub fn next_destination(route: &PatrolRoute, current: usize) -> Option<(usize, DVec3)> {
    let len = route.len();
    if len == 0 {
        return None;
    }
    let next = if route.looped {
        (current + 1) % len
    } else {
        (current + 1).min(len - 1)
    };
    Some((next, route.waypoints[next]))
}

/// The waypoint closest to `from` by straight-line distance.
/// Ties resolve to the lowest index. `None` on an empty route.
pub fn nearest_destination(route: &PatrolRoute, from: DVec3) -> Option<(usize, DVec3)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, wp) in route.waypoints.iter().enumerate() {
        let d = from.distance(*wp);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| (i, route.waypoints[i]))
}
