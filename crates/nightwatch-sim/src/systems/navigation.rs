//! Navigation execution — the movement half of the agent adapter.
//!
//! Advances every nav agent toward its destination on the ground plane
//! and keeps `remaining_distance`/`path_pending` current for the next
//! tick's arrival test. Agents turn to face their travel direction;
//! stationary look sweeps are applied by the guard AI system instead.

use glam::DVec3;
use hecs::World;

use nightwatch_core::components::NavAgent;
use nightwatch_core::constants::DT;
use nightwatch_core::types::Pose;

/// Advance all navigation agents by one tick.
pub fn run(world: &mut World) {
    for (_entity, (pose, nav)) in world.query_mut::<(&mut Pose, &mut NavAgent)>() {
        let Some(destination) = nav.destination else {
            nav.remaining_distance = f64::INFINITY;
            nav.path_pending = false;
            continue;
        };

        // Straight-line "paths" resolve instantly.
        nav.path_pending = false;

        let delta = DVec3::new(
            destination.x - pose.position.x,
            destination.y - pose.position.y,
            0.0,
        );
        let dist = delta.length();
        nav.remaining_distance = dist;

        if nav.stopped || dist <= nav.stopping_distance {
            continue;
        }

        let step = (nav.speed * DT).min(dist);
        let dir = delta / dist;
        pose.position += dir * step;
        nav.remaining_distance = dist - step;
        pose.yaw = dir.x.atan2(dir.y).rem_euclid(std::f64::consts::TAU);
    }
}
