//! Free-movement integration for velocity-driven entities.
//!
//! Guards move through their nav agents; this system only integrates
//! the intruder's externally-set velocity: position += velocity * dt.

use hecs::World;

use nightwatch_core::components::Velocity;
use nightwatch_core::constants::DT;
use nightwatch_core::types::Pose;

/// Integrate velocity for all entities carrying one.
pub fn run(world: &mut World) {
    for (_entity, (pose, vel)) in world.query_mut::<(&mut Pose, &Velocity)>() {
        pose.position += vel.0 * DT;
    }
}
