//! Entity spawn factories for setting up the simulation world.
//!
//! Creates guards with their routes, the intruder, and the level's
//! static obstacle geometry.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightwatch_core::components::{Guard, GuardBehavior, Intruder, NavAgent, PatrolRoute, Velocity};
use nightwatch_core::types::Pose;
use nightwatch_guard_ai::profiles::GuardProfile;
use nightwatch_vision::{Aabb, ObstacleSet, ViewProfile};

/// Set up the default mission: two patrolling guards, the intruder
/// beyond a dividing wall, and a scattering of crates for cover.
/// Returns the level's obstacle geometry.
pub fn setup_mission(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_guard_id: &mut u32,
) -> ObstacleSet {
    spawn_intruder(world, DVec3::new(0.0, 25.0, 0.0));

    // Guard 0 walks the south corridor.
    spawn_guard(
        world,
        next_guard_id,
        DVec3::new(-8.0, 0.0, 0.0),
        std::f64::consts::FRAC_PI_2, // facing East, along the route
        PatrolRoute::looping(vec![DVec3::new(-8.0, 0.0, 0.0), DVec3::new(8.0, 0.0, 0.0)]),
    );

    // Guard 1 circles the yard.
    spawn_guard(
        world,
        next_guard_id,
        DVec3::new(-6.0, 6.0, 0.0),
        0.0,
        PatrolRoute::looping(vec![
            DVec3::new(-6.0, 6.0, 0.0),
            DVec3::new(6.0, 6.0, 0.0),
            DVec3::new(6.0, 14.0, 0.0),
            DVec3::new(-6.0, 14.0, 0.0),
        ]),
    );

    let mut obstacles = ObstacleSet::default();
    // Dividing wall between the yard and the intruder's approach.
    obstacles.push(Aabb::new(
        DVec3::new(-12.0, 17.0, 0.0),
        DVec3::new(12.0, 18.0, 3.0),
    ));
    scatter_cover(&mut obstacles, rng, 6);
    obstacles
}

/// Spawn the intruder (the entity guards watch for).
pub fn spawn_intruder(world: &mut World, position: DVec3) -> hecs::Entity {
    world.spawn((
        Intruder,
        Pose::new(position, 0.0),
        Velocity::default(),
    ))
}

/// Spawn a guard with a patrol route. The nav agent starts out heading
/// for the route's first waypoint; with an empty route it has no
/// destination and the guard settles into waiting in place.
pub fn spawn_guard(
    world: &mut World,
    next_guard_id: &mut u32,
    position: DVec3,
    yaw: f64,
    route: PatrolRoute,
) -> (hecs::Entity, u32) {
    let guard_id = *next_guard_id;
    *next_guard_id += 1;

    let nav = NavAgent {
        destination: route.waypoints.first().copied(),
        ..Default::default()
    };

    let entity = world.spawn((
        Guard { guard_id },
        Pose::new(position, yaw),
        GuardBehavior::new(yaw),
        nav,
        route,
        GuardProfile::default(),
        ViewProfile::default(),
    ));
    (entity, guard_id)
}

/// Scatter crate-sized cover boxes around the yard. Seeded by the
/// engine RNG, so a given seed always produces the same layout.
pub fn scatter_cover(obstacles: &mut ObstacleSet, rng: &mut ChaCha8Rng, count: usize) {
    for _ in 0..count {
        let x = rng.gen_range(-14.0..14.0);
        let y = rng.gen_range(3.0..16.0);
        let half = rng.gen_range(0.4..0.7);
        obstacles.push(Aabb::block(
            DVec3::new(x, y, half),
            DVec3::new(half, half, half),
        ));
    }
}
