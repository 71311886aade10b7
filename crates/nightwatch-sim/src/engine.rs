//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, runs all systems, and produces `WorldSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightwatch_core::commands::PlayerCommand;
use nightwatch_core::components::{Guard, GuardBehavior, Intruder, NavAgent, RagdollTimer, Velocity};
use nightwatch_core::constants::{DT, RAGDOLL_DELAY_SECS};
use nightwatch_core::enums::{GamePhase, GuardState};
use nightwatch_core::events::GuardEvent;
use nightwatch_core::state::WorldSnapshot;
use nightwatch_core::types::{Pose, SimTime};
use nightwatch_vision::ObstacleSet;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    obstacles: ObstacleSet,
    next_guard_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    guard_events: Vec<GuardEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            obstacles: ObstacleSet::default(),
            next_guard_id: 0,
            command_queue: VecDeque::new(),
            guard_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.guard_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the level's obstacle geometry.
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    // --- Test helpers ---

    /// Activate the simulation without spawning the default level.
    #[cfg(test)]
    pub fn activate_empty(&mut self) {
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
    }

    /// Spawn a guard with a custom route (for tests). Returns its id.
    #[cfg(test)]
    pub fn spawn_test_guard(
        &mut self,
        position: glam::DVec3,
        yaw: f64,
        route: nightwatch_core::components::PatrolRoute,
    ) -> u32 {
        let (_, id) = world_setup::spawn_guard(
            &mut self.world,
            &mut self.next_guard_id,
            position,
            yaw,
            route,
        );
        id
    }

    /// Spawn the intruder at a custom position (for tests).
    #[cfg(test)]
    pub fn spawn_test_intruder(&mut self, position: glam::DVec3) {
        world_setup::spawn_intruder(&mut self.world, position);
    }

    /// Replace the obstacle geometry (for tests).
    #[cfg(test)]
    pub fn set_obstacles(&mut self, obstacles: ObstacleSet) {
        self.obstacles = obstacles;
    }

    /// Look up a guard's behavior state by id (for tests).
    #[cfg(test)]
    pub fn guard_state(&self, guard_id: u32) -> Option<GuardState> {
        let mut query = self.world.query::<(&Guard, &GuardBehavior)>();
        query
            .iter()
            .find(|(_, (g, _))| g.guard_id == guard_id)
            .map(|(_, (_, b))| b.state)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::MainMenu {
                    self.obstacles = world_setup::setup_mission(
                        &mut self.world,
                        &mut self.rng,
                        &mut self.next_guard_id,
                    );
                    self.phase = GamePhase::Active;
                    self.time = SimTime::default();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetIntruderPosition { position } => {
                for (_entity, (_intruder, pose)) in
                    self.world.query_mut::<(&Intruder, &mut Pose)>()
                {
                    pose.position = position;
                }
            }
            PlayerCommand::SetIntruderVelocity { velocity } => {
                for (_entity, (_intruder, vel)) in
                    self.world.query_mut::<(&Intruder, &mut Velocity)>()
                {
                    vel.0 = velocity;
                }
            }
            PlayerCommand::KillGuard { guard_id } => {
                self.kill_guard(guard_id);
            }
        }
    }

    /// Kill a guard: terminal state, frozen navigation, death animation
    /// event now and a ragdoll event after a fixed delay. Killing an
    /// already-dead guard is a no-op.
    fn kill_guard(&mut self, guard_id: u32) {
        let mut target = None;
        {
            let mut query = self.world.query::<(&Guard, &GuardBehavior)>();
            for (entity, (guard, behavior)) in query.iter() {
                if guard.guard_id == guard_id && behavior.state != GuardState::Dead {
                    target = Some((entity, behavior.state));
                    break;
                }
            }
        }
        let Some((entity, old_state)) = target else {
            return; // unknown id or already dead
        };

        if let Ok(mut behavior) = self.world.get::<&mut GuardBehavior>(entity) {
            behavior.state = GuardState::Dead;
            behavior.state_start_tick = self.time.tick;
        }
        if let Ok(mut nav) = self.world.get::<&mut NavAgent>(entity) {
            nav.stopped = true;
            nav.destination = None;
        }

        let delay_ticks = (RAGDOLL_DELAY_SECS / DT).round() as u64;
        let _ = self.world.insert_one(
            entity,
            RagdollTimer {
                activate_tick: self.time.tick + delay_ticks,
            },
        );

        self.guard_events.push(GuardEvent::StateChanged {
            guard_id,
            from: old_state,
            to: GuardState::Dead,
        });
        self.guard_events.push(GuardEvent::GuardKilled { guard_id });
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Intruder free movement
        systems::movement::run(&mut self.world);
        // 2. Perception + behavior FSM (applies nav and look intents)
        systems::guard_ai::run(
            &mut self.world,
            &self.obstacles,
            self.time.tick,
            &mut self.guard_events,
        );
        // 3. Navigation execution (advance agents toward destinations)
        systems::navigation::run(&mut self.world);
        // 4. Death sequencing (delayed ragdoll activation)
        systems::death::run(&mut self.world, self.time.tick, &mut self.guard_events);
    }
}
