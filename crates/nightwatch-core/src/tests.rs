#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::components::{NavAgent, PatrolRoute};
    use crate::enums::{GamePhase, GuardState};
    use crate::events::GuardEvent;
    use crate::state::WorldSnapshot;
    use crate::types::{Pose, SimTime};

    /// Verify GuardState round-trips through serde_json.
    #[test]
    fn test_guard_state_serde() {
        let variants = vec![
            GuardState::Patrolling,
            GuardState::Waiting,
            GuardState::Suspicious,
            GuardState::Investigating,
            GuardState::Chasing,
            GuardState::Searching,
            GuardState::Dead,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GuardState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_only_dead_is_terminal() {
        assert!(GuardState::Dead.is_terminal());
        for s in [
            GuardState::Patrolling,
            GuardState::Waiting,
            GuardState::Suspicious,
            GuardState::Investigating,
            GuardState::Chasing,
            GuardState::Searching,
        ] {
            assert!(!s.is_terminal(), "{s:?} should not be terminal");
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetIntruderPosition {
                position: DVec3::new(1.0, 2.0, 0.0),
            },
            PlayerCommand::SetIntruderVelocity {
                velocity: DVec3::new(0.0, -1.5, 0.0),
            },
            PlayerCommand::KillGuard { guard_id: 3 },
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::StartMission,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let _back: PlayerCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_guard_event_serde() {
        let events = vec![
            GuardEvent::StateChanged {
                guard_id: 0,
                from: GuardState::Patrolling,
                to: GuardState::Suspicious,
            },
            GuardEvent::IntruderSpotted {
                guard_id: 0,
                position: DVec3::new(3.0, 4.0, 0.0),
            },
            GuardEvent::IntruderLost { guard_id: 0 },
            GuardEvent::GuardKilled { guard_id: 1 },
            GuardEvent::RagdollActivated { guard_id: 1 },
        ];
        for ev in &events {
            let json = serde_json::to_string(ev).unwrap();
            let back: GuardEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*ev, back);
        }
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snap = WorldSnapshot {
            phase: GamePhase::Active,
            ..Default::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Active);
        assert!(back.guards.is_empty());
    }

    // ---- Pose math ----

    #[test]
    fn test_pose_forward_cardinal_directions() {
        let north = Pose::new(DVec3::ZERO, 0.0);
        assert!((north.forward() - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-9);

        let east = Pose::new(DVec3::ZERO, std::f64::consts::FRAC_PI_2);
        assert!((east.forward() - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-9);

        let south = Pose::new(DVec3::ZERO, std::f64::consts::PI);
        assert!((south.forward() - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_pose_bearing_to() {
        let pose = Pose::new(DVec3::ZERO, 0.0);
        // Point due East => bearing 90°
        let bearing = pose.bearing_to(DVec3::new(10.0, 0.0, 0.0));
        assert!((bearing - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        // Point due West => bearing 270°
        let bearing = pose.bearing_to(DVec3::new(-10.0, 0.0, 0.0));
        assert!((bearing - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_distance_ignores_altitude() {
        let pose = Pose::new(DVec3::new(0.0, 0.0, 0.0), 0.0);
        let d = pose.horizontal_distance_to(DVec3::new(3.0, 4.0, 100.0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    // ---- SimTime ----

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..30 {
            t.advance();
        }
        assert_eq!(t.tick, 30);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- NavAgent arrival test ----

    #[test]
    fn test_nav_agent_arrival() {
        let mut nav = NavAgent::default();
        // No destination counts as arrived (conservative, no deadlock).
        assert!(nav.arrived());

        nav.destination = Some(DVec3::new(10.0, 0.0, 0.0));
        nav.remaining_distance = 10.0;
        assert!(!nav.arrived());

        // At exactly the stopping distance, arrival resolves to done.
        nav.remaining_distance = nav.stopping_distance;
        assert!(nav.arrived());

        // A pending path is never "arrived".
        nav.path_pending = true;
        assert!(!nav.arrived());
    }

    // ---- PatrolRoute ----

    #[test]
    fn test_patrol_route_constructors() {
        let pts = vec![DVec3::ZERO, DVec3::new(5.0, 0.0, 0.0)];
        let looped = PatrolRoute::looping(pts.clone());
        assert!(looped.looped);
        assert_eq!(looped.len(), 2);

        let one_way = PatrolRoute::one_way(pts);
        assert!(!one_way.looped);
        assert!(!one_way.is_empty());
        assert!(PatrolRoute::default().is_empty());
    }
}
