//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Guard vision ---

/// Maximum distance at which a guard can see the intruder (meters).
pub const GUARD_VIEW_DISTANCE: f64 = 12.0;

/// Half-angle of the vision cone (radians, 30° — full cone 60°).
pub const GUARD_VIEW_HALF_ANGLE: f64 = 30.0 * std::f64::consts::PI / 180.0;

/// Eye height above the ground for occlusion raycasts (meters).
pub const GUARD_EYE_HEIGHT: f64 = 1.5;

// --- Patrol ---

/// Time spent standing at each waypoint (seconds).
pub const WAYPOINT_WAIT_SECS: f64 = 2.0;

/// Guard walk speed (m/s).
pub const GUARD_MOVE_SPEED: f64 = 2.0;

/// Distance at which a navigation destination counts as reached (meters).
pub const NAV_STOPPING_DISTANCE: f64 = 0.5;

// --- Look-around (Waiting) ---

/// Amplitude of the idle head sweep (radians, 45°).
pub const LOOK_ANGLE: f64 = 45.0 * std::f64::consts::PI / 180.0;

/// Angular frequency of the idle head sweep (rad/s of sine phase).
pub const LOOK_SPEED: f64 = 1.2;

// --- Suspicion / search ---

/// How long a guard hesitates after a mid-patrol sighting before
/// walking over to investigate (seconds).
pub const SUSPICION_SECS: f64 = 1.5;

/// How long a guard searches the last known position before
/// resuming patrol (seconds).
pub const SEARCH_SECS: f64 = 4.0;

/// Search head sweep is slower but wider than the idle one.
pub const SEARCH_LOOK_SPEED_FACTOR: f64 = 0.7;
pub const SEARCH_LOOK_ANGLE_FACTOR: f64 = 1.4;

// --- Death ---

/// Delay between the kill and ragdoll activation (seconds).
pub const RAGDOLL_DELAY_SECS: f64 = 2.25;

// --- Intruder ---

/// Eye height used for the target end of occlusion raycasts (meters).
pub const INTRUDER_EYE_HEIGHT: f64 = 1.5;
