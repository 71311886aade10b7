//! The visibility test: can a guard see the intruder right now?
//!
//! Three independent necessary conditions, checked cheapest first:
//! range compare, cone-angle compare, then the eye-to-eye occlusion
//! raycast. The ordering matters — the raycast is the only check that
//! touches the obstacle geometry, and most ticks never reach it.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use nightwatch_core::constants::{
    GUARD_EYE_HEIGHT, GUARD_VIEW_DISTANCE, GUARD_VIEW_HALF_ANGLE, INTRUDER_EYE_HEIGHT,
};
use nightwatch_core::types::Pose;

use crate::occlusion::Occluder;

/// Vision parameters for one observer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewProfile {
    /// Maximum sight range (meters).
    pub view_distance: f64,
    /// Half-angle of the vision cone (radians).
    pub view_half_angle: f64,
    /// Observer eye height above its position (meters).
    pub eye_height: f64,
    /// Target eye height above its position (meters).
    pub target_eye_height: f64,
}

impl Default for ViewProfile {
    fn default() -> Self {
        Self {
            view_distance: GUARD_VIEW_DISTANCE,
            view_half_angle: GUARD_VIEW_HALF_ANGLE,
            eye_height: GUARD_EYE_HEIGHT,
            target_eye_height: INTRUDER_EYE_HEIGHT,
        }
    }
}

/// Pure visibility query. No side effects, safe to call from any number
/// of agents per tick; the occluder is only read.
///
/// Returns false for a missing target rather than erroring — a level
/// with no intruder bound simply keeps its guards passive.
pub fn can_see(
    pose: &Pose,
    view: &ViewProfile,
    target: Option<DVec3>,
    occluder: &impl Occluder,
) -> bool {
    let Some(target) = target else {
        return false;
    };

    // 1. Range
    let to_target = target - pose.position;
    let dist = to_target.length();
    if dist > view.view_distance {
        return false;
    }

    // 2. Cone angle against the ground-plane forward vector
    if dist > f64::EPSILON {
        let cos_angle = (pose.forward().dot(to_target) / dist).clamp(-1.0, 1.0);
        if cos_angle.acos() > view.view_half_angle {
            return false;
        }
    }

    // 3. Eye-to-eye occlusion raycast
    let eye_origin = pose.position + DVec3::new(0.0, 0.0, view.eye_height);
    let eye_target = target + DVec3::new(0.0, 0.0, view.target_eye_height);
    !occluder.blocks_segment(eye_origin, eye_target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occlusion::{Aabb, ObstacleSet};
    use std::cell::Cell;

    fn facing_north_at_origin() -> Pose {
        Pose::new(DVec3::ZERO, 0.0)
    }

    fn no_walls() -> ObstacleSet {
        ObstacleSet::default()
    }

    /// Occluder double that counts raycast calls (to observe the
    /// short-circuit ordering) and always reports clear.
    struct CountingOccluder {
        calls: Cell<u32>,
    }

    impl CountingOccluder {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Occluder for CountingOccluder {
        fn nearest_hit(&self, _origin: DVec3, _dir: DVec3, _max_dist: f64) -> Option<f64> {
            self.calls.set(self.calls.get() + 1);
            None
        }
    }

    #[test]
    fn test_sees_target_in_open() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        let target = Some(DVec3::new(0.0, 8.0, 0.0));
        assert!(can_see(&pose, &view, target, &no_walls()));
    }

    #[test]
    fn test_out_of_range() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        let target = Some(DVec3::new(0.0, view.view_distance + 1.0, 0.0));
        assert!(!can_see(&pose, &view, target, &no_walls()));
    }

    #[test]
    fn test_outside_cone() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        // Due East, 90° off the forward vector — well outside a 30° half-angle
        let target = Some(DVec3::new(8.0, 0.0, 0.0));
        assert!(!can_see(&pose, &view, target, &no_walls()));
    }

    #[test]
    fn test_blocked_by_wall() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        let target = Some(DVec3::new(0.0, 8.0, 0.0));
        let wall = ObstacleSet::new(vec![Aabb::new(
            DVec3::new(-3.0, 3.9, 0.0),
            DVec3::new(3.0, 4.1, 3.0),
        )]);
        assert!(!can_see(&pose, &view, target, &wall));
    }

    #[test]
    fn test_missing_target_is_not_visible() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        assert!(!can_see(&pose, &view, None, &no_walls()));
    }

    /// Range and angle rejections must short-circuit before the raycast.
    #[test]
    fn test_raycast_skipped_when_cheap_checks_fail() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        let counting = CountingOccluder::new();

        // Out of range: no raycast
        can_see(
            &pose,
            &view,
            Some(DVec3::new(0.0, 100.0, 0.0)),
            &counting,
        );
        assert_eq!(counting.calls.get(), 0, "range reject must skip raycast");

        // Outside cone: still no raycast
        can_see(&pose, &view, Some(DVec3::new(-8.0, 0.0, 0.0)), &counting);
        assert_eq!(counting.calls.get(), 0, "angle reject must skip raycast");

        // Visible candidate: exactly one raycast
        can_see(&pose, &view, Some(DVec3::new(0.0, 8.0, 0.0)), &counting);
        assert_eq!(counting.calls.get(), 1);
    }

    #[test]
    fn test_ray_at_eye_height_clears_low_cover() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        let target = Some(DVec3::new(0.0, 8.0, 0.0));
        // 1m crate between them — below the 1.5m eye line
        let cover = ObstacleSet::new(vec![Aabb::new(
            DVec3::new(-1.0, 3.5, 0.0),
            DVec3::new(1.0, 4.5, 1.0),
        )]);
        assert!(can_see(&pose, &view, target, &cover));
    }

    #[test]
    fn test_target_at_exact_view_distance_is_visible() {
        let pose = facing_north_at_origin();
        let view = ViewProfile::default();
        let target = Some(DVec3::new(0.0, view.view_distance, 0.0));
        assert!(can_see(&pose, &view, target, &no_walls()));
    }
}
