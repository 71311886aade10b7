//! Static obstacle geometry and nearest-hit ray intersection.
//!
//! The obstacle set holds only static scenery (walls, cover). Dynamic
//! actors are never added to it, so sight rays cannot be blocked by
//! the very target they are checking.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Anything a sight ray can be blocked by.
///
/// `nearest_hit` returns the distance along the (unit) direction to the
/// first intersection within `max_dist`, or `None` for a clear ray.
/// Implementations must be read-only; multiple guards query the same
/// geometry concurrently.
pub trait Occluder {
    fn nearest_hit(&self, origin: DVec3, dir: DVec3, max_dist: f64) -> Option<f64>;

    /// Whether anything blocks the segment between two points.
    fn blocks_segment(&self, from: DVec3, to: DVec3) -> bool {
        let delta = to - from;
        let dist = delta.length();
        if dist <= f64::EPSILON {
            return false;
        }
        self.nearest_hit(from, delta / dist, dist).is_some()
    }
}

/// Axis-aligned box obstacle (meters, world space).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// A vertical wall/box from a footprint center, half-extents, and height.
    pub fn block(center: DVec3, half_extents: DVec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Slab-method ray intersection. `dir` must be unit length.
    /// Returns the entry distance of the nearest hit in `[0, max_dist]`.
    pub fn ray_hit(&self, origin: DVec3, dir: DVec3, max_dist: f64) -> Option<f64> {
        let mut t_min = 0.0f64;
        let mut t_max = max_dist;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let lo = self.min[axis];
            let hi = self.max[axis];

            if d.abs() < 1e-12 {
                // Ray parallel to this slab: must already be inside it.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (t0, t1) = if inv >= 0.0 {
                ((lo - o) * inv, (hi - o) * inv)
            } else {
                ((hi - o) * inv, (lo - o) * inv)
            };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}

/// The static scenery a level's sight rays are tested against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSet {
    boxes: Vec<Aabb>,
}

impl ObstacleSet {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn push(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl Occluder for ObstacleSet {
    fn nearest_hit(&self, origin: DVec3, dir: DVec3, max_dist: f64) -> Option<f64> {
        let mut nearest: Option<f64> = None;
        for b in &self.boxes {
            if let Some(t) = b.ray_hit(origin, dir, max_dist) {
                nearest = Some(match nearest {
                    Some(n) => n.min(t),
                    None => t,
                });
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_dir(v: DVec3) -> DVec3 {
        v / v.length()
    }

    #[test]
    fn test_ray_hits_box_front_face() {
        let b = Aabb::new(DVec3::new(-1.0, 4.0, 0.0), DVec3::new(1.0, 6.0, 3.0));
        let origin = DVec3::new(0.0, 0.0, 1.5);
        let dir = DVec3::new(0.0, 1.0, 0.0);
        let t = b.ray_hit(origin, dir, 20.0).expect("should hit");
        assert!((t - 4.0).abs() < 1e-9, "hit at front face y=4, got {t}");
    }

    #[test]
    fn test_ray_misses_box_to_the_side() {
        let b = Aabb::new(DVec3::new(-1.0, 4.0, 0.0), DVec3::new(1.0, 6.0, 3.0));
        let origin = DVec3::new(5.0, 0.0, 1.5);
        let dir = DVec3::new(0.0, 1.0, 0.0);
        assert!(b.ray_hit(origin, dir, 20.0).is_none());
    }

    #[test]
    fn test_ray_stops_at_max_dist() {
        let b = Aabb::new(DVec3::new(-1.0, 10.0, 0.0), DVec3::new(1.0, 12.0, 3.0));
        let origin = DVec3::new(0.0, 0.0, 1.5);
        let dir = DVec3::new(0.0, 1.0, 0.0);
        assert!(b.ray_hit(origin, dir, 5.0).is_none());
        assert!(b.ray_hit(origin, dir, 15.0).is_some());
    }

    #[test]
    fn test_ray_over_wall_clears() {
        // 2m wall, ray travelling at 3m height
        let b = Aabb::new(DVec3::new(-5.0, 4.9, 0.0), DVec3::new(5.0, 5.1, 2.0));
        let origin = DVec3::new(0.0, 0.0, 3.0);
        let dir = DVec3::new(0.0, 1.0, 0.0);
        assert!(b.ray_hit(origin, dir, 20.0).is_none());
    }

    #[test]
    fn test_ray_starting_inside_hits_at_zero() {
        let b = Aabb::new(DVec3::new(-1.0, -1.0, -1.0), DVec3::new(1.0, 1.0, 1.0));
        let t = b
            .ray_hit(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), 10.0)
            .expect("inside start should count as hit");
        assert!(t.abs() < 1e-9);
    }

    #[test]
    fn test_obstacle_set_returns_nearest() {
        let set = ObstacleSet::new(vec![
            Aabb::new(DVec3::new(-1.0, 8.0, 0.0), DVec3::new(1.0, 9.0, 3.0)),
            Aabb::new(DVec3::new(-1.0, 3.0, 0.0), DVec3::new(1.0, 4.0, 3.0)),
        ]);
        let t = set
            .nearest_hit(DVec3::new(0.0, 0.0, 1.5), DVec3::new(0.0, 1.0, 0.0), 20.0)
            .expect("should hit the near box");
        assert!((t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_blocks_segment() {
        let set = ObstacleSet::new(vec![Aabb::new(
            DVec3::new(-1.0, 3.0, 0.0),
            DVec3::new(1.0, 4.0, 3.0),
        )]);
        let a = DVec3::new(0.0, 0.0, 1.5);
        let b = DVec3::new(0.0, 10.0, 1.5);
        assert!(set.blocks_segment(a, b));
        // Segment that ends before the wall
        assert!(!set.blocks_segment(a, DVec3::new(0.0, 2.5, 1.5)));
        // Degenerate segment
        assert!(!set.blocks_segment(a, a));
    }

    #[test]
    fn test_diagonal_ray_hit() {
        let b = Aabb::new(DVec3::new(4.0, 4.0, 0.0), DVec3::new(6.0, 6.0, 3.0));
        let origin = DVec3::new(0.0, 0.0, 1.0);
        let dir = unit_dir(DVec3::new(1.0, 1.0, 0.0));
        let t = b.ray_hit(origin, dir, 20.0).expect("diagonal hit");
        // Entry at (4,4): distance 4*sqrt(2)
        assert!((t - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }
}
