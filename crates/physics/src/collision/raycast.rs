//! Ray casting against registered surfaces.
//!
//! Uses the slab method: per-axis entry/exit intervals intersected across
//! the three axes. The reported hit normal is the outward face normal of
//! the entry axis, which always points against the ray on that axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::registry::{SurfaceId, SurfaceRegistry};

/// Direction components smaller than this are treated as parallel to the
/// slab planes.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    /// Starting point.
    pub origin: Vec3,
    /// Unit direction, or zero if constructed from a zero vector.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A successful ray cast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vec3,
    /// Outward face normal at the point of entry.
    pub normal: Vec3,
    /// The surface that was hit.
    pub surface: SurfaceId,
}

/// Cast a ray against every registered surface and return the nearest hit.
///
/// Exact-distance ties go to the surface registered first. `None` means
/// nothing was hit; callers treat that as a silent no-op.
pub fn cast(ray: &Ray, registry: &SurfaceRegistry) -> Option<RayHit> {
    if ray.direction == Vec3::ZERO {
        return None;
    }

    let mut nearest: Option<RayHit> = None;

    for surface in registry.surfaces() {
        if let Some((distance, normal)) = intersect_aabb(ray, &surface.bounds) {
            let closer = nearest.as_ref().map_or(true, |hit| distance < hit.distance);
            if closer {
                nearest = Some(RayHit {
                    distance,
                    point: ray.point_at(distance),
                    normal,
                    surface: surface.id,
                });
            }
        }
    }

    nearest
}

/// Slab-method entry test for a single box.
///
/// Returns the entry distance and entry-face normal. Rays that miss, point
/// away, or start inside the box (entry behind the origin) return `None`.
fn intersect_aabb(ray: &Ray, bounds: &Aabb) -> Option<(f32, Vec3)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_normal = Vec3::ZERO;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        let min = bounds.min[axis];
        let max = bounds.max[axis];

        if dir.abs() < PARALLEL_EPSILON {
            // Parallel to this slab: a miss unless the origin lies inside it.
            if origin < min || origin > max {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let mut t_near = (min - origin) * inv;
        let mut t_far = (max - origin) * inv;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        if t_near > t_enter {
            t_enter = t_near;
            // Entry is through the face that points back along the ray.
            entry_normal = Vec3::ZERO;
            entry_normal[axis] = if dir > 0.0 { -1.0 } else { 1.0 };
        }
        t_exit = t_exit.min(t_far);

        if t_enter > t_exit {
            return None;
        }
    }

    // Entry must lie ahead of the origin. A ray starting inside the box has
    // its entry behind it and reports no hit.
    if t_enter < 0.0 {
        return None;
    }

    Some((t_enter, entry_normal))
}
