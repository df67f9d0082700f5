//! Axis-separated movement resolution.
//!
//! A proposed displacement is resolved one axis at a time in the fixed
//! order X, Z, Y. Each axis is tested in isolation: the mover's box is
//! rebuilt at the original position offset on that axis alone, so a wall
//! that blocks X leaves Z untouched and the mover slides along it. A
//! blocked axis has its displacement zeroed; a blocked downward Y reports
//! ground support.
//!
//! Because a blocking test zeroes the displacement without moving, a mover
//! always comes to rest strictly short of the surface it hit. Resting
//! contact therefore never reads as overlap when the other axes are tested
//! on later ticks, which is what lets a grounded mover keep walking.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::registry::SurfaceRegistry;

/// Feet-anchored box dimensions for a moving body.
///
/// The box spans `radius` to each side on X and Z, and `height` upward
/// from the anchor on Y.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoverBounds {
    /// Half-width on X and Z.
    pub radius: f32,
    /// Full height above the anchor.
    pub height: f32,
}

impl MoverBounds {
    /// Build the world-space box for an anchor position.
    pub fn aabb_at(&self, position: Vec3) -> Aabb {
        Aabb::new(
            Vec3::new(position.x - self.radius, position.y, position.z - self.radius),
            Vec3::new(
                position.x + self.radius,
                position.y + self.height,
                position.z + self.radius,
            ),
        )
    }
}

/// Outcome of resolving a proposed displacement.
#[derive(Debug, Clone, Copy)]
pub struct MoveResolution {
    /// The displacement with blocked axes zeroed.
    pub delta: Vec3,
    /// Whether a downward Y displacement was blocked this step.
    pub grounded: bool,
}

/// Resolve a proposed displacement against the registered surfaces.
///
/// The axis order X, Z, Y is part of the contract: it decides which axis
/// gives way on corner contact. Overlap is inclusive, so touching counts
/// as blocked.
pub fn resolve_movement(
    position: Vec3,
    bounds: MoverBounds,
    delta: Vec3,
    registry: &SurfaceRegistry,
) -> MoveResolution {
    let mut resolved = delta;
    let mut grounded = false;

    if blocked(position + Vec3::new(resolved.x, 0.0, 0.0), bounds, registry) {
        resolved.x = 0.0;
    }

    if blocked(position + Vec3::new(0.0, 0.0, resolved.z), bounds, registry) {
        resolved.z = 0.0;
    }

    if blocked(position + Vec3::new(0.0, resolved.y, 0.0), bounds, registry) {
        if resolved.y < 0.0 {
            grounded = true;
        }
        resolved.y = 0.0;
    }

    MoveResolution {
        delta: resolved,
        grounded,
    }
}

fn blocked(position: Vec3, bounds: MoverBounds, registry: &SurfaceRegistry) -> bool {
    let mover = bounds.aabb_at(position);
    registry
        .surfaces()
        .iter()
        .any(|surface| mover.overlaps(&surface.bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: MoverBounds = MoverBounds {
        radius: 0.3,
        height: 1.6,
    };

    /// Floor with its top at y = 0 plus a wall whose inner face is x = 9.5.
    fn floor_and_wall() -> SurfaceRegistry {
        let mut registry = SurfaceRegistry::new();
        registry
            .add_surface(Aabb::new(
                Vec3::new(-10.0, -0.5, -10.0),
                Vec3::new(10.0, 0.0, 10.0),
            ))
            .unwrap();
        registry
            .add_surface(Aabb::new(
                Vec3::new(9.5, 0.0, -10.0),
                Vec3::new(10.0, 20.0, 10.0),
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_free_movement_passes_through() {
        let registry = floor_and_wall();
        let delta = Vec3::new(0.1, 0.05, -0.1);

        let resolution = resolve_movement(Vec3::new(0.0, 1.0, 0.0), BOUNDS, delta, &registry);
        assert_eq!(resolution.delta, delta);
        assert!(!resolution.grounded);
    }

    #[test]
    fn test_blocked_x_preserves_z() {
        let registry = floor_and_wall();

        // Box reaches x = 9.3; moving +0.3 on x would cross the wall face.
        let position = Vec3::new(9.0, 0.5, 0.0);
        let resolution =
            resolve_movement(position, BOUNDS, Vec3::new(0.3, 0.0, 0.3), &registry);

        assert_eq!(resolution.delta.x, 0.0, "wall must block x");
        assert_eq!(resolution.delta.z, 0.3, "z must keep its full displacement");
    }

    #[test]
    fn test_landing_reports_grounded() {
        let registry = floor_and_wall();

        let resolution = resolve_movement(
            Vec3::new(0.0, 0.2, 0.0),
            BOUNDS,
            Vec3::new(0.0, -0.3, 0.0),
            &registry,
        );

        assert_eq!(resolution.delta.y, 0.0, "floor must block the fall");
        assert!(resolution.grounded);
    }

    #[test]
    fn test_ceiling_block_is_not_grounded() {
        let mut registry = SurfaceRegistry::new();
        registry
            .add_surface(Aabb::new(
                Vec3::new(-10.0, 19.5, -10.0),
                Vec3::new(10.0, 20.0, 10.0),
            ))
            .unwrap();

        let resolution = resolve_movement(
            Vec3::new(0.0, 18.0, 0.0),
            BOUNDS,
            Vec3::new(0.0, 0.3, 0.0),
            &registry,
        );

        assert_eq!(resolution.delta.y, 0.0, "ceiling must block the rise");
        assert!(!resolution.grounded, "an upward block is not ground support");
    }

    #[test]
    fn test_touching_blocks() {
        let registry = floor_and_wall();

        // Exactly reaching the floor top counts as contact.
        let resolution = resolve_movement(
            Vec3::new(0.0, 0.1, 0.0),
            BOUNDS,
            Vec3::new(0.0, -0.1, 0.0),
            &registry,
        );
        assert_eq!(resolution.delta.y, 0.0);
        assert!(resolution.grounded);
    }

    #[test]
    fn test_corner_blocks_both_horizontal_axes() {
        let mut registry = floor_and_wall();
        // Second wall with its inner face at z = 9.5.
        registry
            .add_surface(Aabb::new(
                Vec3::new(-10.0, 0.0, 9.5),
                Vec3::new(10.0, 20.0, 10.0),
            ))
            .unwrap();

        let position = Vec3::new(9.0, 0.5, 9.0);
        let resolution =
            resolve_movement(position, BOUNDS, Vec3::new(0.3, 0.0, 0.3), &registry);

        assert_eq!(resolution.delta.x, 0.0);
        assert_eq!(resolution.delta.z, 0.0);
    }

    #[test]
    fn test_resolved_moves_never_interpenetrate() {
        // Positive-volume overlap, i.e. strict on every axis.
        fn interpenetrates(a: &Aabb, b: &Aabb) -> bool {
            a.min.x < b.max.x
                && a.max.x > b.min.x
                && a.min.y < b.max.y
                && a.max.y > b.min.y
                && a.min.z < b.max.z
                && a.max.z > b.min.z
        }

        let registry = floor_and_wall();
        let position = Vec3::new(9.0, 0.3, 0.0);

        for ix in -4i32..=4 {
            for iy in -4i32..=4 {
                for iz in -4i32..=4 {
                    let delta = Vec3::new(
                        ix as f32 * 0.1,
                        iy as f32 * 0.1,
                        iz as f32 * 0.1,
                    );
                    let resolution = resolve_movement(position, BOUNDS, delta, &registry);
                    let settled = BOUNDS.aabb_at(position + resolution.delta);

                    for surface in registry.surfaces() {
                        assert!(
                            !interpenetrates(&settled, &surface.bounds),
                            "delta {delta} settled inside surface {}",
                            surface.id
                        );
                    }
                }
            }
        }
    }
}
