//! Room geometry construction.
//!
//! The play space is a single sealed box room built from six surfaces.
//! Registration order is fixed (floor, ceiling, -X, +X, -Z, +Z walls) so
//! ray-cast ties resolve the same way every run.

use chamber_physics::{Aabb, ConfigurationError, SurfaceRegistry};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Dimensions and spawn point for the sealed room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Interior edge length of the cubic room (world units).
    pub size: f32,

    /// Thickness of the floor, ceiling and walls.
    pub wall_thickness: f32,

    /// Player spawn position (feet).
    pub spawn_position: Vec3,

    /// Player spawn heading (radians); zero faces -Z.
    pub spawn_yaw: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            size: 20.0,
            wall_thickness: 0.5,
            spawn_position: Vec3::new(0.0, 1.0, 0.0),
            spawn_yaw: 0.0,
        }
    }
}

/// A sealed box room: floor, ceiling and four walls.
///
/// The floor's top face sits at y = 0 and the walls span the full height
/// from there to `size`. Walls are inset so their inner faces lie
/// `size / 2 - wall_thickness` from the center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// The configuration the room was built from.
    pub config: RoomConfig,

    /// The registered colliding surfaces.
    pub registry: SurfaceRegistry,
}

impl Room {
    /// Build a room from the given configuration.
    pub fn build(config: RoomConfig) -> Result<Self, ConfigurationError> {
        let half = config.size / 2.0;
        let half_thickness = config.wall_thickness / 2.0;

        let mut registry = SurfaceRegistry::new();

        // Floor, top face at y = 0
        registry.add_surface(Aabb::from_center_half_extents(
            Vec3::new(0.0, -half_thickness, 0.0),
            Vec3::new(half, half_thickness, half),
        ))?;

        // Ceiling
        registry.add_surface(Aabb::from_center_half_extents(
            Vec3::new(0.0, config.size - half_thickness, 0.0),
            Vec3::new(half, half_thickness, half),
        ))?;

        // X walls
        registry.add_surface(Aabb::from_center_half_extents(
            Vec3::new(-half + half_thickness, half, 0.0),
            Vec3::new(half_thickness, half, half),
        ))?;
        registry.add_surface(Aabb::from_center_half_extents(
            Vec3::new(half - half_thickness, half, 0.0),
            Vec3::new(half_thickness, half, half),
        ))?;

        // Z walls
        registry.add_surface(Aabb::from_center_half_extents(
            Vec3::new(0.0, half, -half + half_thickness),
            Vec3::new(half, half, half_thickness),
        ))?;
        registry.add_surface(Aabb::from_center_half_extents(
            Vec3::new(0.0, half, half - half_thickness),
            Vec3::new(half, half, half_thickness),
        ))?;

        Ok(Self { config, registry })
    }

    /// Build the standard 20-unit room.
    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::build(RoomConfig::default())
    }

    /// Inner face coordinate of the walls, measured from the center.
    pub fn inner_extent(&self) -> f32 {
        self.config.size / 2.0 - self.config.wall_thickness
    }
}
