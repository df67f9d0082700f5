//! Static surface registry.
//!
//! The registry owns every colliding surface in the room. It is filled once
//! during setup and read-only afterwards. Iteration order is insertion
//! order; the ray caster relies on it to break exact-distance ties the same
//! way every run.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aabb::Aabb;

/// Stable identifier for a registered surface.
pub type SurfaceId = u32;

/// Error raised when the registry is handed invalid geometry.
///
/// All validation happens at setup time; simulation queries never see
/// invalid surfaces.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The surface box had zero or negative extent on some axis.
    #[error("degenerate surface: min {min} must be strictly below max {max} on every axis")]
    DegenerateSurface { min: Vec3, max: Vec3 },
}

/// A static colliding surface.
///
/// Outward face normals are not stored; the ray caster and the movement
/// resolver derive them per contact axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Surface {
    /// Identifier assigned at registration.
    pub id: SurfaceId,
    /// World-space bounds.
    pub bounds: Aabb,
}

/// Ordered collection of static surfaces.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SurfaceRegistry {
    surfaces: Vec<Surface>,
    next_id: SurfaceId,
}

impl SurfaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface and return its id.
    ///
    /// Ids are assigned sequentially from zero. Degenerate boxes are
    /// rejected here so that queries never meet one.
    pub fn add_surface(&mut self, bounds: Aabb) -> Result<SurfaceId, ConfigurationError> {
        if bounds.is_degenerate() {
            return Err(ConfigurationError::DegenerateSurface {
                min: bounds.min,
                max: bounds.max,
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.surfaces.push(Surface { id, bounds });
        Ok(id)
    }

    /// All registered surfaces in insertion order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Number of registered surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}
