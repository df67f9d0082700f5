//! Collision queries against static room geometry.
//!
//! Everything here is axis-aligned boxes. The registry is filled once at
//! setup, with degenerate boxes rejected, and is read-only during
//! simulation.
//!
//! # Key Types
//!
//! - [`SurfaceRegistry`]: the ordered set of static surfaces
//! - [`Ray`] / [`RayHit`]: slab-method ray casting via [`cast`]
//! - [`resolve_movement`]: axis-separated movement resolution
//!
//! Both queries derive outward face normals per axis instead of storing
//! them with the geometry.

mod aabb;
mod raycast;
mod registry;
mod resolve;

pub use aabb::Aabb;
pub use raycast::{cast, Ray, RayHit};
pub use registry::{ConfigurationError, Surface, SurfaceId, SurfaceRegistry};
pub use resolve::{resolve_movement, MoveResolution, MoverBounds};
