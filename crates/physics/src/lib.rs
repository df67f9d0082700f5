//! Chamber Physics
//!
//! A deterministic first-person movement and collision core for a static
//! boxed room. Everything runs on a fixed logical tick with per-tick
//! constants, so the same inputs always produce the same state.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Collision**: Registers static box surfaces, casts rays against them,
//!   and resolves proposed displacements one axis at a time
//! - **Movement**: Uses the collision queries to implement player movement
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same inputs always produce same outputs
//! 2. **Simplicity**: Discrete axis-separated tests, no swept collision
//! 3. **Fixed tick**: Tuning constants are per-tick, never scaled by time

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{
    cast, resolve_movement, Aabb, ConfigurationError, MoveResolution, MoverBounds, Ray, RayHit,
    Surface, SurfaceId, SurfaceRegistry,
};
pub use movement::{
    CommandButtons, GroundState, MoveCommand, MoveResult, MovementConfig, PlayerController,
    PlayerState,
};
