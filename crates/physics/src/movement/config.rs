//! Movement configuration constants.
//!
//! All movement parameters are grouped here for easy tuning. Values are
//! per-tick quantities at the fixed logical tick rate; they are applied
//! verbatim each step and never scaled by wall-clock time.

use serde::{Deserialize, Serialize};

use crate::collision::MoverBounds;

/// Configuration for player movement physics.
///
/// Distances are world units, velocities are world units per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    // ========================================================================
    // Player Dimensions
    // ========================================================================
    /// Collision half-width on X and Z.
    pub player_radius: f32,

    /// Collision height above the feet.
    pub player_height: f32,

    /// Eye height above the feet; the camera ray originates here.
    pub eye_height: f32,

    // ========================================================================
    // Horizontal Drive
    // ========================================================================
    /// Acceleration per tick while walking.
    pub walk_accel: f32,

    /// Acceleration per tick while sprinting.
    pub sprint_accel: f32,

    /// Multiplier applied to horizontal velocity each tick without input.
    pub friction: f32,

    /// Horizontal speed cap while walking.
    pub walk_speed_cap: f32,

    /// Horizontal speed cap while sprinting.
    pub sprint_speed_cap: f32,

    // ========================================================================
    // Vertical
    // ========================================================================
    /// Downward acceleration per tick.
    pub gravity: f32,

    /// Upward velocity set by a jump.
    pub jump_impulse: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            // Player dimensions
            player_radius: 0.3,
            player_height: 1.6,
            eye_height: 1.6,

            // Horizontal drive
            walk_accel: 0.09,
            sprint_accel: 0.15,
            friction: 0.91,       // ~9% speed lost per tick when idle
            walk_speed_cap: 0.03, // 1.8 units/second at 60 Hz
            sprint_speed_cap: 0.06,

            // Vertical
            gravity: 0.0005,
            jump_impulse: 0.08,
        }
    }
}

impl MovementConfig {
    /// Get the acceleration for the current sprint state.
    pub fn accel(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_accel
        } else {
            self.walk_accel
        }
    }

    /// Get the horizontal speed cap for the current sprint state.
    pub fn speed_cap(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed_cap
        } else {
            self.walk_speed_cap
        }
    }

    /// Collision box dimensions for the movement resolver.
    pub fn mover_bounds(&self) -> MoverBounds {
        MoverBounds {
            radius: self.player_radius,
            height: self.player_height,
        }
    }
}
