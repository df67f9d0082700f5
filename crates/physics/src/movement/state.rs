//! Movement state and input structures.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Whether the player currently has ground support.
///
/// Reassigned every tick from the collision resolution: a blocked downward
/// move lands the player, anything else leaves them airborne.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundState {
    /// Supported from below; jumping is allowed.
    Grounded,
    /// No support this tick.
    #[default]
    Airborne,
}

impl GroundState {
    /// Check for ground support.
    #[inline]
    pub fn is_grounded(self) -> bool {
        matches!(self, Self::Grounded)
    }
}

/// Complete kinematic state for the player.
///
/// Position is the feet anchor of the collision box. Velocity is in world
/// units per tick.
///
/// View angles in radians:
/// - Yaw: heading around the world up axis, wrapped to -PI..PI.
///   Zero faces -Z; positive turns counter-clockwise seen from above.
/// - Pitch: look elevation, clamped to -PI/2..PI/2, positive looking up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Feet position in world space.
    pub position: Vec3,

    /// Velocity in world units per tick.
    pub velocity: Vec3,

    /// Heading (radians).
    pub yaw: f32,

    /// Look elevation (radians).
    pub pitch: f32,

    /// Ground support state.
    pub ground: GroundState,
}

impl PlayerState {
    /// Create a player state at rest at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            ground: GroundState::Airborne,
        }
    }

    /// Get the forward direction for the current yaw (horizontal only).
    pub fn forward_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(-sin_yaw, 0.0, -cos_yaw)
    }

    /// Get the right direction for the current yaw (horizontal only).
    pub fn right_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    /// Get the full look direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        Vec3::new(
            -cos_pitch * sin_yaw,
            sin_pitch,
            -cos_pitch * cos_yaw,
        )
    }

    /// Get the eye position (for camera placement and aim rays).
    pub fn eye_position(&self, eye_height: f32) -> Vec3 {
        self.position + Vec3::new(0.0, eye_height, 0.0)
    }

    /// Get current horizontal speed.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

/// Input command for a single tick.
///
/// This represents the player's intent: movement axes, accumulated view
/// rotation, and held buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveCommand {
    /// Forward/backward movement (-1.0 to 1.0).
    /// Positive = forward, negative = backward.
    pub forward_move: f32,

    /// Strafe left/right (-1.0 to 1.0).
    /// Positive = right, negative = left.
    pub right_move: f32,

    /// View angle delta this tick (radians).
    /// (pitch_delta, yaw_delta)
    pub view_delta: (f32, f32),

    /// Button states.
    pub buttons: CommandButtons,
}

/// Button state flags for movement commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandButtons(pub u16);

impl CommandButtons {
    /// Jump button.
    pub const JUMP: u16 = 1 << 0;

    /// Sprint button.
    pub const SPRINT: u16 = 1 << 1;

    /// Check if a button is pressed.
    #[inline]
    pub fn pressed(self, button: u16) -> bool {
        (self.0 & button) != 0
    }

    /// Press a button.
    #[inline]
    pub fn press(&mut self, button: u16) {
        self.0 |= button;
    }
}

impl MoveCommand {
    /// Check if jump is requested.
    #[inline]
    pub fn wants_jump(&self) -> bool {
        self.buttons.pressed(CommandButtons::JUMP)
    }

    /// Check if sprint is requested.
    #[inline]
    pub fn wants_sprint(&self) -> bool {
        self.buttons.pressed(CommandButtons::SPRINT)
    }
}
