//! Player input handling.
//!
//! This module converts a raw per-frame input snapshot (held keys, mouse
//! motion, queued one-shot events) into commands for the physics system.
//! The snapshot is immutable for the duration of the tick it feeds.

use chamber_physics::movement::{CommandButtons, MoveCommand};
use serde::{Deserialize, Serialize};

/// The two portal marker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerColor {
    Blue,
    Orange,
}

/// A one-shot action queued between frames.
///
/// Events accumulate in arrival order while a frame is being prepared and
/// are drained exactly once by the tick that consumes the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Fire the hitscan weapon.
    Fire,
    /// Place the marker of the given color at the aim point.
    PlaceMarker(MarkerColor),
    /// Refill the magazine.
    Reload,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Held action key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HeldActions {
    pub jump: bool,
    pub sprint: bool,
}

/// Complete input snapshot for a single tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Movement keys held this frame.
    pub movement: MovementInput,

    /// Action keys held this frame.
    pub held: HeldActions,

    /// Accumulated mouse delta since the previous frame (pixels).
    pub mouse_delta: (f32, f32),

    /// One-shot events queued since the previous frame, in arrival order.
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    /// Convert to a physics command.
    ///
    /// # Arguments
    ///
    /// * `mouse_sensitivity` - Radians of rotation per pixel of mouse motion
    pub fn to_command(&self, mouse_sensitivity: f32) -> MoveCommand {
        let mut cmd = MoveCommand::default();

        // Movement axes
        if self.movement.forward {
            cmd.forward_move += 1.0;
        }
        if self.movement.backward {
            cmd.forward_move -= 1.0;
        }
        if self.movement.right {
            cmd.right_move += 1.0;
        }
        if self.movement.left {
            cmd.right_move -= 1.0;
        }

        // Normalize diagonal movement
        let move_magnitude = (cmd.forward_move.powi(2) + cmd.right_move.powi(2)).sqrt();
        if move_magnitude > 1.0 {
            cmd.forward_move /= move_magnitude;
            cmd.right_move /= move_magnitude;
        }

        // View angles (convert mouse pixels to radians).
        // Both axes are negated: mouse right turns right, which is negative
        // yaw here, and mouse down looks down, which is negative pitch.
        cmd.view_delta = (
            -self.mouse_delta.1 * mouse_sensitivity, // Pitch (Y mouse = pitch)
            -self.mouse_delta.0 * mouse_sensitivity, // Yaw (X mouse = yaw)
        );

        // Held buttons
        if self.held.jump {
            cmd.buttons.press(CommandButtons::JUMP);
        }
        if self.held.sprint {
            cmd.buttons.press(CommandButtons::SPRINT);
        }

        cmd
    }

    /// Check if any movement key is held.
    pub fn has_movement(&self) -> bool {
        self.movement.forward
            || self.movement.backward
            || self.movement.left
            || self.movement.right
    }
}
