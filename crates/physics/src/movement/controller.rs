//! Player movement controller.
//!
//! This is the main entry point for player movement. It takes input
//! commands and advances the movement state through the surface registry,
//! exactly one logical tick per call. Tick order is fixed: view angles,
//! horizontal drive, gravity, collision resolution, jump.

use glam::Vec3;

use crate::collision::{resolve_movement, SurfaceRegistry};

use super::config::MovementConfig;
use super::state::{GroundState, MoveCommand, PlayerState};

/// Player movement controller.
///
/// Handles all player movement physics:
/// - Input-driven acceleration and idle friction
/// - Walk/sprint speed caps
/// - Gravity and jumping
/// - Axis-separated collision response
///
/// The controller holds no per-player state; the same instance can drive
/// any number of [`PlayerState`] values.
///
/// # Example
///
/// ```ignore
/// let controller = PlayerController::new(MovementConfig::default());
/// let mut state = PlayerState::new(spawn_position);
///
/// // Each tick:
/// controller.update(&mut state, &command, &registry);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Movement configuration.
    pub config: MovementConfig,
}

/// Summary of one movement tick.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Horizontal speed measured after acceleration but before the speed
    /// cap and collision zeroing. The weapon bob advances on this value,
    /// so it keeps swinging while shoving against a wall.
    pub horizontal_speed: f32,
}

impl PlayerController {
    /// Create a new player controller with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(MovementConfig::default())
    }

    /// Advance player movement by one tick.
    ///
    /// # Arguments
    ///
    /// * `state` - The player's movement state (will be modified)
    /// * `command` - The player's input command for this tick
    /// * `registry` - The static surfaces to collide with
    pub fn update(
        &self,
        state: &mut PlayerState,
        command: &MoveCommand,
        registry: &SurfaceRegistry,
    ) -> MoveResult {
        self.update_view_angles(state, command);

        let horizontal_speed = self.apply_horizontal_drive(state, command);

        // Gravity applies every tick, grounded or not; the resolver zeroes
        // it against the floor and reports the support.
        state.velocity.y -= self.config.gravity;

        let resolution = resolve_movement(
            state.position,
            self.config.mover_bounds(),
            state.velocity,
            registry,
        );

        // Blocked components stay zeroed into the next tick.
        state.velocity = resolution.delta;
        state.ground = if resolution.grounded {
            GroundState::Grounded
        } else {
            GroundState::Airborne
        };

        if command.wants_jump() && state.ground.is_grounded() {
            log::debug!("jump: pos={:?}", state.position);
            state.velocity.y = self.config.jump_impulse;
            state.ground = GroundState::Airborne;
        }

        state.position += resolution.delta;

        MoveResult { horizontal_speed }
    }

    // ========================================================================
    // View Angles
    // ========================================================================

    fn update_view_angles(&self, state: &mut PlayerState, command: &MoveCommand) {
        state.pitch += command.view_delta.0;
        state.yaw += command.view_delta.1;

        // Clamp pitch to straight up/down.
        const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
        state.pitch = state.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Normalize yaw to -PI..PI
        while state.yaw > std::f32::consts::PI {
            state.yaw -= std::f32::consts::TAU;
        }
        while state.yaw < -std::f32::consts::PI {
            state.yaw += std::f32::consts::TAU;
        }
    }

    // ========================================================================
    // Horizontal Drive
    // ========================================================================

    /// Accelerate toward the movement intent, or decay with friction when
    /// there is none, then cap horizontal speed. Returns the pre-cap speed.
    fn apply_horizontal_drive(&self, state: &mut PlayerState, command: &MoveCommand) -> f32 {
        let forward = state.forward_direction();
        let right = state.right_direction();
        let intent =
            (forward * command.forward_move + right * command.right_move).normalize_or_zero();

        let sprinting = command.wants_sprint();

        if intent != Vec3::ZERO {
            let accel = self.config.accel(sprinting);
            state.velocity.x += intent.x * accel;
            state.velocity.z += intent.z * accel;
        } else {
            state.velocity.x *= self.config.friction;
            state.velocity.z *= self.config.friction;
        }

        let horizontal_speed = state.horizontal_speed();

        let cap = self.config.speed_cap(sprinting);
        if horizontal_speed > cap {
            let scale = cap / horizontal_speed;
            state.velocity.x *= scale;
            state.velocity.z *= scale;
        }

        horizontal_speed
    }
}

// ============================================================================
// Tests
// ============================================================================
