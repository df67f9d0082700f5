//! Game simulation - the main per-tick step.
//!
//! This module owns all mutable state and advances it deterministically
//! from input snapshots. Replaying the same snapshots from the same room
//! always reproduces the same run.

use chamber_physics::{ConfigurationError, MovementConfig, PlayerController, PlayerState, Ray};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::{FrameInput, InputEvent, MarkerColor};
use crate::interaction::{Decal, InteractionConfig, InteractionState, PortalMarker};
use crate::room::Room;
use crate::viewmodel::{ViewModel, ViewModelConfig};

/// Game simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second). The per-tick movement
    /// constants assume this rate; the step itself never reads the clock.
    pub tick_rate: u32,

    /// Movement physics configuration.
    pub movement: MovementConfig,

    /// Shooting and placement configuration.
    pub interaction: InteractionConfig,

    /// Weapon view-model configuration.
    pub view: ViewModelConfig,

    /// Mouse sensitivity (radians per pixel).
    pub mouse_sensitivity: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            movement: MovementConfig::default(),
            interaction: InteractionConfig::default(),
            view: ViewModelConfig::default(),
            mouse_sensitivity: 0.002,
        }
    }
}

impl SimulationConfig {
    /// Get the time step per tick in seconds, for frame drivers.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// Everything a renderer needs from one completed tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Tick number just completed.
    pub frame: u64,

    /// Player feet position.
    pub position: Vec3,

    /// Camera origin.
    pub eye_position: Vec3,

    /// Heading (radians).
    pub yaw: f32,

    /// Look elevation (radians).
    pub pitch: f32,

    /// Whether the player has ground support.
    pub grounded: bool,

    /// Rounds remaining.
    pub ammo: u32,

    /// Decals created this tick, in firing order.
    pub new_decals: Vec<Decal>,

    /// Blue marker state.
    pub blue_marker: PortalMarker,

    /// Orange marker state.
    pub orange_marker: PortalMarker,

    /// Whether a shot fired this tick (the view kick signal).
    pub recoil_triggered: bool,

    /// Weapon view-model offset from the camera.
    pub weapon_offset: Vec3,

    /// Accumulated view-bob phase.
    pub bob_phase: f32,
}

/// The main game simulation.
///
/// Contains all game state and advances it deterministically from input
/// snapshots: movement first, then the queued one-shot events, then the
/// weapon cosmetics.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// The room being played in.
    pub room: Room,

    /// Player kinematic state.
    pub player: PlayerState,

    /// Ammo, decals and markers.
    pub interaction: InteractionState,

    /// Weapon view-model state.
    pub view: ViewModel,

    /// Movement physics controller.
    movement_controller: PlayerController,
}

impl Simulation {
    /// Create a new simulation with the given configuration and room.
    ///
    /// The player spawns at the room's spawn point, airborne; the first
    /// ticks settle them onto the floor.
    pub fn new(config: SimulationConfig, room: Room) -> Self {
        let movement_controller = PlayerController::new(config.movement.clone());
        let interaction = InteractionState::new(config.interaction.clone());
        let view = ViewModel::new(config.view.clone());

        let mut player = PlayerState::new(room.config.spawn_position);
        player.yaw = room.config.spawn_yaw;

        Self {
            frame: 0,
            config,
            room,
            player,
            interaction,
            view,
            movement_controller,
        }
    }

    /// Create a simulation with default configuration in the standard room.
    pub fn standard() -> Result<Self, ConfigurationError> {
        Ok(Self::new(SimulationConfig::default(), Room::standard()?))
    }

    /// Advance the simulation by one tick.
    ///
    /// Order within the tick is fixed: orientation and movement first,
    /// then the queued one-shot events in arrival order (their aim rays
    /// use the post-move camera pose), then the weapon cosmetics.
    pub fn tick(&mut self, input: &FrameInput) -> FrameOutput {
        let command = input.to_command(self.config.mouse_sensitivity);

        let move_result =
            self.movement_controller
                .update(&mut self.player, &command, &self.room.registry);

        let mut new_decals = Vec::new();
        let mut recoil_triggered = false;

        let aim = self.camera_ray();
        for event in &input.events {
            match event {
                InputEvent::Fire => {
                    let outcome = self.interaction.fire_shot(&aim, &self.room.registry);
                    if outcome.fired {
                        recoil_triggered = true;
                        self.view.trigger_recoil();
                    }
                    if let Some(decal) = outcome.decal {
                        new_decals.push(decal);
                    }
                }
                InputEvent::PlaceMarker(color) => {
                    self.interaction.place_marker(*color, &aim, &self.room.registry);
                }
                InputEvent::Reload => {
                    self.interaction.reload();
                }
            }
        }

        self.view.update(move_result.horizontal_speed, command.wants_sprint());

        self.frame += 1;

        FrameOutput {
            frame: self.frame,
            position: self.player.position,
            eye_position: self.eye_position(),
            yaw: self.player.yaw,
            pitch: self.player.pitch,
            grounded: self.player.ground.is_grounded(),
            ammo: self.interaction.ammo(),
            new_decals,
            blue_marker: *self.interaction.marker(MarkerColor::Blue),
            orange_marker: *self.interaction.marker(MarkerColor::Orange),
            recoil_triggered,
            weapon_offset: self.view.weapon_offset(),
            bob_phase: self.view.bob_phase(),
        }
    }

    /// Get the camera origin for the current state.
    pub fn eye_position(&self) -> Vec3 {
        self.player.eye_position(self.config.movement.eye_height)
    }

    /// Get the aim ray used for shooting and marker placement.
    pub fn camera_ray(&self) -> Ray {
        Ray::new(self.eye_position(), self.player.look_direction())
    }

    /// Get the delta time for this simulation.
    pub fn delta_time(&self) -> f32 {
        self.config.delta_time()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn walk_forward() -> FrameInput {
        let mut input = FrameInput::default();
        input.movement.forward = true;
        input
    }

    fn with_events(events: Vec<InputEvent>) -> FrameInput {
        FrameInput {
            events,
            ..Default::default()
        }
    }

    /// Run idle ticks so the spawned player settles on the floor.
    fn settled_simulation() -> Simulation {
        let mut sim = Simulation::standard().unwrap();
        for _ in 0..150 {
            sim.tick(&idle());
        }
        sim
    }

    #[test]
    fn test_simulation_creation() {
        let sim = Simulation::standard().unwrap();
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.player.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sim.player.yaw, 0.0);
        assert_eq!(sim.interaction.ammo(), 12);
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = Simulation::standard().unwrap();

        let output = sim.tick(&idle());
        assert_eq!(output.frame, 1);
        assert_eq!(sim.frame, 1);

        let output = sim.tick(&idle());
        assert_eq!(output.frame, 2);
    }

    #[test]
    fn test_spawn_settles_onto_floor() {
        let sim = settled_simulation();
        assert!(sim.player.ground.is_grounded());
        assert!(
            sim.player.position.y >= 0.0 && sim.player.position.y < 0.001,
            "should rest just above the floor, got y={}",
            sim.player.position.y
        );
    }

    #[test]
    fn test_forward_movement_runs_toward_negative_z() {
        let mut sim = settled_simulation();

        for _ in 0..60 {
            sim.tick(&walk_forward());
        }

        assert!(sim.player.position.z < -1.0, "spawn yaw faces -z");
        assert!(sim.player.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_wall_stops_the_player() {
        let mut sim = settled_simulation();

        // Far longer than the room takes to cross.
        for _ in 0..2000 {
            sim.tick(&walk_forward());
        }

        let limit = -(sim.room.inner_extent() - sim.config.movement.player_radius);
        assert!(
            sim.player.position.z > limit - 1e-4,
            "wall must stop the player at z={}, got {}",
            limit,
            sim.player.position.z
        );
        assert!(sim.player.position.z < limit + 0.1, "should be pressed up against the wall");

        let output = sim.tick(&walk_forward());
        assert!(output.grounded, "shoving the wall must not break ground contact");
    }

    #[test]
    fn test_fire_spends_ammo_and_reports_decal() {
        let mut sim = settled_simulation();

        let output = sim.tick(&with_events(vec![InputEvent::Fire]));

        assert_eq!(output.ammo, 11);
        assert!(output.recoil_triggered);
        assert_eq!(output.new_decals.len(), 1);

        // Facing -z from spawn, the shot lands on the far wall's inner face.
        let decal = output.new_decals[0];
        assert!((decal.position.z + 9.5).abs() < 1e-4);
        assert_eq!(decal.normal, Vec3::new(0.0, 0.0, 1.0));

        // The recoil kick shows up after one recovery step.
        assert!((output.weapon_offset.z + 0.51).abs() < 1e-6);
    }

    #[test]
    fn test_dry_fire_has_no_effect() {
        let mut sim = settled_simulation();
        sim.config.interaction.ammo_capacity = 1;
        sim.interaction = InteractionState::new(sim.config.interaction.clone());

        let output = sim.tick(&with_events(vec![InputEvent::Fire]));
        assert_eq!(output.ammo, 0);
        assert!(output.recoil_triggered);

        let output = sim.tick(&with_events(vec![InputEvent::Fire]));
        assert_eq!(output.ammo, 0);
        assert!(!output.recoil_triggered, "dry fire must not kick the weapon");
        assert!(output.new_decals.is_empty());
    }

    #[test]
    fn test_events_drain_in_arrival_order() {
        let mut sim = settled_simulation();
        sim.config.interaction.ammo_capacity = 1;
        sim.interaction = InteractionState::new(sim.config.interaction.clone());

        // Fire empties the magazine, the second fire is dry, then reload.
        let output = sim.tick(&with_events(vec![
            InputEvent::Fire,
            InputEvent::Fire,
            InputEvent::Reload,
        ]));

        assert_eq!(output.new_decals.len(), 1, "only the first shot fires");
        assert_eq!(output.ammo, 1, "reload lands after both shots");
    }

    #[test]
    fn test_marker_events_place_markers() {
        let mut sim = settled_simulation();

        let output = sim.tick(&with_events(vec![
            InputEvent::PlaceMarker(MarkerColor::Blue),
        ]));

        assert!(output.blue_marker.active);
        assert!(!output.orange_marker.active);
        assert!((output.blue_marker.position.z + 9.5).abs() < 1e-4);
        assert_eq!(output.blue_marker.normal, Vec3::new(0.0, 0.0, 1.0));

        let output = sim.tick(&with_events(vec![
            InputEvent::PlaceMarker(MarkerColor::Orange),
        ]));
        assert!(output.blue_marker.active, "blue marker survives");
        assert!(output.orange_marker.active);
    }

    #[test]
    fn test_jump_input_lifts_player() {
        let mut sim = settled_simulation();
        let rest_y = sim.player.position.y;

        let mut input = FrameInput::default();
        input.held.jump = true;
        sim.tick(&input);

        let output = sim.tick(&idle());
        assert!(!output.grounded);
        assert!(sim.player.position.y > rest_y + 0.05, "jump should lift the player");
    }

    #[test]
    fn test_bob_advances_only_while_driving() {
        let mut sim = settled_simulation();

        // Fully at rest: no phase advance.
        let rest_phase = sim.tick(&idle()).bob_phase;
        assert_eq!(rest_phase, 0.0);

        let walk_phase = sim.tick(&walk_forward()).bob_phase;
        assert!(walk_phase > 0.0, "walking must advance the bob phase");

        // Residual speed decays under friction until the phase stalls.
        for _ in 0..400 {
            sim.tick(&idle());
        }
        let settled = sim.tick(&idle()).bob_phase;
        let next = sim.tick(&idle()).bob_phase;
        assert!(next - settled < 1e-4, "bob stalls once the player stops");
    }

    #[test]
    fn test_determinism() {
        // Run the simulation twice with the same inputs - same results.
        let inputs: Vec<FrameInput> = (0..300)
            .map(|i| {
                let mut input = FrameInput::default();
                input.movement.forward = i % 2 == 0;
                input.movement.left = i % 3 == 0;
                input.held.jump = i % 50 == 0;
                input.held.sprint = i % 7 == 0;
                input.mouse_delta = ((i % 5) as f32 * 3.0, (i % 4) as f32);
                if i % 60 == 0 {
                    input.events.push(InputEvent::Fire);
                }
                if i % 90 == 0 {
                    input.events.push(InputEvent::PlaceMarker(MarkerColor::Blue));
                }
                if i % 240 == 0 {
                    input.events.push(InputEvent::Reload);
                }
                input
            })
            .collect();

        let mut sim1 = Simulation::standard().unwrap();
        let mut sim2 = Simulation::standard().unwrap();

        let mut last1 = None;
        let mut last2 = None;
        for input in &inputs {
            last1 = Some(sim1.tick(input));
            last2 = Some(sim2.tick(input));
        }

        let out1 = last1.unwrap();
        let out2 = last2.unwrap();

        assert_eq!(out1.position, out2.position);
        assert_eq!(out1.yaw, out2.yaw);
        assert_eq!(out1.pitch, out2.pitch);
        assert_eq!(out1.ammo, out2.ammo);
        assert_eq!(out1.bob_phase, out2.bob_phase);
        assert_eq!(sim1.interaction.decal_count(), sim2.interaction.decal_count());
    }
}
