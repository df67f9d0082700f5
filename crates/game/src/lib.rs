//! Chamber Game Logic
//!
//! Deterministic single-player simulation of a sealed test chamber:
//! first-person movement in a box room, hitscan shooting with bullet-hole
//! decals, two colored portal markers, and weapon view-model cosmetics.
//!
//! # Architecture
//!
//! ```text
//! FrameInput ──> Simulation::tick ──> FrameOutput
//!                     │
//!         ┌───────────┼────────────┐
//!         v           v            v
//!     movement    interaction  view model
//!   (chamber-physics)  (aim rays)   (recoil, bob)
//! ```
//!
//! The simulation consumes one input snapshot per logical tick and returns
//! everything a renderer needs. No wall-clock time enters the step, so
//! replaying snapshots reproduces a run exactly.

pub mod input;
pub mod interaction;
pub mod room;
pub mod simulation;
pub mod viewmodel;

pub use input::{FrameInput, HeldActions, InputEvent, MarkerColor, MovementInput};
pub use interaction::{Decal, InteractionConfig, InteractionState, PortalMarker, ShotOutcome};
pub use room::{Room, RoomConfig};
pub use simulation::{FrameOutput, Simulation, SimulationConfig};
pub use viewmodel::{ViewModel, ViewModelConfig};

// Re-export physics types commonly needed alongside the game layer
pub use chamber_physics::{
    ConfigurationError, GroundState, MovementConfig, PlayerState, SurfaceRegistry,
};
