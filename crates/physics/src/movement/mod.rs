//! Player movement physics system.
//!
//! This module implements arcade-style first-person movement with:
//!
//! - Input-driven acceleration and idle friction
//! - Separate walk and sprint speed caps
//! - Constant gravity and impulse jumping
//! - Axis-separated collision response (walls slide, floors carry)
//!
//! # Design
//!
//! Movement is driven by the [`PlayerController`], which takes one
//! [`MoveCommand`] per logical tick and advances the player's
//! [`PlayerState`] through the surface registry. All constants are
//! per-tick quantities; there is no wall-clock scaling anywhere.
//!
//! All movement is deterministic - the same commands always produce the
//! same state.

mod config;
mod controller;
mod state;

pub use config::MovementConfig;
pub use controller::{MoveResult, PlayerController};
pub use state::{CommandButtons, GroundState, MoveCommand, PlayerState};
