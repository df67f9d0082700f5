//! Weapon view-model cosmetics.
//!
//! Recoil kick-back and walk bob for the first-person weapon. Everything
//! here is presentation state: it reads movement results but never feeds
//! anything back into the simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for the weapon view model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModelConfig {
    /// Weapon rest offset from the camera.
    pub rest_offset: Vec3,

    /// Z offset the weapon snaps to when a shot fires.
    pub recoil_offset_z: f32,

    /// Fraction of the remaining distance to rest recovered per tick.
    pub recoil_recovery: f32,

    /// Bob phase advance per unit of horizontal speed.
    pub bob_rate: f32,

    /// Frequency multiplier inside the bob sinusoid.
    pub bob_frequency: f32,

    /// Vertical bob amplitude while walking.
    pub walk_bob_amplitude: f32,

    /// Vertical bob amplitude while sprinting.
    pub sprint_bob_amplitude: f32,
}

impl Default for ViewModelConfig {
    fn default() -> Self {
        Self {
            rest_offset: Vec3::new(0.3, -0.2, -0.6),
            recoil_offset_z: -0.5,
            recoil_recovery: 0.1,
            bob_rate: 50.0,
            bob_frequency: 0.03,
            walk_bob_amplitude: 0.01,
            sprint_bob_amplitude: 0.02,
        }
    }
}

/// Weapon offset and bob phase, advanced once per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModel {
    config: ViewModelConfig,

    /// Current Z offset; pulled toward the camera on fire, eased back.
    offset_z: f32,

    /// Accumulated bob phase.
    bob_phase: f32,

    /// Current vertical bob displacement around the rest offset.
    bob_offset_y: f32,
}

impl ViewModel {
    /// Create a view model at rest.
    pub fn new(config: ViewModelConfig) -> Self {
        let offset_z = config.rest_offset.z;
        Self {
            config,
            offset_z,
            bob_phase: 0.0,
            bob_offset_y: 0.0,
        }
    }

    /// Kick the weapon back. Called when a shot actually fires; a dry
    /// trigger pull never reaches this.
    pub fn trigger_recoil(&mut self) {
        self.offset_z = self.config.recoil_offset_z;
    }

    /// Advance recoil recovery and bob by one tick.
    ///
    /// `horizontal_speed` is the pre-cap speed from the movement result,
    /// so the bob keeps swinging while the player shoves against a wall.
    pub fn update(&mut self, horizontal_speed: f32, sprinting: bool) {
        self.offset_z += (self.config.rest_offset.z - self.offset_z) * self.config.recoil_recovery;

        self.bob_phase += horizontal_speed * self.config.bob_rate;
        let amplitude = if sprinting {
            self.config.sprint_bob_amplitude
        } else {
            self.config.walk_bob_amplitude
        };
        self.bob_offset_y = (self.bob_phase * self.config.bob_frequency).sin() * amplitude;
    }

    /// Current weapon offset from the camera.
    pub fn weapon_offset(&self) -> Vec3 {
        Vec3::new(
            self.config.rest_offset.x,
            self.config.rest_offset.y + self.bob_offset_y,
            self.offset_z,
        )
    }

    /// Accumulated bob phase.
    pub fn bob_phase(&self) -> f32 {
        self.bob_phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_rest() {
        let view = ViewModel::new(ViewModelConfig::default());
        assert_eq!(view.weapon_offset(), Vec3::new(0.3, -0.2, -0.6));
        assert_eq!(view.bob_phase(), 0.0);
    }

    #[test]
    fn test_recoil_kick_and_recovery() {
        let mut view = ViewModel::new(ViewModelConfig::default());

        view.trigger_recoil();
        assert_eq!(view.weapon_offset().z, -0.5);

        // First recovery tick eases 10% of the way back.
        view.update(0.0, false);
        assert!((view.weapon_offset().z + 0.51).abs() < 1e-6);

        for _ in 0..200 {
            view.update(0.0, false);
        }
        assert!(
            (view.weapon_offset().z + 0.6).abs() < 1e-4,
            "weapon should ease back to rest"
        );
    }

    #[test]
    fn test_bob_phase_follows_speed() {
        let mut view = ViewModel::new(ViewModelConfig::default());

        view.update(0.03, false);
        assert!((view.bob_phase() - 1.5).abs() < 1e-6);

        view.update(0.0, false);
        assert_eq!(view.bob_phase(), 1.5, "no speed, no phase advance");
    }

    #[test]
    fn test_sprint_amplitude_is_larger() {
        let mut walk = ViewModel::new(ViewModelConfig::default());
        let mut sprint = ViewModel::new(ViewModelConfig::default());

        // Same phase, different amplitude.
        for _ in 0..10 {
            walk.update(0.03, false);
            sprint.update(0.03, true);
        }

        let walk_bob = (walk.weapon_offset().y + 0.2).abs();
        let sprint_bob = (sprint.weapon_offset().y + 0.2).abs();
        assert!(walk_bob > 0.0, "walking must bob");
        assert!(
            (sprint_bob - 2.0 * walk_bob).abs() < 1e-6,
            "sprint bob has double amplitude"
        );
    }
}
