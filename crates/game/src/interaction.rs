//! Hitscan shooting and portal marker placement.
//!
//! Both actions cast a ray from the camera through the registered
//! surfaces. Shots spend ammo and leave bullet-hole decals at the exact
//! hit point; marker placement moves one of the two colored markers to the
//! hit point, oriented along the surface normal. A ray that hits nothing
//! changes nothing.

use std::collections::VecDeque;

use chamber_physics::{cast, Ray, SurfaceRegistry};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::MarkerColor;

/// Configuration for shooting and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Magazine capacity; a reload always refills to this.
    pub ammo_capacity: u32,

    /// Maximum retained decals; the oldest is evicted beyond this.
    pub max_decals: usize,

    /// Width of a placed marker plane; markers are twice as tall.
    pub marker_width: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            ammo_capacity: 12,
            max_decals: 200,
            marker_width: 1.5,
        }
    }
}

impl InteractionConfig {
    /// Height of a placed marker plane.
    pub fn marker_height(&self) -> f32 {
        self.marker_width * 2.0
    }
}

/// A bullet-hole decal stuck to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decal {
    /// Placement point on the surface.
    pub position: Vec3,
    /// Outward surface normal the decal faces along.
    pub normal: Vec3,
}

/// One of the two colored portal markers.
///
/// A marker keeps its last placement until overwritten; placement on a
/// miss leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalMarker {
    /// Placement point on the surface.
    pub position: Vec3,
    /// Outward surface normal the marker plane faces along.
    pub normal: Vec3,
    /// False until the marker has been placed for the first time.
    pub active: bool,
}

impl Default for PortalMarker {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            normal: Vec3::Z,
            active: false,
        }
    }
}

/// Result of a fire action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotOutcome {
    /// Whether a round left the weapon. False on an empty magazine, in
    /// which case nothing else happened either.
    pub fired: bool,
    /// The decal created, if the shot hit a surface.
    pub decal: Option<Decal>,
}

/// Ammo, decals and markers.
///
/// Ammo moves only through [`fire_shot`](Self::fire_shot) and
/// [`reload`](Self::reload), which keep it at or above zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionState {
    config: InteractionConfig,
    ammo: u32,
    decals: VecDeque<Decal>,
    blue: PortalMarker,
    orange: PortalMarker,
}

impl InteractionState {
    /// Create interaction state with a full magazine and nothing placed.
    pub fn new(config: InteractionConfig) -> Self {
        let ammo = config.ammo_capacity;
        Self {
            config,
            ammo,
            decals: VecDeque::new(),
            blue: PortalMarker::default(),
            orange: PortalMarker::default(),
        }
    }

    /// Fire the hitscan weapon along `ray`.
    ///
    /// With an empty magazine the whole action is a no-op. Otherwise one
    /// round is spent whether or not anything was hit, and a hit sticks a
    /// decal to the surface.
    pub fn fire_shot(&mut self, ray: &Ray, registry: &SurfaceRegistry) -> ShotOutcome {
        if self.ammo == 0 {
            log::debug!("dry fire");
            return ShotOutcome::default();
        }

        self.ammo -= 1;

        let mut outcome = ShotOutcome {
            fired: true,
            decal: None,
        };

        if let Some(hit) = cast(ray, registry) {
            let decal = Decal {
                position: hit.point,
                normal: hit.normal,
            };
            self.push_decal(decal);
            outcome.decal = Some(decal);
        }

        log::debug!("shot: hit={} ammo={}", outcome.decal.is_some(), self.ammo);
        outcome
    }

    /// Refill the magazine to capacity. Instant; no partial fills.
    pub fn reload(&mut self) {
        self.ammo = self.config.ammo_capacity;
        log::debug!("reloaded to {}", self.ammo);
    }

    /// Place the marker of `color` where `ray` first hits a surface.
    ///
    /// Placement overwrites the marker's previous transform and activates
    /// it. On a miss nothing changes and `None` is returned.
    pub fn place_marker(
        &mut self,
        color: MarkerColor,
        ray: &Ray,
        registry: &SurfaceRegistry,
    ) -> Option<PortalMarker> {
        let hit = cast(ray, registry)?;

        let marker = PortalMarker {
            position: hit.point,
            normal: hit.normal,
            active: true,
        };

        match color {
            MarkerColor::Blue => self.blue = marker,
            MarkerColor::Orange => self.orange = marker,
        }

        log::debug!("{:?} marker placed at {}", color, hit.point);
        Some(marker)
    }

    /// Get the marker of the given color.
    pub fn marker(&self, color: MarkerColor) -> &PortalMarker {
        match color {
            MarkerColor::Blue => &self.blue,
            MarkerColor::Orange => &self.orange,
        }
    }

    /// Rounds remaining in the magazine.
    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    /// Stored decals, oldest first.
    pub fn decals(&self) -> impl Iterator<Item = &Decal> {
        self.decals.iter()
    }

    /// Number of stored decals.
    pub fn decal_count(&self) -> usize {
        self.decals.len()
    }

    fn push_decal(&mut self, decal: Decal) {
        if self.config.max_decals == 0 {
            return;
        }
        if self.decals.len() >= self.config.max_decals {
            self.decals.pop_front();
        }
        self.decals.push_back(decal);
    }
}
