use std::sync::Arc;

use glam::Vec3;

use crate::api::types::BodyId;
use crate::assets::BodyDefinition;

/// Runtime entity for one catalog entry.
///
/// The definition is shared and immutable; everything else is simulation
/// state mutated by the orbit system.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub def: Arc<BodyDefinition>,
    /// `orbital_radius_au × distance_factor`. `None` for the star.
    pub orbital_radius_scene: Option<f64>,
    /// Orbital phase in radians. Grows without wrapping.
    pub angle: f64,
    /// Accumulated spin about the local Y axis in radians.
    pub rotation_angle: f64,
    /// Scene position derived from `angle` each frame.
    pub position: Vec3,
    /// Sphere radius after `size_factor`.
    pub visual_radius: f32,
}

impl Body {
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn is_star(&self) -> bool {
        self.def.is_star
    }

    /// Recompute `position` from `angle` on the XZ plane, keeping `y`.
    pub fn sync_position(&mut self) {
        if let Some(r) = self.orbital_radius_scene {
            self.position.x = (r * self.angle.cos()) as f32;
            self.position.z = (r * self.angle.sin()) as f32;
        }
    }

    /// Distance from the origin in the orbital plane.
    pub fn planar_distance(&self) -> f32 {
        (self.position.x * self.position.x + self.position.z * self.position.z).sqrt()
    }
}
