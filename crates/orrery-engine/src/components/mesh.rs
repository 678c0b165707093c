use glam::{Quat, Vec3};

use crate::api::types::BodyId;
use crate::assets::Color;

/// Shape primitive used for hit testing and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus centered on the owner, tilted about the X axis.
    Ring { inner_radius: f32, outer_radius: f32, tilt: f32 },
}

impl Shape {
    /// Normal of a ring's plane in world space.
    pub fn ring_normal(tilt: f32) -> Vec3 {
        Quat::from_rotation_x(tilt) * Vec3::Y
    }
}

/// A visual sub-part of a body.
///
/// Every part carries its owning body's id so a hit on any sub-part
/// resolves to that body without walking a scene graph.
#[derive(Debug, Clone, Copy)]
pub struct VisualPart {
    pub owner: BodyId,
    pub shape: Shape,
    pub color: Color,
    /// Self-lit parts ignore scene lighting (the star).
    pub emissive: bool,
}

impl VisualPart {
    pub fn sphere(owner: BodyId, radius: f32, color: Color) -> Self {
        Self {
            owner,
            shape: Shape::Sphere { radius },
            color,
            emissive: false,
        }
    }

    pub fn ring(owner: BodyId, inner_radius: f32, outer_radius: f32, tilt: f32, color: Color) -> Self {
        Self {
            owner,
            shape: Shape::Ring { inner_radius, outer_radius, tilt },
            color,
            emissive: false,
        }
    }

    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = emissive;
        self
    }
}
