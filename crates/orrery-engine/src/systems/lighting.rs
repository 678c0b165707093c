/// Scene lighting: a flat ambient term plus the star's point light.
///
/// Lights are fixed for the session. The star itself is emissive and is
/// not lit by them.

use glam::Vec3;

use crate::api::config::ViewConfig;

/// A 3D point light.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light fades out (0 = infinite).
    pub range: f32,
    pub cast_shadows: bool,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(position: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
            cast_shadows: false,
        }
    }

    pub fn with_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows;
        self
    }

    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.color[0],
            self.color[1],
            self.color[2],
            self.intensity,
            self.range,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct LightState {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub lights: Vec<PointLight>,
}

impl LightState {
    /// White ambient fill plus a shadow-casting light at the star.
    pub fn for_view(view: &ViewConfig, distance_factor: f32) -> Self {
        let sun = PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            view.sun_light_intensity,
            view.sun_light_range * distance_factor,
        )
        .with_shadows(true);
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: view.ambient_intensity,
            lights: vec![sun],
        }
    }

    /// Flatten all lights for the renderer.
    pub fn light_floats(&self) -> Vec<f32> {
        self.lights.iter().flat_map(|l| l.to_floats()).collect()
    }
}
