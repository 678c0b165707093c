use serde::{Deserialize, Serialize};

use crate::assets::Color;
use crate::error::{ConfigError, ConfigResult};

/// Simulation knobs, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scene units per AU.
    pub distance_factor: f64,
    /// Visual radius multiplier (cosmetic only).
    pub size_factor: f32,
    /// Global speed multiplier for orbits and spin.
    pub time_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            distance_factor: 50.0,
            size_factor: 1.0,
            time_scale: 0.05,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.distance_factor.is_finite() && self.distance_factor > 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "distance_factor must be finite and positive, got {}",
                self.distance_factor
            )));
        }
        if !(self.distance_factor as f32).is_finite() {
            return Err(ConfigError::InvalidConfig(format!(
                "distance_factor {} overflows single precision",
                self.distance_factor
            )));
        }
        if !(self.size_factor.is_finite() && self.size_factor > 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "size_factor must be finite and positive, got {}",
                self.size_factor
            )));
        }
        if !(self.time_scale.is_finite() && self.time_scale >= 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "time_scale must be finite and non-negative, got {}",
                self.time_scale
            )));
        }
        Ok(())
    }
}

/// Background star points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Side length of the cube the stars are scattered in.
    pub spread: f32,
    pub color: Color,
    pub size: f32,
    pub opacity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            spread: 20_000.0,
            color: Color::from_hex(0xaaaaaa),
            size: 0.7,
            opacity: 0.5,
        }
    }
}

/// Orbit path polylines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitPathConfig {
    pub segments: usize,
    pub color: Color,
    pub opacity: f32,
}

impl Default for OrbitPathConfig {
    fn default() -> Self {
        Self {
            segments: 128,
            color: Color::from_hex(0x555555),
            opacity: 0.3,
        }
    }
}

/// Camera, controls and backdrop settings.
///
/// Distances that scale with the scene (camera offset, zoom limits, light
/// range) are stored as multiples of `distance_factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial camera position as multiples of `distance_factor`.
    pub camera_offset: [f32; 3],
    /// Fraction of the pending camera motion applied per frame.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians of rotation per pixel of drag.
    pub rotate_speed: f32,
    /// Multiplicative zoom per wheel notch.
    pub zoom_step: f32,
    /// Pointer travel (pixels) before a press becomes a drag.
    pub drag_threshold: f32,
    pub ambient_intensity: f32,
    pub sun_light_intensity: f32,
    pub sun_light_range: f32,
    pub starfield: StarfieldConfig,
    pub orbit_path: OrbitPathConfig,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 30_000.0,
            camera_offset: [0.0, 3.5, 8.0],
            damping_factor: 0.04,
            min_distance: 0.2,
            max_distance: 1000.0,
            rotate_speed: 0.005,
            zoom_step: 0.95,
            drag_threshold: 5.0,
            ambient_intensity: 0.4,
            sun_light_intensity: 4.0,
            sun_light_range: 1000.0,
            starfield: StarfieldConfig::default(),
            orbit_path: OrbitPathConfig::default(),
        }
    }
}

fn finite_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn finite_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

impl StarfieldConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let bad = |what: &str| Err(ConfigError::InvalidConfig(what.to_owned()));
        if !finite_positive(self.spread) {
            return bad("starfield.spread must be finite and positive");
        }
        if !finite_positive(self.size) {
            return bad("starfield.size must be finite and positive");
        }
        if !(self.opacity.is_finite() && (0.0..=1.0).contains(&self.opacity)) {
            return bad("starfield.opacity must be in [0, 1]");
        }
        Ok(())
    }
}

impl OrbitPathConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let bad = |what: &str| Err(ConfigError::InvalidConfig(what.to_owned()));
        if self.segments < 3 {
            return bad("orbit_path.segments must be at least 3");
        }
        if !(self.opacity.is_finite() && (0.0..=1.0).contains(&self.opacity)) {
            return bad("orbit_path.opacity must be in [0, 1]");
        }
        Ok(())
    }
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let bad = |what: &str| Err(ConfigError::InvalidConfig(what.to_owned()));
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return bad("fov_y_degrees must be in (0, 180)");
        }
        if !(finite_positive(self.near) && self.far.is_finite() && self.far > self.near) {
            return bad("near must be positive and far must be finite and exceed near");
        }
        if !self.camera_offset.iter().all(|c| c.is_finite()) {
            return bad("camera_offset must be finite");
        }
        if self.camera_offset.iter().all(|c| *c == 0.0) {
            return bad("camera_offset must not be the origin");
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return bad("damping_factor must be in (0, 1]");
        }
        if !(finite_positive(self.min_distance)
            && self.max_distance.is_finite()
            && self.max_distance >= self.min_distance)
        {
            return bad("min_distance must be positive and not exceed a finite max_distance");
        }
        if !finite_non_negative(self.rotate_speed) {
            return bad("rotate_speed must be finite and non-negative");
        }
        if !(self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            return bad("zoom_step must be in (0, 1)");
        }
        if !finite_non_negative(self.drag_threshold) {
            return bad("drag_threshold must be finite and non-negative");
        }
        if !finite_non_negative(self.ambient_intensity) {
            return bad("ambient_intensity must be finite and non-negative");
        }
        if !finite_non_negative(self.sun_light_intensity) {
            return bad("sun_light_intensity must be finite and non-negative");
        }
        if !finite_positive(self.sun_light_range) {
            return bad("sun_light_range must be finite and positive");
        }
        self.starfield.validate()?;
        self.orbit_path.validate()
    }
}

/// Everything `Orrery::new` needs besides the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub simulation: SimulationConfig,
    pub view: ViewConfig,
}

impl OrreryConfig {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Field checks plus the scene-scaled distances, which must stay
    /// finite once multiplied by `distance_factor`.
    pub fn validate(&self) -> ConfigResult<()> {
        self.simulation.validate()?;
        self.view.validate()?;

        let df = self.simulation.distance_factor as f32;
        let view = &self.view;
        let scaled = view
            .camera_offset
            .iter()
            .chain([view.max_distance, view.sun_light_range].iter())
            .all(|v| (v * df).is_finite());
        if !scaled {
            return Err(ConfigError::InvalidConfig(format!(
                "view distances overflow when scaled by distance_factor {}",
                self.simulation.distance_factor
            )));
        }
        Ok(())
    }
}
