use std::f32::consts::PI;

use glam::Vec3;

use crate::api::config::ViewConfig;
use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle off the poles so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-4;

/// Orbit camera controller with damping.
///
/// Pointer input only accumulates pending motion; `update` applies a
/// `damping_factor` share of it each frame and decays the rest, so the
/// camera glides to a stop after the pointer is released.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    /// Azimuth around +Y, measured from +Z toward +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    radius: f32,
    theta_delta: f32,
    phi_delta: f32,
    /// Pending zoom multiplier, applied in full on the next update.
    scale: f32,
    damping_factor: f32,
    min_distance: f32,
    max_distance: f32,
    rotate_speed: f32,
    zoom_step: f32,
}

impl OrbitControls {
    /// Build controls for `camera`, taking its current offset from `target`
    /// as the starting orbit. Distances are in scene units.
    pub fn new(camera: &PerspectiveCamera, view: &ViewConfig, distance_factor: f32) -> Self {
        let mut controls = Self {
            target: camera.target,
            theta: 0.0,
            phi: PI / 2.0,
            radius: 1.0,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            damping_factor: view.damping_factor,
            min_distance: view.min_distance * distance_factor,
            max_distance: view.max_distance * distance_factor,
            rotate_speed: view.rotate_speed,
            zoom_step: view.zoom_step,
        };
        controls.sync_from(camera);
        controls
    }

    /// Re-read the spherical state from the camera's position.
    pub fn sync_from(&mut self, camera: &PerspectiveCamera) {
        let offset = camera.position - self.target;
        self.radius = offset.length().clamp(self.min_distance, self.max_distance);
        self.theta = offset.x.atan2(offset.z);
        self.phi = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };
    }

    /// Queue a rotation from a pointer drag of `dx, dy` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.theta_delta -= dx * self.rotate_speed;
        self.phi_delta -= dy * self.rotate_speed;
    }

    /// Queue a zoom. Positive `notches` move the camera closer.
    /// Non-finite input is ignored.
    pub fn zoom(&mut self, notches: f32) {
        if !notches.is_finite() {
            return;
        }
        self.scale *= self.zoom_step.powf(notches);
    }

    /// Advance the damping state and write the new position to `camera`.
    /// Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        self.theta += self.theta_delta * self.damping_factor;
        self.phi = (self.phi + self.phi_delta * self.damping_factor)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.radius = (self.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.theta_delta *= 1.0 - self.damping_factor;
        self.phi_delta *= 1.0 - self.damping_factor;
        self.scale = 1.0;

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        let position = self.target + offset;
        let moved = position.distance_squared(camera.position) > 1e-10;
        camera.position = position;
        camera.target = self.target;
        moved
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Whether any queued motion is still being applied.
    pub fn is_settling(&self) -> bool {
        self.theta_delta.abs() > 1e-6 || self.phi_delta.abs() > 1e-6 || self.scale != 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PerspectiveCamera, OrbitControls) {
        let view = ViewConfig::default();
        let camera = PerspectiveCamera::new(60.0, 1.5, 0.1, 30_000.0)
            .with_position(Vec3::new(0.0, 175.0, 400.0));
        let controls = OrbitControls::new(&camera, &view, 50.0);
        (camera, controls)
    }

    #[test]
    fn idle_update_keeps_camera_in_place() {
        let (mut camera, mut controls) = setup();
        let before = camera.position;
        controls.update(&mut camera);
        assert!(camera.position.distance(before) < 1e-3);
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let (mut camera, mut controls) = setup();
        let start = camera.position;
        controls.rotate(100.0, 0.0);
        controls.update(&mut camera);
        let first = camera.position.distance(start);
        assert!(first > 0.0);
        assert!(controls.is_settling());

        for _ in 0..2000 {
            controls.update(&mut camera);
        }
        assert!(!controls.is_settling());
        // Distance to the target is preserved by rotation.
        assert!((camera.position.distance(Vec3::ZERO) - start.length()).abs() < 0.1);
    }

    #[test]
    fn zoom_is_clamped() {
        let (mut camera, mut controls) = setup();
        controls.zoom(10_000.0);
        controls.update(&mut camera);
        assert!((controls.distance() - 10.0).abs() < 1e-3, "min is 0.2 × 50");

        controls.zoom(-10_000.0);
        controls.update(&mut camera);
        assert!((controls.distance() - 50_000.0).abs() < 1.0, "max is 1000 × 50");
    }

    #[test]
    fn polar_angle_never_flips() {
        let (mut camera, mut controls) = setup();
        controls.rotate(0.0, 1.0e6);
        for _ in 0..100 {
            controls.update(&mut camera);
        }
        assert!(camera.position.y.is_finite());
        assert!(camera.position.y > 0.0);
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let (mut camera, mut controls) = setup();
        let before = controls.distance();
        controls.zoom(f32::INFINITY);
        controls.zoom(f32::NEG_INFINITY);
        controls.zoom(f32::NAN);
        controls.update(&mut camera);
        assert!((controls.distance() - before).abs() < 1e-3);
        assert!(camera.position.is_finite());
    }
}
