use glam::{Mat4, Vec2, Vec3};

use crate::systems::picking::Ray;

/// Perspective camera for 3D rendering.
/// Right-handed, Y-up, OpenGL clip space (z in [-1, 1]).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Width / height of the output surface.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio for a new output size. Zero-sized
    /// surfaces are ignored. Returns whether anything changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        let aspect = width / height;
        if (aspect - self.aspect).abs() < f32::EPSILON {
            return false;
        }
        self.aspect = aspect;
        true
    }

    /// Project a world point to normalized device coordinates.
    /// `None` when the point is behind the camera.
    pub fn project_ndc(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Project a world point to pixel coordinates on a `width × height`
    /// surface (origin top-left, Y down).
    pub fn project_to_pixels(&self, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let ndc = self.project_ndc(point)?;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }

    /// Ray from the camera through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, -1.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(near, far - near)
    }
}

/// Convert a pixel coordinate (canvas-local, Y down) to NDC.
pub fn pixels_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0)
}
