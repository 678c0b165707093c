//! Ray-based hit testing against body visuals.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::components::{Shape, VisualPart};
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;

/// A half-line in world space. `direction` is normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest non-negative hit distance against a sphere.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let near = -b - sqrt_disc;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin inside the sphere.
        let far = -b + sqrt_disc;
        (far >= 0.0).then_some(far)
    }

    /// Hit distance against a flat annulus centered at `center`.
    pub fn intersect_ring(
        &self,
        center: Vec3,
        normal: Vec3,
        inner_radius: f32,
        outer_radius: f32,
    ) -> Option<f32> {
        let denom = self.direction.dot(normal);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (center - self.origin).dot(normal) / denom;
        if t < 0.0 {
            return None;
        }
        let r = self.at(t).distance(center);
        (r >= inner_radius && r <= outer_radius).then_some(t)
    }
}

/// A ray hit resolved to its owning body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub body: BodyId,
    pub distance: f32,
}

fn intersect_part(ray: &Ray, part: &VisualPart, center: Vec3) -> Option<f32> {
    match part.shape {
        Shape::Sphere { radius } => ray.intersect_sphere(center, radius),
        Shape::Ring { inner_radius, outer_radius, tilt } => {
            ray.intersect_ring(center, Shape::ring_normal(tilt), inner_radius, outer_radius)
        }
    }
}

/// Cast `ray` against every visual part and return the nearest hit.
pub fn cast(scene: &Scene, ray: &Ray) -> Option<Hit> {
    scene
        .parts()
        .iter()
        .filter_map(|part| {
            let owner = scene.get(part.owner)?;
            let distance = intersect_part(ray, part, owner.position)?;
            Some(Hit { body: part.owner, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Pick the body under a point given in normalized device coordinates.
pub fn pick(scene: &Scene, camera: &PerspectiveCamera, ndc: Vec2) -> Option<Hit> {
    cast(scene, &camera.ray_through_ndc(ndc))
}
