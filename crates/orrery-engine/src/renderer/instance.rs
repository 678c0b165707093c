use bytemuck::{Pod, Zeroable};

use crate::components::{Body, Shape, VisualPart};
use crate::core::scene::Scene;

/// Per-body render data written to the frame buffer each frame.
/// Must match the JavaScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Spin about the body's Y axis, radians.
    pub rotation: f32,
    /// Sphere radius in scene units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_body(body: &Body, sphere: Option<&VisualPart>) -> Self {
        let (radius, color) = match sphere {
            Some(VisualPart { shape: Shape::Sphere { radius }, color, .. }) => (*radius, *color),
            _ => (body.visual_radius, body.def.color),
        };
        Self {
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            rotation: body.rotation_angle as f32,
            radius,
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Static ring descriptor. The renderer places it at the owner's
/// current position every frame.
///
/// Wire format (8 floats): `[owner, inner, outer, tilt, r, g, b, 0]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RingInstance {
    pub owner: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub tilt: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    _pad: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 8;

    pub fn from_part(part: &VisualPart) -> Option<Self> {
        match part.shape {
            Shape::Ring { inner_radius, outer_radius, tilt } => Some(Self {
                owner: part.owner.0 as f32,
                inner_radius,
                outer_radius,
                tilt,
                r: part.color.r,
                g: part.color.g,
                b: part.color.b,
                _pad: 0.0,
            }),
            Shape::Sphere { .. } => None,
        }
    }
}

/// Body instances for the current frame, in scene order.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Rebuild from the scene. One instance per body.
    pub fn fill(&mut self, scene: &Scene) {
        self.clear();
        for body in scene.iter() {
            let sphere = scene
                .parts_of(body.id)
                .find(|p| matches!(p.shape, Shape::Sphere { .. }));
            self.instances.push(BodyInstance::from_body(body, sphere));
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// All ring descriptors in the scene.
pub fn ring_instances(scene: &Scene) -> Vec<RingInstance> {
    scene.parts().iter().filter_map(RingInstance::from_part).collect()
}
