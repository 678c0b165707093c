use glam::Vec3;

use crate::bridge::protocol::*;
use crate::renderer::instance::{ring_instances, InstanceBuffer, RingInstance};
use crate::renderer::traits::{FrameData, Renderer};
use crate::core::scene::Scene;
use crate::systems::backdrop::OrbitPath;
use crate::systems::lighting::{LightState, PointLight};

/// Renderer that packs each frame into a flat `f32` buffer for the
/// JavaScript side to read through wasm memory.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    instances: InstanceBuffer,
    viewport: (u32, u32),
}

impl FrameBuffer {
    pub fn new(body_count: usize) -> Self {
        let layout = ProtocolLayout::new(body_count);
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_BODY_COUNT] = body_count as f32;
        data[HEADER_SELECTED] = NO_SELECTION;
        Self {
            layout,
            data,
            instances: InstanceBuffer::new(),
            viewport: (0, 0),
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    fn write_vec3(&mut self, at: usize, v: Vec3) {
        self.data[at..at + 3].copy_from_slice(&v.to_array());
    }
}

impl Renderer for FrameBuffer {
    fn backend(&self) -> &'static str {
        "frame-buffer"
    }

    fn render(&mut self, frame: &FrameData) {
        self.instances.fill(frame.scene);
        let count = self.instances.instances.len().min(self.layout.body_count);

        let camera = frame.camera;
        self.data[HEADER_FRAME_COUNTER] = frame.frame as f32;
        self.data[HEADER_BODY_COUNT] = count as f32;
        self.write_vec3(HEADER_EYE_X, camera.position);
        self.write_vec3(HEADER_TARGET_X, camera.target);
        self.data[HEADER_FOV_Y] = camera.fov_y_degrees;
        self.data[HEADER_ASPECT] = camera.aspect;
        self.data[HEADER_NEAR] = camera.near;
        self.data[HEADER_FAR] = camera.far;
        self.data[HEADER_VIEWPORT_WIDTH] = frame.viewport.0 as f32;
        self.data[HEADER_VIEWPORT_HEIGHT] = frame.viewport.1 as f32;
        self.data[HEADER_SELECTED] = frame.selected.map_or(NO_SELECTION, |id| id.0 as f32);

        let start = self.layout.body_data_offset;
        let floats = &self.instances.as_floats()[..count * BODY_INSTANCE_FLOATS];
        self.data[start..start + floats.len()].copy_from_slice(floats);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }
}

/// Buffers built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticBuffers {
    /// `x, y, z` per star.
    pub starfield: Vec<f32>,
    /// `x, y, z` per point, paths back to back.
    pub orbit_paths: Vec<f32>,
    /// Points per orbit path (all paths share the segment count).
    pub orbit_path_points: usize,
    /// `RingInstance::FLOATS` per ring.
    pub rings: Vec<f32>,
    /// `[ambient r, g, b, intensity]` then 8 floats per point light.
    pub lights: Vec<f32>,
}

impl StaticBuffers {
    pub fn build(
        scene: &Scene,
        starfield: &[Vec3],
        orbit_paths: &[OrbitPath],
        lighting: &LightState,
    ) -> Self {
        let rings: Vec<RingInstance> = ring_instances(scene);
        let mut lights = Vec::with_capacity(4 + lighting.lights.len() * PointLight::FLOATS);
        lights.extend_from_slice(&lighting.ambient_color);
        lights.push(lighting.ambient_intensity);
        lights.extend(lighting.light_floats());

        let mut points = Vec::with_capacity(starfield.len() * POINT_FLOATS);
        points.extend(starfield.iter().flat_map(|p| p.to_array()));

        Self {
            starfield: points,
            orbit_paths: orbit_paths
                .iter()
                .flat_map(|path| path.points.iter().flat_map(|p| p.to_array()))
                .collect(),
            orbit_path_points: orbit_paths.first().map_or(0, |p| p.points.len()),
            rings: bytemuck::cast_slice(&rings).to_vec(),
            lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{OrbitPathConfig, SimulationConfig, StarfieldConfig, ViewConfig};
    use crate::api::types::BodyId;
    use crate::assets::Catalog;
    use crate::core::factory::build_scene;
    use crate::renderer::camera::PerspectiveCamera;
    use crate::systems::backdrop::{generate_starfield, orbit_paths};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> Scene {
        let catalog = Catalog::solar_system().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        build_scene(&catalog, &SimulationConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn render_packs_header_and_bodies() {
        let scene = scene();
        let camera = PerspectiveCamera::new(60.0, 2.0, 0.1, 30_000.0)
            .with_position(Vec3::new(0.0, 175.0, 400.0));
        let lighting = LightState::for_view(&ViewConfig::default(), 50.0);
        let mut buffer = FrameBuffer::new(scene.len());
        buffer.resize(800, 400);
        buffer.render(&FrameData {
            scene: &scene,
            camera: &camera,
            lighting: &lighting,
            selected: Some(BodyId(3)),
            viewport: (800, 400),
            frame: 7,
        });

        assert_eq!(buffer.backend(), "frame-buffer");
        let data = buffer.as_slice();
        assert_eq!(data.len(), 16 + 9 * 8);
        assert_eq!(data[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(data[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(data[HEADER_BODY_COUNT], 9.0);
        assert_eq!(data[HEADER_EYE_Y], 175.0);
        assert_eq!(data[HEADER_ASPECT], 2.0);
        assert_eq!(data[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(data[HEADER_SELECTED], 3.0);

        let earth = scene.find_by_name("Earth").unwrap();
        let at = HEADER_FLOATS + earth.id.index() * BODY_INSTANCE_FLOATS;
        assert_eq!(data[at], earth.position.x);
        assert_eq!(data[at + 2], earth.position.z);
    }

    #[test]
    fn no_selection_is_minus_one() {
        let buffer = FrameBuffer::new(1);
        assert_eq!(buffer.as_slice()[HEADER_SELECTED], NO_SELECTION);
    }

    #[test]
    fn static_buffers_flatten_backdrop() {
        let scene = scene();
        let mut rng = StdRng::seed_from_u64(2);
        let stars = generate_starfield(
            &StarfieldConfig { count: 10, ..Default::default() },
            &mut rng,
        );
        let paths = orbit_paths(&scene, &OrbitPathConfig { segments: 16, ..Default::default() });
        let lighting = LightState::for_view(&ViewConfig::default(), 50.0);

        let buffers = StaticBuffers::build(&scene, &stars, &paths, &lighting);
        assert_eq!(buffers.starfield.len(), 10 * POINT_FLOATS);
        assert_eq!(buffers.orbit_path_points, 17);
        assert_eq!(buffers.orbit_paths.len(), 8 * 17 * POINT_FLOATS);
        assert_eq!(buffers.rings.len(), RingInstance::FLOATS);
        assert_eq!(buffers.lights.len(), 4 + 8);
    }
}
