use glam::Vec3;
use rand::Rng;

use crate::api::config::OrreryConfig;
use crate::api::inspection::{InspectionPayload, Selection};
use crate::api::types::{BodyId, FrameOutcome};
use crate::assets::Catalog;
use crate::core::factory::build_scene;
use crate::core::scene::Scene;
use crate::core::time::accept_delta;
use crate::error::ConfigResult;
use crate::input::{InputEvent, PointerAction, PointerTracker};
use crate::renderer::camera::{pixels_to_ndc, PerspectiveCamera};
use crate::renderer::controls::OrbitControls;
use crate::renderer::traits::{FrameData, Renderer};
use crate::systems::backdrop::{generate_starfield, orbit_paths, OrbitPath};
use crate::systems::lighting::LightState;
use crate::systems::{orbit, picking};

/// The whole simulation: bodies, camera, controls and the current
/// inspection state.
///
/// Single-threaded. The host calls `handle_input` with whatever arrived
/// since the last frame, then `run_frame` once per display refresh.
pub struct Orrery {
    config: OrreryConfig,
    scene: Scene,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    pointer: PointerTracker,
    lighting: LightState,
    starfield: Vec<Vec3>,
    orbit_paths: Vec<OrbitPath>,
    selection: Selection,
    selected: Option<BodyId>,
    viewport: (u32, u32),
    resize_pending: bool,
    frames: u64,
}

impl Orrery {
    /// Build from a catalog with system-seeded initial orbital phases.
    pub fn new(catalog: &Catalog, config: OrreryConfig) -> ConfigResult<Self> {
        Self::with_rng(catalog, config, &mut rand::thread_rng())
    }

    /// Build with a caller-supplied random source (initial phases and
    /// starfield). A seeded rng gives a reproducible layout.
    pub fn with_rng<R: Rng>(
        catalog: &Catalog,
        config: OrreryConfig,
        rng: &mut R,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let scene = build_scene(catalog, &config.simulation, rng)?;

        let view = &config.view;
        let df = config.simulation.distance_factor as f32;
        let camera = PerspectiveCamera::new(view.fov_y_degrees, 1.0, view.near, view.far)
            .with_position(Vec3::from_array(view.camera_offset) * df);
        let controls = OrbitControls::new(&camera, view, df);

        let starfield = generate_starfield(&view.starfield, rng);
        let orbit_paths = orbit_paths(&scene, &view.orbit_path);
        let lighting = LightState::for_view(view, df);
        let pointer = PointerTracker::new(view.drag_threshold);

        log::info!(
            "orrery ready: {} bodies, {} stars, {} orbit paths",
            scene.len(),
            starfield.len(),
            orbit_paths.len()
        );

        Ok(Self {
            config,
            scene,
            camera,
            controls,
            pointer,
            lighting,
            starfield,
            orbit_paths,
            selection: Selection::Deselected,
            selected: None,
            viewport: (0, 0),
            resize_pending: false,
            frames: 0,
        })
    }

    /// One frame: advance the bodies (if `dt` is acceptable), step the
    /// camera damping, then render.
    ///
    /// A rejected `dt` leaves every body untouched but the camera and
    /// renderer still run.
    pub fn run_frame<R: Renderer + ?Sized>(&mut self, dt: f64, renderer: &mut R) -> FrameOutcome {
        let outcome = match accept_delta(dt) {
            Some(dt) => {
                orbit::advance_bodies(self.scene.iter_mut(), &self.config.simulation, dt);
                FrameOutcome::Advanced
            }
            None => {
                log::debug!("skipping simulation step, dt = {dt}");
                FrameOutcome::Skipped
            }
        };

        self.controls.update(&mut self.camera);

        if self.resize_pending {
            renderer.resize(self.viewport.0, self.viewport.1);
            self.resize_pending = false;
        }

        if self.frames == 0 {
            log::info!("first frame on the {} renderer", renderer.backend());
        }
        self.frames += 1;
        renderer.render(&FrameData {
            scene: &self.scene,
            camera: &self.camera,
            lighting: &self.lighting,
            selected: self.selected,
            viewport: self.viewport,
            frame: self.frames,
        });

        outcome
    }

    /// Apply queued input, in order.
    pub fn handle_input(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            match event {
                InputEvent::PointerDown { x, y } => self.pointer.down(x, y),
                InputEvent::PointerMove { x, y } => {
                    if let Some(PointerAction::Drag { dx, dy }) = self.pointer.moved(x, y) {
                        self.controls.rotate(dx, dy);
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    if let Some(PointerAction::Click { x, y }) = self.pointer.up(x, y) {
                        self.click(x, y);
                    }
                }
                InputEvent::Wheel { notches } => self.controls.zoom(notches),
                InputEvent::Resize { width, height } => {
                    self.resize(width.max(0.0).round() as u32, height.max(0.0).round() as u32);
                }
                InputEvent::Deselect => self.deselect(),
            }
        }
    }

    /// Which body is under the pixel `(x, y)`. Pure query.
    pub fn pick_at(&self, x: f32, y: f32) -> Option<BodyId> {
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            return None;
        }
        let ndc = pixels_to_ndc(x, y, width as f32, height as f32);
        picking::pick(&self.scene, &self.camera, ndc).map(|hit| hit.body)
    }

    /// Inspection result for a click at `(x, y)`. Pure query.
    pub fn inspect_at(&self, x: f32, y: f32) -> Selection {
        self.selection_for(self.pick_at(x, y))
    }

    /// Update the selection for a click at `(x, y)`. A miss deselects.
    pub fn click(&mut self, x: f32, y: f32) -> &Selection {
        self.selected = self.pick_at(x, y);
        self.selection = self.selection_for(self.selected);
        match self.selection.payload() {
            Some(payload) => log::info!("selected {}", payload.name),
            None => log::debug!("click at ({x}, {y}) hit nothing"),
        }
        &self.selection
    }

    fn selection_for(&self, id: Option<BodyId>) -> Selection {
        id.and_then(|id| self.scene.get(id))
            .map(|body| Selection::Selected(InspectionPayload::from_definition(&body.def)))
            .unwrap_or_default()
    }

    /// Close the info panel.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.selection = Selection::Deselected;
    }

    /// Record a new output size. Zero sizes and repeats are ignored.
    /// The renderer hears about it on the next frame.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width, height) == self.viewport {
            return false;
        }
        self.viewport = (width, height);
        self.camera.resize(width as f32, height as f32);
        self.resize_pending = true;
        log::debug!("viewport resized to {width}x{height}");
        true
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn lighting(&self) -> &LightState {
        &self.lighting
    }

    pub fn starfield(&self) -> &[Vec3] {
        &self.starfield
    }

    pub fn orbit_paths(&self) -> &[OrbitPath] {
        &self.orbit_paths
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
