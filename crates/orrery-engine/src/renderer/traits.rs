//! Renderer seam.
//!
//! The engine never draws. Each frame it hands a read-only `FrameData`
//! snapshot to whatever implements `Renderer`: the flat frame buffer the
//! JavaScript side reads, or a recording stub in tests.

use crate::api::types::BodyId;
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::LightState;

/// Renderer contract consumed by `Orrery::run_frame`.
pub trait Renderer {
    /// Backend identifier (e.g. "frame-buffer", "webgl").
    fn backend(&self) -> &'static str;

    /// Draw the current frame. Must not mutate simulation state.
    fn render(&mut self, frame: &FrameData);

    /// Output surface resized (pixels, both non-zero).
    fn resize(&mut self, width: u32, height: u32);
}

/// Everything a renderer needs for one frame.
pub struct FrameData<'a> {
    pub scene: &'a Scene,
    pub camera: &'a PerspectiveCamera,
    pub lighting: &'a LightState,
    /// Body whose info panel is open, if any.
    pub selected: Option<BodyId>,
    /// Output surface size in pixels.
    pub viewport: (u32, u32),
    /// Frames rendered so far, including this one.
    pub frame: u64,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use glam::Vec3;

    /// Records what it was asked to draw.
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub frames: u64,
        pub last_positions: Vec<Vec3>,
        pub last_eye: Vec3,
        pub last_selected: Option<BodyId>,
        pub resizes: Vec<(u32, u32)>,
    }

    impl Renderer for RecordingRenderer {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn render(&mut self, frame: &FrameData) {
            self.frames += 1;
            self.last_positions = frame.scene.iter().map(|b| b.position).collect();
            self.last_eye = frame.camera.position;
            self.last_selected = frame.selected;
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.resizes.push((width, height));
        }
    }
}
