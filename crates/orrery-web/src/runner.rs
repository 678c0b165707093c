use orrery_engine::{
    Catalog, ConfigResult, FrameBuffer, FrameClock, FrameOutcome, InputEvent, InputQueue,
    Orrery, OrreryConfig, StaticBuffers,
};

/// Wires the orrery to the browser frame loop.
///
/// JS pushes pointer and resize events as they arrive and calls `tick`
/// from `requestAnimationFrame`. Each tick drains input, then runs one
/// update-then-render frame into the shared frame buffer.
pub struct OrreryRunner {
    orrery: Orrery,
    clock: FrameClock,
    input: InputQueue,
    frame: FrameBuffer,
    statics: StaticBuffers,
    skipped: u64,
}

impl OrreryRunner {
    /// Build from optional catalog/config JSON. Missing inputs fall back to
    /// the built-in solar system and default settings.
    pub fn new(catalog_json: Option<&str>, config_json: Option<&str>) -> ConfigResult<Self> {
        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(json)?,
            None => Catalog::solar_system()?,
        };
        log::info!("loaded catalog with {} bodies", catalog.len());
        let config = match config_json {
            Some(json) => OrreryConfig::from_json(json)?,
            None => OrreryConfig::default(),
        };
        Ok(Self::from_orrery(Orrery::new(&catalog, config)?))
    }

    pub fn from_orrery(orrery: Orrery) -> Self {
        let statics = StaticBuffers::build(
            orrery.scene(),
            orrery.starfield(),
            orrery.orbit_paths(),
            orrery.lighting(),
        );
        let frame = FrameBuffer::new(orrery.scene().len());
        Self {
            orrery,
            clock: FrameClock::new(),
            input: InputQueue::new(),
            frame,
            statics,
            skipped: 0,
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// One display refresh at platform time `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameOutcome {
        let dt = self.clock.tick(now_ms);
        self.orrery.handle_input(self.input.drain());
        let outcome = self.orrery.run_frame(dt, &mut self.frame);
        if outcome == FrameOutcome::Skipped {
            self.skipped += 1;
        }
        outcome
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn deselect(&mut self) {
        self.orrery.deselect();
    }

    pub fn selection_json(&self) -> String {
        self.orrery.selection().to_json()
    }

    pub fn skipped_frames(&self) -> u64 {
        self.skipped
    }

    // ---- Pointer accessors for wasm memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        self.frame.as_slice()
    }

    pub fn statics(&self) -> &StaticBuffers {
        &self.statics
    }

    pub fn orbit_path_points(&self) -> u32 {
        self.statics.orbit_path_points as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::{HEADER_BODY_COUNT, HEADER_FRAME_COUNTER, HEADER_SELECTED};

    fn runner() -> OrreryRunner {
        let config = r#"{ "view": { "starfield": { "count": 64 } } }"#;
        let mut runner = OrreryRunner::new(None, Some(config)).unwrap();
        runner.push_input(InputEvent::Resize { width: 1000.0, height: 500.0 });
        runner
    }

    #[test]
    fn first_tick_is_skipped_then_frames_advance() {
        let mut runner = runner();
        assert_eq!(runner.tick(5_000.0), FrameOutcome::Skipped);
        assert_eq!(runner.tick(5_016.0), FrameOutcome::Advanced);
        assert_eq!(runner.skipped_frames(), 1);
        assert_eq!(runner.frame()[HEADER_FRAME_COUNTER], 2.0);
        assert_eq!(runner.frame()[HEADER_BODY_COUNT], 9.0);
    }

    #[test]
    fn suspended_tab_gap_is_skipped() {
        let mut runner = runner();
        runner.tick(0.0);
        runner.tick(16.0);
        let before: Vec<f32> = runner.frame()[16..].to_vec();
        assert_eq!(runner.tick(10_016.0), FrameOutcome::Skipped);
        assert_eq!(&runner.frame()[16..], before.as_slice());
    }

    #[test]
    fn statics_are_sized_from_config() {
        let runner = runner();
        assert_eq!(runner.statics().starfield.len(), 64 * 3);
        assert_eq!(runner.orbit_path_points(), 129);
    }

    #[test]
    fn deselect_clears_header_and_json() {
        let mut runner = runner();
        runner.tick(0.0);
        runner.deselect();
        runner.tick(16.0);
        assert_eq!(runner.frame()[HEADER_SELECTED], -1.0);
        assert_eq!(runner.selection_json(), r#"{"selected":false}"#);
    }

    #[test]
    fn bad_catalog_is_a_config_error() {
        assert!(OrreryRunner::new(Some("[]"), None).is_err());
        assert!(OrreryRunner::new(Some("not json"), None).is_err());
    }
}
