/// Unique identifier for a body in the scene.
/// Equal to the body's index in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a call to `Orrery::run_frame` did to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Bodies were advanced by the frame delta.
    Advanced,
    /// The delta was rejected; only controls and rendering ran.
    Skipped,
}
