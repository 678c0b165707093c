pub mod camera;
pub mod controls;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::PerspectiveCamera;
pub use controls::OrbitControls;
pub use instance::{BodyInstance, InstanceBuffer, RingInstance};
pub use traits::{FrameData, Renderer};
