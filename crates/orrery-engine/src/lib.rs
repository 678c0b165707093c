pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{OrbitPathConfig, OrreryConfig, SimulationConfig, StarfieldConfig, ViewConfig};
pub use api::inspection::{format_grouped, InspectionPayload, Selection};
pub use api::orrery::Orrery;
pub use api::types::{BodyId, FrameOutcome};
pub use assets::catalog::{BodyDefinition, Catalog, Color, RingDefinition};
pub use bridge::frame::{FrameBuffer, StaticBuffers};
pub use bridge::protocol::{ProtocolLayout, BODY_INSTANCE_FLOATS, HEADER_FLOATS, PROTOCOL_VERSION};
pub use components::body::Body;
pub use components::mesh::{Shape, VisualPart};
pub use crate::core::scene::Scene;
pub use crate::core::time::{accept_delta, FrameClock, MAX_FRAME_DT};
pub use error::{ConfigError, ConfigResult};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::PerspectiveCamera;
pub use renderer::controls::OrbitControls;
pub use renderer::instance::{BodyInstance, RingInstance};
pub use renderer::traits::{FrameData, Renderer};
pub use systems::backdrop::OrbitPath;
pub use systems::lighting::{LightState, PointLight};
