pub mod frame;
pub mod protocol;

pub use frame::{FrameBuffer, StaticBuffers};
pub use protocol::ProtocolLayout;
