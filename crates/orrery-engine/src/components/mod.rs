pub mod body;
pub mod mesh;

pub use body::Body;
pub use mesh::{Shape, VisualPart};
