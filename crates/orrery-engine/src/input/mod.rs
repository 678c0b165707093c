pub mod pointer;
pub mod queue;

pub use pointer::{PointerAction, PointerTracker};
pub use queue::{InputEvent, InputQueue};
