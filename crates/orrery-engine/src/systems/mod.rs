pub mod backdrop;
pub mod lighting;
pub mod orbit;
pub mod picking;
