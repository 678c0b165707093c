pub mod factory;
pub mod scene;
pub mod time;
