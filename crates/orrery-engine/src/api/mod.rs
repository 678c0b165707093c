pub mod config;
pub mod inspection;
pub mod orrery;
pub mod types;
