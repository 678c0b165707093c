pub mod catalog;

pub use catalog::{BodyDefinition, Catalog, Color, RingDefinition};
