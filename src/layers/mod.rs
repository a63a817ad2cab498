#[macro_use]
pub mod macros;

pub mod base;
pub mod manager;
pub mod marker;
pub mod tile;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use manager::LayerManager;
pub use marker::CircleMarker;
pub use tile::TileLayer;
