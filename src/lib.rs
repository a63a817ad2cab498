//! # quakemap
//!
//! Renders earthquake events from a GeoJSON feed onto a web map, sizing
//! circle markers by magnitude and coloring them by depth.
//!
//! The crate is split the way a small map engine is: geographic primitives
//! and the map context live in [`core`], the feed model and client in
//! [`data`], drawable things in [`layers`] and [`ui`], and output backends
//! in [`rendering`]. The magnitude/depth encoding itself is in [`encoding`].

pub mod core;
pub mod data;
pub mod encoding;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::MapBuilder,
    config::QuakeMapConfig,
    geo::LatLng,
    map::{Map, MapOptions},
};

pub use data::{
    event::EarthquakeEvent,
    feed::{FeedError, FeedSource, HttpFeed, StaticFeed},
    geojson::{parse_feed, GeoJson, GeoJsonFeature},
};

pub use encoding::{depth_color, legend_entries, marker_radius, DepthColor, LegendEntry};

pub use layers::{base::LayerTrait, marker::CircleMarker, tile::TileLayer};

pub use ui::{controls::ControlManager, legend::LegendControl, popup::Popup};

pub use rendering::{
    context::{CircleMarkerSpec, MapRenderer, RecordingRenderer},
    html::HtmlRenderer,
    pipeline::{RenderOutcome, RenderPipeline},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, QuakeMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum QuakeMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = QuakeMapError;
