//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::{LegendConfig, MarkerPathStyle, QuakeMapConfig, TileConfig},
    geo::LatLng,
    map::{Map, MapOptions},
};

pub use crate::data::{
    event::EarthquakeEvent,
    feed::{FeedError, FeedSource, HttpFeed, StaticFeed},
    geojson::{parse_feed, GeoJson, GeoJsonFeature, GeoJsonGeometry},
};

pub use crate::encoding::{depth_color, legend_entries, marker_radius, DepthColor, LegendEntry};

pub use crate::layers::{
    base::{LayerProperties, LayerTrait, LayerType},
    manager::LayerManager,
    marker::CircleMarker,
    tile::TileLayer,
};

pub use crate::ui::{
    controls::ControlManager,
    elements::{Attribution, Position},
    legend::LegendControl,
    popup::Popup,
};

pub use crate::rendering::{
    context::{CircleMarkerSpec, MapRenderer, RecordingRenderer, ViewSpec},
    html::HtmlRenderer,
    pipeline::{RenderOutcome, RenderPipeline},
};

pub use crate::{Error as QuakeMapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
