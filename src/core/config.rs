//! Configuration for the earthquake map
//!
//! All settings have defaults reproducing the stock USGS weekly map, so an
//! empty configuration file (or none at all) is valid. Files are JSON and any
//! field left out keeps its default.

use crate::{
    core::{
        constants::{
            DEFAULT_ATTRIBUTION, DEFAULT_CENTER, DEFAULT_FEED_URL, DEFAULT_TILE_URL, DEFAULT_ZOOM,
            MARKER_FILL_OPACITY, MARKER_STROKE_COLOR, MARKER_STROKE_OPACITY, MARKER_STROKE_WEIGHT,
            USER_AGENT,
        },
        geo::LatLng,
    },
    ui::elements::Position,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakeMapConfig {
    pub feed: FeedConfig,
    pub view: ViewConfig,
    pub tiles: TileConfig,
    pub legend: LegendConfig,
    pub marker: MarkerPathStyle,
}

impl Default for QuakeMapConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            view: ViewConfig::default(),
            tiles: TileConfig::default(),
            legend: LegendConfig::default(),
            marker: MarkerPathStyle::default(),
        }
    }
}

impl QuakeMapConfig {
    /// Parses a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.view.center.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "view center ({}, {}) is out of range",
                self.view.center.lat, self.view.center.lng
            )));
        }
        if !(0.0..=24.0).contains(&self.view.zoom) {
            return Err(Error::Config(format!(
                "zoom {} outside 0..=24",
                self.view.zoom
            )));
        }
        if self.feed.url.trim().is_empty() {
            return Err(Error::Config("feed url is empty".to_string()));
        }
        Ok(())
    }
}

/// Where and how the feed is fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub user_agent: String,
    /// No timeout unless set; a hung request simply never renders
    pub timeout_secs: Option<u64>,
}

impl FeedConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Base tile layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub url_template: String,
    pub attribution: String,
    pub subdomains: Vec<String>,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub visible: bool,
    pub position: Position,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: Position::BottomRight,
        }
    }
}

/// Outline and fill opacity shared by every circle marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerPathStyle {
    pub stroke_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerPathStyle {
    fn default() -> Self {
        Self {
            stroke_color: MARKER_STROKE_COLOR.to_string(),
            weight: MARKER_STROKE_WEIGHT,
            opacity: MARKER_STROKE_OPACITY,
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }
}
