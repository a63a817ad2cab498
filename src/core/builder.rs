//! Map builder for fluent API configuration
//!
//! This module provides a MapBuilder that assembles a [`Map`] from a
//! [`QuakeMapConfig`] or from individual settings.

use crate::{
    core::{
        config::{MarkerPathStyle, QuakeMapConfig, TileConfig},
        geo::LatLng,
        map::{Map, MapOptions},
    },
    layers::tile::TileLayer,
    ui::{
        controls::ControlManager,
        elements::{Attribution, Position},
        legend::LegendControl,
    },
    Error, Result,
};

/// Builder for creating and configuring Map instances
pub struct MapBuilder {
    options: MapOptions,
    tiles: Option<TileConfig>,
    legend: Option<Position>,
    marker_style: MarkerPathStyle,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self::from_config(&QuakeMapConfig::default())
    }

    /// Start from every setting in `config`
    pub fn from_config(config: &QuakeMapConfig) -> Self {
        Self {
            options: MapOptions {
                center: config.view.center,
                zoom: config.view.zoom,
                ..MapOptions::default()
            },
            tiles: Some(config.tiles.clone()),
            legend: config.legend.visible.then_some(config.legend.position),
            marker_style: config.marker.clone(),
        }
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.options.center = center;
        self.options.zoom = zoom;
        self
    }

    /// Id of the element the map is mounted into
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.options.container_id = container_id.into();
        self
    }

    pub fn with_tiles(mut self, tiles: TileConfig) -> Self {
        self.tiles = Some(tiles);
        self
    }

    /// No base layer and no attribution
    pub fn without_tiles(mut self) -> Self {
        self.tiles = None;
        self
    }

    pub fn with_legend(mut self, position: Position) -> Self {
        self.legend = Some(position);
        self
    }

    pub fn without_legend(mut self) -> Self {
        self.legend = None;
        self
    }

    pub fn with_marker_style(mut self, style: MarkerPathStyle) -> Self {
        self.marker_style = style;
        self
    }

    pub fn build(self) -> Result<Map> {
        if !self.options.center.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "map center ({}, {})",
                self.options.center.lat, self.options.center.lng
            )));
        }
        if self.options.container_id.is_empty() {
            return Err(Error::Config("container id is empty".to_string()));
        }

        let mut map = Map::new(self.options);
        let mut controls = ControlManager::new();

        if let Some(tiles) = &self.tiles {
            map.set_tile_layer(TileLayer::from_config(
                "base".to_string(),
                "Base tiles".to_string(),
                tiles,
            ));
            if !tiles.attribution.is_empty() {
                controls = controls.with_attribution(Attribution::new(tiles.attribution.clone()));
            }
        }
        if let Some(position) = self.legend {
            controls = controls.with_legend(LegendControl::new(position));
        }

        map.set_controls(controls);
        map.set_marker_style(self.marker_style);
        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
