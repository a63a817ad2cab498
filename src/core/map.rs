use crate::{
    core::{
        config::MarkerPathStyle,
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MAP_CONTAINER_ID},
        geo::LatLng,
    },
    data::event::EarthquakeEvent,
    layers::{base::LayerTrait, manager::LayerManager, marker::CircleMarker, tile::TileLayer},
    rendering::context::{MapRenderer, ViewSpec},
    ui::controls::ControlManager,
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container_id: MAP_CONTAINER_ID.to_string(),
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// The map context: view, base tiles, earthquake markers and controls.
///
/// Owned by whoever renders it; nothing here is global.
pub struct Map {
    options: MapOptions,
    tile_layer: Option<TileLayer>,
    layers: LayerManager,
    controls: ControlManager,
    marker_style: MarkerPathStyle,
}

impl Map {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            tile_layer: None,
            layers: LayerManager::new(),
            controls: ControlManager::new(),
            marker_style: MarkerPathStyle::default(),
        }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        if !center.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "({}, {})",
                center.lat, center.lng
            )));
        }
        self.options.center = center;
        self.options.zoom = zoom;
        Ok(())
    }

    pub fn set_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layer = Some(layer);
    }

    pub fn tile_layer(&self) -> Option<&TileLayer> {
        self.tile_layer.as_ref()
    }

    pub fn set_controls(&mut self, controls: ControlManager) {
        self.controls = controls;
    }

    pub fn controls(&self) -> &ControlManager {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlManager {
        &mut self.controls
    }

    pub fn set_marker_style(&mut self, style: MarkerPathStyle) {
        self.marker_style = style;
    }

    /// Adds an arbitrary layer on top of the base tiles
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.layers.remove_layer(layer_id)
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    /// Adds one circle marker for the event. The marker takes the event's
    /// feed id, or a positional id when the feed has none or it is taken.
    pub fn add_event(&mut self, event: &EarthquakeEvent) -> Result<()> {
        let id = match &event.id {
            Some(id) if !self.layers.contains(id) => id.clone(),
            _ => self.next_marker_id(),
        };
        let marker = CircleMarker::from_event(id, event, &self.marker_style);
        self.layers.add_layer(Box::new(marker))
    }

    pub fn add_events(&mut self, events: &[EarthquakeEvent]) -> Result<()> {
        for event in events {
            self.add_event(event)?;
        }
        log::debug!("map holds {} markers", self.marker_count());
        Ok(())
    }

    fn next_marker_id(&self) -> String {
        let mut n = self.layers.len();
        loop {
            let candidate = format!("quake-{}", n);
            if !self.layers.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn marker_count(&self) -> usize {
        self.layers
            .layers()
            .iter()
            .filter(|l| l.as_any().is::<CircleMarker>())
            .count()
    }

    /// Draws the whole map: view, base tiles, layers, controls
    pub fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        let view = ViewSpec {
            container_id: self.options.container_id.clone(),
            center: self.options.center,
            zoom: self.options.zoom,
        };
        renderer.begin(&view)?;

        if let Some(tile_layer) = &self.tile_layer {
            if tile_layer.is_visible() {
                tile_layer.render(renderer)?;
            }
        }

        self.layers.render(renderer)?;
        self.controls.render(renderer)?;
        renderer.finish()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}
