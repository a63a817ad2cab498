use crate::{
    core::config::TileConfig,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::MapRenderer,
    Result,
};

/// Raster base layer described by a `{s}/{z}/{x}/{y}` URL template
pub struct TileLayer {
    properties: LayerProperties,
    url_template: String,
    subdomains: Vec<String>,
}

impl TileLayer {
    pub fn new(id: String, name: String, url_template: String) -> Self {
        let mut properties = LayerProperties::new(id, name, LayerType::Tile);
        // Base tiles always sit under the markers
        properties.z_index = -1;
        Self {
            properties,
            url_template,
            subdomains: Vec::new(),
        }
    }

    /// Standard OpenStreetMap tiles on the a/b/c subdomains
    pub fn openstreetmap(id: String, name: String) -> Self {
        Self::from_config(id, name, &TileConfig::default())
    }

    pub fn from_config(id: String, name: String, config: &TileConfig) -> Self {
        Self::new(id, name, config.url_template.clone()).with_subdomains(config.subdomains.clone())
    }

    pub fn with_subdomains(mut self, subdomains: Vec<String>) -> Self {
        self.subdomains = subdomains;
        self
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        renderer.draw_tile_layer(self)
    }

    fn options(&self) -> serde_json::Value {
        let mut options = self.properties.to_json();
        options["url_template"] = serde_json::json!(self.url_template);
        options["subdomains"] = serde_json::json!(self.subdomains);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstreetmap_defaults() {
        let layer = TileLayer::openstreetmap("osm".to_string(), "OpenStreetMap".to_string());
        assert_eq!(
            layer.url_template(),
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
        assert_eq!(layer.subdomains(), ["a", "b", "c"]);
        assert_eq!(layer.z_index(), -1);
        assert_eq!(layer.layer_type(), LayerType::Tile);
    }

    #[test]
    fn test_options_snapshot() {
        let layer = TileLayer::new(
            "topo".to_string(),
            "Topo".to_string(),
            "https://tiles.example.com/{z}/{y}/{x}.png".to_string(),
        );
        let options = layer.options();
        assert_eq!(options["url_template"], "https://tiles.example.com/{z}/{y}/{x}.png");
        assert_eq!(options["subdomains"], serde_json::json!([]));
        assert_eq!(options["layer_type"], "tile");
    }
}
