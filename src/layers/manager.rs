use crate::{
    layers::base::LayerTrait, prelude::HashMap, rendering::context::MapRenderer, Error, Result,
};

/// Manages layers for the map, handling ordering and rendering
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index, then insertion)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager. Ids must be unique.
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(Error::Layer(format!("duplicate layer id '{}'", layer_id)));
        }
        let z_index = layer.z_index();

        self.layers.insert(layer_id.clone(), layer);

        // render_order is sorted by z-index; land after every equal or lower one
        let layers = &self.layers;
        let insert_pos = self.render_order.partition_point(|id| {
            layers.get(id).map(|l| l.z_index() <= z_index).unwrap_or(true)
        });

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    pub fn contains(&self, layer_id: &str) -> bool {
        self.layers.contains_key(layer_id)
    }

    /// Applies a function to a specific layer mutably, re-sorting if it
    /// changed the layer's z-index
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        let layer = self.layers.get_mut(layer_id)?;
        let z_before = layer.z_index();
        let result = f(layer.as_mut());
        if layer.z_index() != z_before {
            self.update_render_order();
        }
        Some(result)
    }

    /// Lists layer IDs in render order
    pub fn list_layers(&self) -> Vec<String> {
        self.render_order.clone()
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Renders all visible layers in order
    pub fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        for layer_id in &self.render_order {
            if let Some(layer) = self.layers.get(layer_id) {
                if layer.is_visible() {
                    layer.render(renderer)?;
                }
            }
        }
        Ok(())
    }

    fn update_render_order(&mut self) {
        // sort_by is stable, so equal z-indices keep insertion order
        self.render_order.sort_by(|a, b| {
            let z_a = self.layers.get(a).map(|l| l.z_index()).unwrap_or(0);
            let z_b = self.layers.get(b).map(|l| l.z_index()).unwrap_or(0);
            z_a.cmp(&z_b)
        });
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::config::MarkerPathStyle,
        data::event::EarthquakeEvent,
        layers::marker::CircleMarker,
        rendering::context::RecordingRenderer,
    };

    fn marker(id: &str, depth: f64) -> Box<dyn LayerTrait> {
        let event = EarthquakeEvent::new("Test", 3.0, [-120.0, 36.0, depth]);
        Box::new(CircleMarker::from_event(
            id.to_string(),
            &event,
            &MarkerPathStyle::default(),
        ))
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut manager = LayerManager::new();
        for (i, id) in ["c", "a", "b"].iter().enumerate() {
            manager.add_layer(marker(id, i as f64)).unwrap();
        }
        assert_eq!(manager.list_layers(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_z_index_ordering() {
        let mut manager = LayerManager::new();
        manager.add_layer(marker("low", 1.0)).unwrap();
        manager.add_layer(marker("high", 2.0)).unwrap();
        manager.with_layer_mut("high", |l| l.set_z_index(5));
        manager.add_layer(marker("mid", 3.0)).unwrap();
        manager.with_layer_mut("low", |l| l.set_z_index(-1));

        assert_eq!(manager.list_layers(), vec!["low", "mid", "high"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = LayerManager::new();
        manager.add_layer(marker("dup", 1.0)).unwrap();
        assert!(matches!(
            manager.add_layer(marker("dup", 2.0)),
            Err(Error::Layer(_))
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_hidden_layers_not_rendered() {
        let mut manager = LayerManager::new();
        manager.add_layer(marker("shown", 1.0)).unwrap();
        manager.add_layer(marker("hidden", 2.0)).unwrap();
        manager.with_layer_mut("hidden", |l| l.set_visible(false));

        let mut renderer = RecordingRenderer::new();
        manager.render(&mut renderer).unwrap();

        let ids: Vec<&str> = renderer.markers().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["shown"]);
    }

    #[test]
    fn test_removal() {
        let mut manager = LayerManager::new();
        manager.add_layer(marker("a", 1.0)).unwrap();
        assert!(manager.contains("a"));

        assert!(manager.remove_layer("a").is_some());
        assert!(manager.remove_layer("a").is_none());
        assert!(manager.is_empty());
        assert!(manager.list_layers().is_empty());
    }

    #[test]
    fn test_equal_z_inserts_append() {
        let mut manager = LayerManager::new();
        manager.add_layer(marker("top", 1.0)).unwrap();
        manager.with_layer_mut("top", |l| l.set_z_index(10));
        for i in 0..4 {
            manager.add_layer(marker(&format!("m{}", i), 2.0)).unwrap();
        }
        assert_eq!(manager.list_layers(), vec!["m0", "m1", "m2", "m3", "top"]);
    }

    #[test]
    fn test_large_feed_inserts_scale() {
        let n = 20_000;
        let mut manager = LayerManager::new();
        let start = std::time::Instant::now();
        for i in 0..n {
            manager.add_layer(marker(&format!("quake-{}", i), 10.0)).unwrap();
        }
        let elapsed = start.elapsed();

        assert_eq!(manager.len(), n);
        assert_eq!(manager.list_layers()[n - 1], format!("quake-{}", n - 1));
        assert!(
            elapsed < std::time::Duration::from_secs(5),
            "adding {} markers took {:?}",
            n,
            elapsed
        );
    }
}
