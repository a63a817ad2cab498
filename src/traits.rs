//! Shared trait abstractions
//!
//! Layers and controls both end up as calls on a [`MapRenderer`]; the traits
//! here are the common surface the map context drives them through.

use crate::{layers::base::LayerType, rendering::context::MapRenderer, Result};

/// Layer operations trait
/// Everything the map needs to order, toggle and draw a layer
pub trait LayerOperations: Send + Sync {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Set layer opacity
    fn set_opacity(&mut self, opacity: f32);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Draw the layer through the renderer
    fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()>;

    /// Get layer options
    fn options(&self) -> serde_json::Value;

    /// Get as Any for downcasting
    fn as_any(&self) -> &dyn std::any::Any;

    /// Get as Any for downcasting (mutable)
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// Anything that draws itself on top of the map layers (legend, attribution)
pub trait Control {
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()>;
}
