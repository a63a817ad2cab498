use crate::{
    core::{config::MarkerPathStyle, geo::LatLng},
    data::event::EarthquakeEvent,
    encoding::{depth_color, marker_radius, DepthColor},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::{CircleMarkerSpec, MapRenderer},
    ui::popup::Popup,
    Result,
};

/// A circle marker whose size and fill encode one earthquake
pub struct CircleMarker {
    properties: LayerProperties,
    position: LatLng,
    radius: f64,
    fill_color: DepthColor,
    style: MarkerPathStyle,
    popup: Option<Popup>,
}

impl CircleMarker {
    pub fn new(id: String, position: LatLng, radius: f64, fill_color: DepthColor) -> Self {
        let properties = LayerProperties::new(id, "Circle Marker".to_string(), LayerType::Marker);
        Self {
            properties,
            position,
            radius,
            fill_color,
            style: MarkerPathStyle::default(),
            popup: None,
        }
    }

    /// Radius from magnitude, fill from depth, popup describing the event
    pub fn from_event(id: String, event: &EarthquakeEvent, style: &MarkerPathStyle) -> Self {
        let mut marker = Self::new(
            id,
            event.position(),
            marker_radius(event.magnitude),
            depth_color(event.depth()),
        )
        .with_style(style.clone())
        .with_popup(Popup::for_event(event));
        if !event.place.is_empty() {
            marker.properties.name = event.place.clone();
        }
        marker
    }

    pub fn with_style(mut self, style: MarkerPathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fill_color(&self) -> DepthColor {
        self.fill_color
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// What the renderer draws; layer opacity scales both path opacities
    pub fn spec(&self) -> CircleMarkerSpec {
        let layer_opacity = f64::from(self.properties.opacity);
        CircleMarkerSpec {
            id: self.properties.id.clone(),
            position: self.position,
            radius: self.radius,
            fill_color: self.fill_color,
            stroke_color: self.style.stroke_color.clone(),
            weight: self.style.weight,
            opacity: self.style.opacity * layer_opacity,
            fill_opacity: self.style.fill_opacity * layer_opacity,
            popup: self.popup.clone(),
        }
    }
}

impl LayerTrait for CircleMarker {
    crate::impl_layer_trait!(CircleMarker, properties);

    fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        renderer.draw_circle_marker(&self.spec())
    }

    fn options(&self) -> serde_json::Value {
        let mut options = self.properties.to_json();
        options["position"] = serde_json::json!({
            "lat": self.position.lat,
            "lng": self.position.lng
        });
        options["radius"] = serde_json::json!(self.radius);
        options["fill_color"] = serde_json::json!(self.fill_color.hex());
        options["popup"] = serde_json::json!(self.popup.as_ref().map(|p| p.to_string()));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_from_event() {
        let event = EarthquakeEvent::new("Ridgecrest, CA", 2.5, [-117.6, 35.7, 10.0]).with_id("ci1");
        let marker = CircleMarker::from_event("ci1".to_string(), &event, &MarkerPathStyle::default());

        assert_eq!(marker.radius(), 10.0);
        assert_eq!(marker.fill_color(), DepthColor::Yellow);
        assert_eq!(marker.position(), LatLng::new(35.7, -117.6));
        assert_eq!(marker.name(), "Ridgecrest, CA");
        assert_eq!(marker.popup().unwrap().magnitude, 2.5);
    }

    #[test]
    fn test_spec_applies_layer_opacity() {
        let event = EarthquakeEvent::new("x", 1.0, [0.0, 0.0, 95.0]);
        let mut marker = CircleMarker::from_event("m".to_string(), &event, &MarkerPathStyle::default());
        marker.set_opacity(0.5);

        let spec = marker.spec();
        assert_eq!(spec.fill_color, DepthColor::Red);
        assert_eq!(spec.fill_opacity, 0.4);
        assert_eq!(spec.opacity, 0.5);
        assert_eq!(spec.weight, 0.5);
        assert_eq!(spec.stroke_color, "#000");
    }

    #[test]
    fn test_options_snapshot() {
        let event = EarthquakeEvent::new("x", 3.0, [1.0, 2.0, 40.0]);
        let marker = CircleMarker::from_event("m".to_string(), &event, &MarkerPathStyle::default());
        let options = marker.options();

        assert_eq!(options["layer_type"], "marker");
        assert_eq!(options["radius"], 12.0);
        assert_eq!(options["fill_color"], "#FFA500");
        assert_eq!(options["position"]["lat"], 2.0);
    }
}
