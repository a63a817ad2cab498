//! Leaflet HTML output
//!
//! Produces a single self-contained page that loads Leaflet from a CDN and
//! replays the map's draw calls as Leaflet script.

use crate::{
    core::constants::LEAFLET_VERSION,
    layers::tile::TileLayer,
    rendering::context::{CircleMarkerSpec, MapRenderer, ViewSpec},
    ui::{elements::Attribution, legend::LegendControl, popup::escape_html},
    Error, Result,
};
use std::fmt::Write;

const LEGEND_CSS: &str = "\
html, body, #map { height: 100%; margin: 0; }
.info.legend { background: white; padding: 6px 8px; line-height: 18px; color: #555; \
box-shadow: 0 0 15px rgba(0, 0, 0, 0.2); border-radius: 5px; }
.info.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.8; }";

/// Encodes a string as a JavaScript literal that is also safe inside `<script>`
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Renders the map as a Leaflet web page
pub struct HtmlRenderer {
    title: String,
    leaflet_version: String,
    container_id: String,
    script: String,
    document: Option<String>,
    marker_count: usize,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            leaflet_version: LEAFLET_VERSION.to_string(),
            container_id: String::new(),
            script: String::new(),
            document: None,
            marker_count: 0,
        }
    }

    pub fn with_leaflet_version(mut self, version: impl Into<String>) -> Self {
        self.leaflet_version = version.into();
        self
    }

    /// The finished page, once `finish` has run
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn into_document(self) -> Option<String> {
        self.document
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    fn line(&mut self, code: &str) -> Result<()> {
        writeln!(self.script, "{}", code).map_err(|e| Error::Render(e.to_string()))
    }

    fn write_document(&self, html: &mut String) -> std::fmt::Result {
        let version = escape_html(&self.leaflet_version);
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "<meta charset=\"utf-8\">")?;
        writeln!(
            html,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(html, "<title>{}</title>", escape_html(&self.title))?;
        writeln!(
            html,
            "<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@{}/dist/leaflet.css\">",
            version
        )?;
        writeln!(
            html,
            "<script src=\"https://unpkg.com/leaflet@{}/dist/leaflet.js\"></script>",
            version
        )?;
        writeln!(html, "<style>\n{}\n</style>", LEGEND_CSS)?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div id=\"{}\"></div>", escape_html(&self.container_id))?;
        writeln!(html, "<script>\n{}</script>", self.script)?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")
    }
}

impl MapRenderer for HtmlRenderer {
    fn begin(&mut self, view: &ViewSpec) -> Result<()> {
        self.script.clear();
        self.document = None;
        self.marker_count = 0;
        self.container_id = view.container_id.clone();

        let code = format!(
            "const map = L.map({}).setView([{}, {}], {});",
            js_string(&view.container_id)?,
            view.center.lat,
            view.center.lng,
            view.zoom
        );
        self.line(&code)
    }

    fn draw_tile_layer(&mut self, layer: &TileLayer) -> Result<()> {
        let mut options = serde_json::Map::new();
        if !layer.subdomains().is_empty() {
            options.insert("subdomains".to_string(), serde_json::json!(layer.subdomains()));
        }
        let code = format!(
            "L.tileLayer({}, {}).addTo(map);",
            js_string(layer.url_template())?,
            serde_json::Value::Object(options)
        );
        self.line(&code)
    }

    fn draw_circle_marker(&mut self, marker: &CircleMarkerSpec) -> Result<()> {
        let options = serde_json::json!({
            "radius": marker.radius,
            "fillColor": marker.fill_color.hex(),
            "color": marker.stroke_color,
            "weight": marker.weight,
            "opacity": marker.opacity,
            "fillOpacity": marker.fill_opacity,
        });
        let mut code = format!(
            "L.circleMarker([{}, {}], {}).addTo(map)",
            marker.position.lat, marker.position.lng, options
        );
        if let Some(popup) = &marker.popup {
            write!(code, ".bindPopup({})", js_string(&popup.to_html())?)
                .map_err(|e| Error::Render(e.to_string()))?;
        }
        code.push(';');
        self.marker_count += 1;
        self.line(&code)
    }

    fn draw_attribution(&mut self, attribution: &Attribution) -> Result<()> {
        let code = format!(
            "map.attributionControl.addAttribution({});",
            js_string(attribution.text())?
        );
        self.line(&code)
    }

    fn draw_legend(&mut self, legend: &LegendControl) -> Result<()> {
        let rows: Vec<String> = legend
            .entries()
            .iter()
            .map(|entry| {
                format!(
                    "<i style=\"background:{}\"></i> {}",
                    entry.color.hex(),
                    escape_html(&entry.label)
                )
            })
            .collect();

        let code = format!(
            "const legend = L.control({{ position: {} }});\n\
             legend.onAdd = function () {{\n  \
             const div = L.DomUtil.create(\"div\", \"info legend\");\n  \
             div.innerHTML = {};\n  \
             return div;\n\
             }};\n\
             legend.addTo(map);",
            js_string(legend.position().as_str())?,
            js_string(&rows.join("<br>"))?
        );
        self.line(&code)
    }

    fn finish(&mut self) -> Result<()> {
        let mut html = String::new();
        self.write_document(&mut html)
            .map_err(|e| Error::Render(e.to_string()))?;

        log::debug!(
            "rendered HTML document with {} markers ({} bytes)",
            self.marker_count,
            html.len()
        );
        self.document = Some(html);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{config::MarkerPathStyle, geo::LatLng},
        data::event::EarthquakeEvent,
        layers::marker::CircleMarker,
        rendering::context::MapRenderer,
        ui::elements::Position,
    };

    fn view() -> ViewSpec {
        ViewSpec {
            container_id: "map".to_string(),
            center: LatLng::new(39.8283, -98.5795),
            zoom: 4.0,
        }
    }

    #[test]
    fn test_js_string_escapes_script_close() {
        assert_eq!(js_string("a</script>b").unwrap(), "\"a<\\/script>b\"");
        assert_eq!(js_string("say \"hi\"").unwrap(), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_document_structure() {
        let mut renderer = HtmlRenderer::new("Earthquakes");
        assert!(renderer.document().is_none());

        renderer.begin(&view()).unwrap();
        renderer
            .draw_tile_layer(&TileLayer::openstreetmap(
                "osm".to_string(),
                "OpenStreetMap".to_string(),
            ))
            .unwrap();
        renderer
            .draw_legend(&LegendControl::new(Position::BottomRight))
            .unwrap();
        renderer.finish().unwrap();

        let html = renderer.document().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Earthquakes</title>"));
        assert!(html.contains("<div id=\"map\"></div>"));
        assert!(html.contains("const map = L.map(\"map\").setView([39.8283, -98.5795], 4);"));
        assert!(html.contains(
            "L.tileLayer(\"https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png\", {\"subdomains\":[\"a\",\"b\",\"c\"]}).addTo(map);"
        ));
        assert!(html.contains("L.control({ position: \"bottomright\" })"));
        assert!(html.contains("<i style=\\\"background:#ADFF2F\\\"><\\/i> -10\u{2013}10 km<br>"));
        assert!(html.contains("90+ km"));
        assert!(html.contains("leaflet@1.9.4/dist/leaflet.js"));
        assert_eq!(renderer.marker_count(), 0);
    }

    #[test]
    fn test_circle_marker_script() {
        let event = EarthquakeEvent::new("<b>Anza</b>, CA", 2.5, [-116.6, 33.5, 12.0]);
        let marker =
            CircleMarker::from_event("ci2".to_string(), &event, &MarkerPathStyle::default());

        let mut renderer = HtmlRenderer::new("t");
        renderer.begin(&view()).unwrap();
        renderer.draw_circle_marker(&marker.spec()).unwrap();
        renderer.finish().unwrap();

        let html = renderer.into_document().unwrap();
        assert!(html.contains("L.circleMarker([33.5, -116.6], {"));
        assert!(html.contains("\"radius\":10.0"));
        assert!(html.contains("\"fillColor\":\"#FFFF00\""));
        assert!(html.contains("\"fillOpacity\":0.8"));
        assert!(html.contains(".bindPopup(\"<h3>&lt;b&gt;Anza&lt;/b&gt;, CA<\\/h3><hr>"));
        assert!(!html.contains("<b>Anza"));
    }

    #[test]
    fn test_begin_resets_state() {
        let mut renderer = HtmlRenderer::new("t");
        renderer.begin(&view()).unwrap();
        let event = EarthquakeEvent::new("x", 1.0, [0.0, 0.0, 0.0]);
        let marker = CircleMarker::from_event("a".to_string(), &event, &MarkerPathStyle::default());
        renderer.draw_circle_marker(&marker.spec()).unwrap();
        renderer.finish().unwrap();
        assert_eq!(renderer.marker_count(), 1);

        renderer.begin(&view()).unwrap();
        assert!(renderer.document().is_none());
        assert_eq!(renderer.marker_count(), 0);
    }
}
