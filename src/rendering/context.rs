use crate::{
    core::geo::LatLng,
    encoding::{DepthColor, LegendEntry},
    layers::tile::TileLayer,
    ui::{elements::Attribution, elements::Position, legend::LegendControl, popup::Popup},
    Result,
};

/// Initial view handed to the renderer before anything is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSpec {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
}

/// Everything needed to place one circle marker
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarkerSpec {
    pub id: String,
    pub position: LatLng,
    pub radius: f64,
    pub fill_color: DepthColor,
    pub stroke_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup: Option<Popup>,
}

/// Output backend the map draws itself into.
///
/// Calls arrive in a fixed order: `begin`, base tiles, markers in feed
/// order, attribution and legend, then `finish`.
pub trait MapRenderer {
    fn begin(&mut self, view: &ViewSpec) -> Result<()>;

    fn draw_tile_layer(&mut self, layer: &TileLayer) -> Result<()>;

    fn draw_circle_marker(&mut self, marker: &CircleMarkerSpec) -> Result<()>;

    fn draw_attribution(&mut self, attribution: &Attribution) -> Result<()>;

    fn draw_legend(&mut self, legend: &LegendControl) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Begin(ViewSpec),
    TileLayer { url_template: String },
    CircleMarker(CircleMarkerSpec),
    Attribution(String),
    Legend {
        entries: Vec<LegendEntry>,
        position: Position,
    },
    Finish,
}

/// Renderer that keeps the draw calls instead of producing output.
/// Useful headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub drawing_queue: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }

    pub fn markers(&self) -> Vec<&CircleMarkerSpec> {
        self.drawing_queue
            .iter()
            .filter_map(|c| match c {
                DrawCommand::CircleMarker(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn legend(&self) -> Option<(&[LegendEntry], Position)> {
        self.drawing_queue.iter().find_map(|c| match c {
            DrawCommand::Legend { entries, position } => Some((entries.as_slice(), *position)),
            _ => None,
        })
    }

    pub fn attribution(&self) -> Option<&str> {
        self.drawing_queue.iter().find_map(|c| match c {
            DrawCommand::Attribution(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.drawing_queue.last(), Some(DrawCommand::Finish))
    }
}

impl MapRenderer for RecordingRenderer {
    fn begin(&mut self, view: &ViewSpec) -> Result<()> {
        self.drawing_queue.clear();
        self.drawing_queue.push(DrawCommand::Begin(view.clone()));
        Ok(())
    }

    fn draw_tile_layer(&mut self, layer: &TileLayer) -> Result<()> {
        self.drawing_queue.push(DrawCommand::TileLayer {
            url_template: layer.url_template().to_string(),
        });
        Ok(())
    }

    fn draw_circle_marker(&mut self, marker: &CircleMarkerSpec) -> Result<()> {
        self.drawing_queue
            .push(DrawCommand::CircleMarker(marker.clone()));
        Ok(())
    }

    fn draw_attribution(&mut self, attribution: &Attribution) -> Result<()> {
        self.drawing_queue
            .push(DrawCommand::Attribution(attribution.text().to_string()));
        Ok(())
    }

    fn draw_legend(&mut self, legend: &LegendControl) -> Result<()> {
        self.drawing_queue.push(DrawCommand::Legend {
            entries: legend.entries().to_vec(),
            position: legend.position(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.drawing_queue.push(DrawCommand::Finish);
        Ok(())
    }
}
