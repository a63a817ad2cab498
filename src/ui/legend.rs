use crate::{
    encoding::{legend_entries, LegendEntry},
    rendering::context::MapRenderer,
    traits::Control,
    ui::elements::Position,
    Result,
};

/// Static depth legend: one colored row per depth bucket
#[derive(Debug, Clone, PartialEq)]
pub struct LegendControl {
    position: Position,
    entries: Vec<LegendEntry>,
    visible: bool,
}

impl LegendControl {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            entries: legend_entries(),
            visible: true,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}

impl Default for LegendControl {
    fn default() -> Self {
        Self::new(Position::BottomRight)
    }
}

impl Control for LegendControl {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        renderer.draw_legend(self)
    }
}
