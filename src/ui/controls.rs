use crate::{
    rendering::context::MapRenderer,
    traits::Control,
    ui::{elements::Attribution, legend::LegendControl},
    Result,
};

/// Control manager that handles all map controls
#[derive(Debug, Clone, Default)]
pub struct ControlManager {
    legend: Option<LegendControl>,
    attribution: Option<Attribution>,
}

impl ControlManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the depth legend
    pub fn with_legend(mut self, legend: LegendControl) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Add attribution
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    pub fn legend(&self) -> Option<&LegendControl> {
        self.legend.as_ref()
    }

    pub fn attribution(&self) -> Option<&Attribution> {
        self.attribution.as_ref()
    }

    /// Render all visible controls
    pub fn render(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        if let Some(attribution) = &self.attribution {
            if attribution.is_visible() {
                renderer.draw_attribution(attribution)?;
            }
        }

        if let Some(legend) = &self.legend {
            if legend.is_visible() {
                legend.render(renderer)?;
            }
        }

        Ok(())
    }
}
