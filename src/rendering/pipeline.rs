//! Fetch-then-render pipeline
//!
//! One run performs a single feed fetch. On success every event becomes a
//! marker and the whole map is drawn; on failure the error is logged and
//! the renderer is never touched.

use crate::{
    core::{builder::MapBuilder, config::QuakeMapConfig},
    data::feed::FeedSource,
    rendering::context::MapRenderer,
};

/// What a pipeline run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The map was drawn with this many markers
    Rendered { markers: usize },
    /// The feed could not be retrieved; nothing was drawn
    FeedUnavailable,
    /// The feed loaded but the map could not be built or drawn
    RenderFailed(String),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

pub struct RenderPipeline {
    config: QuakeMapConfig,
}

impl RenderPipeline {
    pub fn new(config: QuakeMapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuakeMapConfig {
        &self.config
    }

    /// Fetches the feed once and draws the map into `renderer`
    pub async fn run(&self, feed: &dyn FeedSource, renderer: &mut dyn MapRenderer) -> RenderOutcome {
        log::debug!("requesting earthquake feed from {}", feed.describe());

        match feed.fetch().await {
            Err(e) => {
                log::error!("{}", e);
                RenderOutcome::FeedUnavailable
            }
            Ok(events) => {
                let result = MapBuilder::from_config(&self.config)
                    .build()
                    .and_then(|mut map| {
                        map.add_events(&events)?;
                        map.render(renderer)?;
                        Ok(map.marker_count())
                    });

                match result {
                    Ok(markers) => {
                        log::info!("rendered {} earthquake markers", markers);
                        RenderOutcome::Rendered { markers }
                    }
                    Err(e) => {
                        log::error!("failed to render map: {}", e);
                        RenderOutcome::RenderFailed(e.to_string())
                    }
                }
            }
        }
    }

    /// Runs the pipeline to completion on the calling thread
    #[cfg(feature = "tokio-runtime")]
    pub fn run_blocking(
        &self,
        feed: &dyn FeedSource,
        renderer: &mut dyn MapRenderer,
    ) -> crate::Result<RenderOutcome> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(runtime.block_on(self.run(feed, renderer)))
    }

    /// Runs the pipeline to completion on the calling thread
    #[cfg(not(feature = "tokio-runtime"))]
    pub fn run_blocking(
        &self,
        feed: &dyn FeedSource,
        renderer: &mut dyn MapRenderer,
    ) -> crate::Result<RenderOutcome> {
        Ok(futures::executor::block_on(self.run(feed, renderer)))
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(QuakeMapConfig::default())
    }
}
