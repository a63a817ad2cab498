pub mod context;
pub mod html;
pub mod pipeline;

// Re-export main types
pub use context::{CircleMarkerSpec, DrawCommand, MapRenderer, RecordingRenderer, ViewSpec};
pub use html::HtmlRenderer;
pub use pipeline::{RenderOutcome, RenderPipeline};
