pub mod controls;
pub mod elements;
pub mod legend;
pub mod popup;

pub use controls::ControlManager;
pub use elements::{Attribution, Position};
pub use legend::LegendControl;
pub use popup::{escape_html, Popup};
