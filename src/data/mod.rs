pub mod event;
pub mod feed;
pub mod geojson;
