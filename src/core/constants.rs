//! Defaults for the earthquake map, taken from the USGS feed and Leaflet conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// USGS summary feed: all earthquakes from the past seven days.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Initial map center (geographic center of the contiguous United States).
pub const DEFAULT_CENTER: (f64, f64) = (39.8283, -98.5795);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 4.0;

/// OpenStreetMap raster tiles, Leaflet URL template syntax.
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://openstreetmap.org\">OpenStreetMap</a> contributors";

/// Id of the element the map is mounted into.
pub const MAP_CONTAINER_ID: &str = "map";

/// Leaflet release the HTML output links against.
pub const LEAFLET_VERSION: &str = "1.9.4";

/// Marker outline color.
pub const MARKER_STROKE_COLOR: &str = "#000";

/// Marker outline width in pixels.
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;

/// Marker outline opacity.
pub const MARKER_STROKE_OPACITY: f64 = 1.0;

/// Marker fill opacity.
pub const MARKER_FILL_OPACITY: f64 = 0.8;

/// User agent sent with feed requests.
pub const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));
