//! Visual encoding of earthquake attributes.
//!
//! Maps an event's magnitude to a marker radius and its depth to one of six
//! color buckets. Everything here is pure: the same input always yields the
//! same output and no call depends on another.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixels of marker radius per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Depth thresholds (km) the legend is built from, in ascending order.
pub const LEGEND_DEPTHS: [i32; 6] = [-10, 10, 30, 50, 70, 90];

/// One of the six depth buckets used to color markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthColor {
    LightGreen,
    Yellow,
    Orange,
    DarkOrange,
    OrangeRed,
    Red,
}

impl DepthColor {
    /// All buckets, shallowest first.
    pub const ALL: [DepthColor; 6] = [
        DepthColor::LightGreen,
        DepthColor::Yellow,
        DepthColor::Orange,
        DepthColor::DarkOrange,
        DepthColor::OrangeRed,
        DepthColor::Red,
    ];

    /// CSS hex code for the bucket.
    pub fn hex(&self) -> &'static str {
        match self {
            DepthColor::LightGreen => "#ADFF2F",
            DepthColor::Yellow => "#FFFF00",
            DepthColor::Orange => "#FFA500",
            DepthColor::DarkOrange => "#FF8C00",
            DepthColor::OrangeRed => "#FF4500",
            DepthColor::Red => "#FF0000",
        }
    }

    /// Human-readable name of the bucket.
    pub fn name(&self) -> &'static str {
        match self {
            DepthColor::LightGreen => "light green",
            DepthColor::Yellow => "yellow",
            DepthColor::Orange => "orange",
            DepthColor::DarkOrange => "dark orange",
            DepthColor::OrangeRed => "orange-red",
            DepthColor::Red => "red",
        }
    }
}

impl fmt::Display for DepthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Exclusive upper bounds of the bounded buckets, scanned in order.
/// Anything not below the last bound falls into [`DepthColor::Red`].
const DEPTH_BUCKETS: [(f64, DepthColor); 5] = [
    (10.0, DepthColor::LightGreen),
    (30.0, DepthColor::Yellow),
    (50.0, DepthColor::Orange),
    (70.0, DepthColor::DarkOrange),
    (90.0, DepthColor::OrangeRed),
];

/// Marker radius for a magnitude. Not clamped: zero or negative magnitudes
/// give a zero or negative radius.
pub fn marker_radius(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

/// Color bucket for a depth in kilometers.
///
/// The first bucket whose upper bound exceeds `depth` wins, so a depth that
/// sits exactly on a boundary belongs to the deeper bucket.
pub fn depth_color(depth: f64) -> DepthColor {
    DEPTH_BUCKETS
        .iter()
        .find(|(upper, _)| depth < *upper)
        .map(|(_, color)| *color)
        .unwrap_or(DepthColor::Red)
}

/// A single row of the depth legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: DepthColor,
    pub label: String,
}

/// The fixed legend table: one entry per threshold in [`LEGEND_DEPTHS`].
///
/// Interior rows read `"<low>–<high> km"`, the last one `"<low>+ km"`.
pub fn legend_entries() -> Vec<LegendEntry> {
    LEGEND_DEPTHS
        .iter()
        .enumerate()
        .map(|(i, &low)| {
            let label = match LEGEND_DEPTHS.get(i + 1) {
                Some(high) => format!("{}\u{2013}{} km", low, high),
                None => format!("{}+ km", low),
            };
            LegendEntry {
                color: depth_color(f64::from(low)),
                label,
            }
        })
        .collect()
}
