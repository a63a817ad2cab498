use crate::{data::event::EarthquakeEvent, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A GeoJSON position: longitude, latitude and optional altitude/depth
pub type Position = Vec<f64>;

/// GeoJSON geometry types. Only points become events; the other shapes are
/// modeled so a feed mixing them still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    /// Looks up a property, treating a missing properties object as empty
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(key)
    }

    /// The feature id as a string; numeric ids are formatted
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// The `metadata` member USGS attaches to its feeds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    /// Generation time, milliseconds since the epoch
    pub generated: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub status: Option<u16>,
    pub count: Option<usize>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection {
        features: Vec<GeoJsonFeature>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<FeedMetadata>,
    },
}

impl GeoJson {
    /// Parses a GeoJSON document
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    /// All features in document order
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features, .. } => features.iter().collect(),
        }
    }

    pub fn metadata(&self) -> Option<&FeedMetadata> {
        match self {
            GeoJson::FeatureCollection { metadata, .. } => metadata.as_ref(),
            GeoJson::Feature(_) => None,
        }
    }

    /// Converts features to events, skipping (and logging) any that lack a
    /// three-coordinate point or a numeric magnitude
    pub fn events(&self) -> Vec<EarthquakeEvent> {
        let mut events = Vec::new();
        for (index, feature) in self.features().into_iter().enumerate() {
            match EarthquakeEvent::try_from(feature) {
                Ok(event) => events.push(event),
                Err(reason) => log::warn!(
                    "skipping feature {} ({}): {}",
                    index,
                    feature.id_string().unwrap_or_else(|| "no id".to_string()),
                    reason
                ),
            }
        }
        events
    }
}

/// Parses a feed document straight into events
pub fn parse_feed(geojson_str: &str) -> Result<Vec<EarthquakeEvent>> {
    let geojson = GeoJson::from_str(geojson_str)?;
    if let Some(title) = geojson.metadata().and_then(|m| m.title.as_deref()) {
        log::debug!("parsed feed '{}'", title);
    }
    Ok(geojson.events())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"
    {
        "type": "FeatureCollection",
        "metadata": {
            "generated": 1718000000000,
            "url": "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson",
            "title": "USGS All Earthquakes, Past Week",
            "status": 200,
            "api": "1.10.3",
            "count": 3
        },
        "features": [
            {
                "type": "Feature",
                "properties": { "mag": 4.6, "place": "120 km SSE of Sand Point, Alaska", "time": 1717990000000 },
                "geometry": { "type": "Point", "coordinates": [-159.9, 54.3, 35.2] },
                "id": "us7000abcd"
            },
            {
                "type": "Feature",
                "properties": { "mag": null, "place": "Somewhere" },
                "geometry": { "type": "Point", "coordinates": [-117.6, 35.7, 8.0] },
                "id": "ci40000001"
            },
            {
                "type": "Feature",
                "properties": { "mag": 1.2, "place": "3 km W of Cobb, CA" },
                "geometry": { "type": "Point", "coordinates": [-122.76, 38.82, -0.4] },
                "id": "nc73900000"
            }
        ],
        "bbox": [-159.9, 35.7, -0.4, -117.6, 54.3, 35.2]
    }
    "#;

    #[test]
    fn test_feed_parsing() {
        let geojson = GeoJson::from_str(FEED).unwrap();
        assert_eq!(geojson.features().len(), 3);

        let metadata = geojson.metadata().unwrap();
        assert_eq!(metadata.count, Some(3));
        assert_eq!(
            metadata.title.as_deref(),
            Some("USGS All Earthquakes, Past Week")
        );
    }

    #[test]
    fn test_parse_feed_skips_incomplete_features() {
        let events = parse_feed(FEED).unwrap();
        let ids: Vec<_> = events.iter().map(|e| e.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["us7000abcd", "nc73900000"]);
        assert_eq!(events[1].depth(), -0.4);
    }

    #[test]
    fn test_single_feature_document() {
        let events = parse_feed(
            r#"{ "type": "Feature", "id": 7,
                 "properties": { "mag": 3.0, "place": "Here" },
                 "geometry": { "type": "Point", "coordinates": [1.0, 2.0, 3.0] } }"#,
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id.as_deref(), Some("7"));
    }

    #[test]
    fn test_empty_collection() {
        let events = parse_feed(r#"{ "type": "FeatureCollection", "features": [] }"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_feed("<html>"), Err(Error::ParseError(_))));
        assert!(matches!(
            parse_feed(r#"{ "type": "Topology" }"#),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_non_point_geometries_parse_and_skip() {
        let events = parse_feed(
            r#"{ "type": "FeatureCollection", "features": [
                { "type": "Feature", "properties": { "mag": 2.0, "place": "fault trace" },
                  "geometry": { "type": "LineString", "coordinates": [[-120.0, 35.0], [-118.0, 37.0]] } },
                { "type": "Feature", "properties": { "mag": 3.0, "place": "zone" },
                  "geometry": { "type": "GeometryCollection", "geometries": [
                      { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
                  ] } },
                { "type": "Feature", "properties": { "mag": 1.5, "place": "point" },
                  "geometry": { "type": "Point", "coordinates": [-117.0, 34.0, 6.0] } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].place, "point");
    }
}
