use crate::{
    core::geo::LatLng,
    data::geojson::{GeoJsonFeature, GeoJsonGeometry},
};
use serde::{Deserialize, Serialize};

/// One earthquake from the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    /// Feed-assigned id, when the feature carries one
    pub id: Option<String>,
    /// Human-readable location, e.g. "10 km NE of Pahala, Hawaii"
    pub place: String,
    pub magnitude: f64,
    /// Longitude, latitude, depth in kilometers
    pub coordinates: [f64; 3],
}

impl EarthquakeEvent {
    pub fn new(place: impl Into<String>, magnitude: f64, coordinates: [f64; 3]) -> Self {
        Self {
            id: None,
            place: place.into(),
            magnitude,
            coordinates,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn depth(&self) -> f64 {
        self.coordinates[2]
    }

    pub fn position(&self) -> LatLng {
        LatLng::from_lng_lat(self.longitude(), self.latitude())
    }
}

/// Why a feature could not become an event
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("feature has no geometry")]
    MissingGeometry,
    #[error("geometry is not a point")]
    NotAPoint,
    #[error("point has {0} coordinates, need longitude, latitude and depth")]
    MissingDepth(usize),
    /// `mag` absent, `null` or not a number. A browser map would coerce a
    /// null magnitude to a zero-radius marker with "Magnitude: null" in its
    /// popup; such features are dropped here instead.
    #[error("feature has no numeric magnitude")]
    MissingMagnitude,
}

impl TryFrom<&GeoJsonFeature> for EarthquakeEvent {
    type Error = SkipReason;

    fn try_from(feature: &GeoJsonFeature) -> Result<Self, Self::Error> {
        let coordinates = match &feature.geometry {
            None => return Err(SkipReason::MissingGeometry),
            Some(GeoJsonGeometry::Point { coordinates }) => coordinates,
            Some(_) => return Err(SkipReason::NotAPoint),
        };
        let [lng, lat, depth] = match coordinates.as_slice() {
            [lng, lat, depth, ..] => [*lng, *lat, *depth],
            other => return Err(SkipReason::MissingDepth(other.len())),
        };

        let magnitude = feature
            .property("mag")
            .and_then(|v| v.as_f64())
            .ok_or(SkipReason::MissingMagnitude)?;
        let place = feature
            .property("place")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            id: feature.id_string(),
            place,
            magnitude,
            coordinates: [lng, lat, depth],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(json: &str) -> GeoJsonFeature {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_feature_to_event() {
        let f = feature(
            r#"{
                "type": "Feature",
                "id": "hv74512345",
                "properties": { "mag": 2.5, "place": "5 km SW of Volcano, Hawaii" },
                "geometry": { "type": "Point", "coordinates": [-155.27, 19.39, 1.8] }
            }"#,
        );

        let event = EarthquakeEvent::try_from(&f).unwrap();
        assert_eq!(event.id.as_deref(), Some("hv74512345"));
        assert_eq!(event.place, "5 km SW of Volcano, Hawaii");
        assert_eq!(event.magnitude, 2.5);
        assert_eq!(event.depth(), 1.8);
        assert_eq!(event.position(), LatLng::new(19.39, -155.27));
    }

    #[test]
    fn test_missing_place_is_empty() {
        let f = feature(
            r#"{ "properties": { "mag": 1.1, "place": null },
                 "geometry": { "type": "Point", "coordinates": [0, 0, 10] } }"#,
        );
        assert_eq!(EarthquakeEvent::try_from(&f).unwrap().place, "");
    }

    #[test]
    fn test_skip_reasons() {
        let no_mag = feature(
            r#"{ "properties": { "mag": null, "place": "x" },
                 "geometry": { "type": "Point", "coordinates": [0, 0, 10] } }"#,
        );
        assert_eq!(
            EarthquakeEvent::try_from(&no_mag),
            Err(SkipReason::MissingMagnitude)
        );

        let flat = feature(
            r#"{ "properties": { "mag": 1.0 },
                 "geometry": { "type": "Point", "coordinates": [0, 0] } }"#,
        );
        assert_eq!(
            EarthquakeEvent::try_from(&flat),
            Err(SkipReason::MissingDepth(2))
        );

        let no_geom = feature(r#"{ "properties": { "mag": 1.0 }, "geometry": null }"#);
        assert_eq!(
            EarthquakeEvent::try_from(&no_geom),
            Err(SkipReason::MissingGeometry)
        );

        let line = feature(
            r#"{ "properties": { "mag": 1.0 },
                 "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] } }"#,
        );
        assert_eq!(EarthquakeEvent::try_from(&line), Err(SkipReason::NotAPoint));
    }
}
