use crate::{core::geo::LatLng, data::event::EarthquakeEvent};
use std::fmt;

/// Popup content attached to an earthquake marker
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub place: String,
    pub magnitude: f64,
    pub depth: f64,
    pub position: LatLng,
}

impl Popup {
    pub fn for_event(event: &EarthquakeEvent) -> Self {
        Self {
            place: event.place.clone(),
            magnitude: event.magnitude,
            depth: event.depth(),
            position: event.position(),
        }
    }

    /// HTML body: place heading, a rule, then the four readings.
    /// The place string comes from the feed and is escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<h3>{}</h3><hr><p>Magnitude: {}</p><p>Depth: {} km</p><p>Latitude: {}</p><p>Longitude: {}</p>",
            escape_html(&self.place),
            self.magnitude,
            self.depth,
            self.position.lat,
            self.position.lng
        )
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.place)?;
        writeln!(f, "Magnitude: {}", self.magnitude)?;
        writeln!(f, "Depth: {} km", self.depth)?;
        writeln!(f, "Latitude: {}", self.position.lat)?;
        write!(f, "Longitude: {}", self.position.lng)
    }
}

/// Escapes the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
