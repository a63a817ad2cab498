//! Feed sources
//!
//! A feed yields the current list of earthquakes or fails with
//! [`FeedError::Unavailable`]. Transport errors, HTTP error statuses and
//! unparsable bodies all collapse into that one kind; nothing is retried.

use crate::{
    core::{config::FeedConfig, constants::USER_AGENT},
    data::{event::EarthquakeEvent, geojson::parse_feed},
};
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed unavailable from {source_name}: {reason}")]
    Unavailable { source_name: String, reason: String },
}

impl FeedError {
    pub fn unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        FeedError::Unavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Anything that can produce the event list
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches and parses the feed
    async fn fetch(&self) -> Result<Vec<EarthquakeEvent>, FeedError>;

    /// Short description used in logs
    fn describe(&self) -> String;
}

/// Fetches the feed over HTTP with a single GET
pub struct HttpFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpFeed {
    /// Feed at `url` with the default client settings
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        Self::from_config(&FeedConfig {
            url: url.into(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: None,
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::unavailable(config.url.clone(), e))?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<EarthquakeEvent>, FeedError> {
        log::info!("fetching earthquake feed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FeedError::unavailable(&self.url, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::unavailable(&self.url, e))?;
        log::debug!("downloaded {} bytes from {}", body.len(), self.url);

        let events = parse_feed(&body).map_err(|e| FeedError::unavailable(&self.url, e))?;
        log::info!("feed returned {} events", events.len());
        Ok(events)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Serves a GeoJSON document already in memory, e.g. a saved copy of the feed
pub struct StaticFeed {
    label: String,
    body: String,
}

impl StaticFeed {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    /// Reads the document from disk; a missing file is reported as unavailable
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let body = std::fs::read_to_string(path).map_err(|e| FeedError::unavailable(&label, e))?;
        Ok(Self { label, body })
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch(&self) -> Result<Vec<EarthquakeEvent>, FeedError> {
        parse_feed(&self.body).map_err(|e| FeedError::unavailable(&self.label, e))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_static_feed_parses_events() {
        let feed = StaticFeed::new(
            "inline",
            r#"{ "type": "FeatureCollection", "features": [
                { "type": "Feature", "properties": { "mag": 2.5, "place": "A" },
                  "geometry": { "type": "Point", "coordinates": [10.0, 20.0, 5.0] } }
            ] }"#,
        );

        let events = block_on(feed.fetch()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].place, "A");
        assert_eq!(feed.describe(), "inline");
    }

    #[test]
    fn test_static_feed_bad_body_is_unavailable() {
        let feed = StaticFeed::new("inline", "not json");
        let err = block_on(feed.fetch()).unwrap_err();
        assert!(err.to_string().starts_with("feed unavailable from inline"));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let result = StaticFeed::from_path("/nonexistent/quakes.geojson");
        assert!(matches!(result, Err(FeedError::Unavailable { .. })));
    }

    #[test]
    fn test_http_feed_keeps_url() {
        let feed = HttpFeed::new("http://localhost/feed.geojson").unwrap();
        assert_eq!(feed.url(), "http://localhost/feed.geojson");
        assert_eq!(feed.describe(), "http://localhost/feed.geojson");
    }
}
