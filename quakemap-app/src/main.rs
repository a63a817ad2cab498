use anyhow::Context;
use clap::Parser;
use quakemap::{
    FeedSource, HtmlRenderer, HttpFeed, LatLng, QuakeMapConfig, RenderOutcome, RenderPipeline,
    StaticFeed,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Maps the past week's earthquakes: marker size follows magnitude,
/// color follows depth.
#[derive(Parser, Debug)]
#[command(name = "quakemap-app", version)]
struct Cli {
    /// GeoJSON feed to fetch (defaults to the USGS all-week feed)
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,

    /// Read the feed from a local GeoJSON file instead of fetching it
    #[arg(long, value_name = "FILE", conflicts_with = "feed_url")]
    input: Option<PathBuf>,

    /// Where to write the page; "-" writes to stdout
    #[arg(long, short, value_name = "FILE", default_value = "earthquakes.html")]
    output: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial map center
    #[arg(long, value_name = "LAT,LNG", value_parser = parse_center)]
    center: Option<LatLng>,

    /// Initial zoom level
    #[arg(long, value_name = "Z")]
    zoom: Option<f64>,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn parse_center(value: &str) -> Result<LatLng, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got {:?}", value))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude: {}", e))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("longitude: {}", e))?;
    let center = LatLng::new(lat, lng);
    if !center.is_valid() {
        return Err(format!("({}, {}) is not a valid coordinate", lat, lng));
    }
    Ok(center)
}

fn load_config(cli: &Cli) -> anyhow::Result<QuakeMapConfig> {
    let mut config = match &cli.config {
        Some(path) => QuakeMapConfig::from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => QuakeMapConfig::default(),
    };

    if let Some(url) = &cli.feed_url {
        config.feed.url = url.clone();
    }
    if let Some(center) = cli.center {
        config.view.center = center;
    }
    if let Some(zoom) = cli.zoom {
        config.view.zoom = zoom;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn write_output(path: &Path, document: &str) -> anyhow::Result<()> {
    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
    } else {
        std::fs::write(path, document)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(&cli)?;

    let feed: Box<dyn FeedSource> = match &cli.input {
        Some(path) => match StaticFeed::from_path(path) {
            Ok(feed) => Box::new(feed),
            Err(e) => {
                log::error!("{}", e);
                return Ok(());
            }
        },
        None => match HttpFeed::from_config(&config.feed) {
            Ok(feed) => Box::new(feed),
            Err(e) => {
                log::error!("{}", e);
                return Ok(());
            }
        },
    };

    let pipeline = RenderPipeline::new(config);
    let mut renderer = HtmlRenderer::new("Earthquakes in the Past Week");

    match pipeline.run(feed.as_ref(), &mut renderer).await {
        RenderOutcome::Rendered { markers } => {
            log::debug!("page holds {} markers", markers);
            if let Some(document) = renderer.document() {
                write_output(&cli.output, document)?;
            }
        }
        RenderOutcome::FeedUnavailable => {
            log::warn!("no map written: earthquake feed unavailable");
        }
        RenderOutcome::RenderFailed(reason) => {
            anyhow::bail!("rendering failed: {}", reason);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("61.2, -149.9").unwrap(), LatLng::new(61.2, -149.9));
        assert!(parse_center("61.2").is_err());
        assert!(parse_center("abc,1").is_err());
        assert!(parse_center("95,0").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "quakemap-app",
            "--feed-url",
            "http://localhost/feed.geojson",
            "--center",
            "35,-117",
            "--zoom",
            "6",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.feed.url, "http://localhost/feed.geojson");
        assert_eq!(config.view.center, LatLng::new(35.0, -117.0));
        assert_eq!(config.view.zoom, 6.0);
        assert_eq!(cli.output, PathBuf::from("earthquakes.html"));
    }

    #[test]
    fn test_input_conflicts_with_feed_url() {
        let result = Cli::try_parse_from([
            "quakemap-app",
            "--input",
            "week.geojson",
            "--feed-url",
            "http://localhost/feed.geojson",
        ]);
        assert!(result.is_err());
    }
}
