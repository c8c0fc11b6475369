//! Clients for the LULC statistics API and the Nominatim district search.

use crate::config::UpstreamConfig;
use crate::data::{into_collection, select_district_feature};
use crate::normalize::normalize_str;
use crate::types::ThematicTable;
use geojson::{FeatureCollection, GeoJson};
use reqwest::StatusCode;
use tracing::{info, warn};

const USER_AGENT: &str = concat!("lulc-map/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    config: UpstreamConfig,
    token: String,
}

impl UpstreamClient {
    /// Builds a client, reading the API token from the configured environment variable.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let token = std::env::var(&config.token_env).unwrap_or_else(|_| {
            warn!("{} not set, LULC requests will be sent without a token", config.token_env);
            String::new()
        });
        Self::with_token(config, token)
    }

    pub fn with_token(config: UpstreamConfig, token: String) -> Result<Self, UpstreamError> {
        // Nominatim rejects requests without an identifying User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;
        Ok(Self { client, config, token })
    }

    /// Fetches and normalizes statistics for `distcode`. A single-area answer keyed by
    /// anything else is re-keyed to `distcode`.
    pub async fn fetch_thematic(&self, distcode: &str, year: Option<&str>) -> Result<ThematicTable, UpstreamError> {
        let year = year.unwrap_or(self.config.year.as_str());
        info!("Fetching LULC data for district code {} ({})", distcode, year);

        let resp = self
            .client
            .get(&self.config.lulc_url)
            .query(&[("distcode", distcode), ("year", year), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| UpstreamError::Http(e.to_string()))?;
        let body = read_body(resp).await?;

        let mut table = normalize_str(&body);
        if table.rekey_single(distcode) {
            info!("Re-keyed single-area LULC response to district {}", distcode);
        }
        Ok(table)
    }

    /// Searches Nominatim for a district polygon. `None` when nothing was found.
    pub async fn search_district(&self, name: &str) -> Result<Option<FeatureCollection>, UpstreamError> {
        let query = format!("{}, India", name);
        info!("Fetching OpenStreetMap polygon for {}", query);

        let resp = self
            .client
            .get(&self.config.nominatim_url)
            .query(&[
                ("q", query.as_str()),
                ("format", "geojson"),
                ("polygon_geojson", "1"),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::Http(e.to_string()))?;
        let body = read_body(resp).await?;

        let geojson: GeoJson = body
            .parse()
            .map_err(|e| UpstreamError::InvalidResponse(format!("geojson parse failed: {e}")))?;
        let results = into_collection(geojson).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;
        let selected = select_district_feature(results);
        if selected.is_none() {
            warn!("No polygon data found on OSM for {}", name);
        }
        Ok(selected)
    }
}

async fn read_body(resp: reqwest::Response) -> Result<String, UpstreamError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| UpstreamError::Http(e.to_string()))?;
    if !status.is_success() {
        return Err(UpstreamError::Status { status, body });
    }
    Ok(body)
}
