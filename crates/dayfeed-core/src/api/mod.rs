//! HTTP collaborators.
//!
//! Thin async wrappers around the third-party services:
//! - Open-Meteo geocoding (forward and reverse)
//! - sunrisesunset.io day records
//! - rss2json feed conversion
//!
//! Each client owns a cloned `reqwest::Client` and a base URL taken from
//! [`ApiConfig`](crate::storage::ApiConfig), so tests can point them at a
//! local mock server.

mod geocoding;
mod rss2json;
mod sunrise;

pub use geocoding::{GeoPlace, GeocodingClient};
pub use rss2json::{FeedClient, FeedItem};
pub use sunrise::SunriseClient;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FetchError;
use crate::storage::ApiConfig;

/// A position on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Build the shared HTTP client with the configured timeout and user agent.
pub fn http_client(config: &ApiConfig) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| FetchError::transport("http", e.to_string()))
}

/// Join `path` onto `base` and append the query parameters.
pub(crate) fn endpoint(
    service: &str,
    base: &str,
    path: &str,
    params: &[(&str, String)],
) -> Result<Url, FetchError> {
    let raw = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse_with_params(&raw, params.iter().map(|(k, v)| (*k, v.as_str())))
        .map_err(|e| FetchError::transport(service, format!("invalid endpoint '{raw}': {e}")))
}
