//! Open-Meteo geocoding client.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{endpoint, Coordinates};
use crate::error::FetchError;

const SERVICE: &str = "geocoding";

/// A geocoding hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPlace {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// `"Paris, Île-de-France, France"`; the region is left out when it
    /// repeats the place name (`"Berlin, Germany"`).
    pub fn display_name(&self) -> String {
        let mut out = self.name.clone();
        if let Some(admin1) = self.admin1.as_deref().filter(|a| !a.is_empty()) {
            if admin1 != self.name {
                out.push_str(", ");
                out.push_str(admin1);
            }
        }
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(", ");
            out.push_str(country);
        }
        out
    }

    /// Free-text query that re-finds this place; always includes the region.
    pub fn search_query(&self) -> String {
        [Some(self.name.as_str()), self.admin1.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeoPlace>,
}

/// Forward and reverse geocoding.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Resolve a free-text query to its best match.
    ///
    /// # Errors
    /// `NotFound` when the service returns no results, `Transport` on a
    /// non-success status or a network failure.
    pub async fn search(&self, query: &str) -> Result<GeoPlace, FetchError> {
        let url = endpoint(
            SERVICE,
            &self.base_url,
            "v1/search",
            &[
                ("name", query.to_string()),
                ("count", "5".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ],
        )?;
        tracing::debug!("Geocoding query via: {}", url);

        let results = self.fetch(url, "Failed to fetch location data").await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound("Location not found".into()))
    }

    /// Name the place at a position.
    pub async fn reverse(&self, position: Coordinates) -> Result<GeoPlace, FetchError> {
        let url = endpoint(
            SERVICE,
            &self.base_url,
            "v1/reverse",
            &[
                ("latitude", position.latitude.to_string()),
                ("longitude", position.longitude.to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ],
        )?;
        tracing::debug!("Reverse geocoding via: {}", url);

        let results = self.fetch(url, "Failed to get your location name").await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound("Could not determine your city name.".into()))
    }

    async fn fetch(&self, url: url::Url, failure: &str) -> Result<Vec<GeoPlace>, FetchError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::debug!("geocoding request error: {}", e);
            FetchError::transport(SERVICE, failure)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("geocoding returned HTTP {}", status);
            return Err(FetchError::transport(SERVICE, failure));
        }

        let body: GeocodingResponse = response.json().await.map_err(|e| {
            tracing::debug!("geocoding body could not be decoded: {}", e);
            FetchError::transport(SERVICE, failure)
        })?;
        tracing::debug!("Geocoding returned {} results", body.results.len());
        Ok(body.results)
    }
}
