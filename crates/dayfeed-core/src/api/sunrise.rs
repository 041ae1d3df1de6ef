//! sunrisesunset.io client.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use super::{endpoint, Coordinates};
use crate::error::FetchError;
use crate::solar::DaySolarData;

const SERVICE: &str = "sunrise";

/// `results` is a list for date ranges and a bare object for single days;
/// error replies put an empty string there, so it is decoded only after
/// the status check.
#[derive(Debug, Deserialize)]
struct SunriseResponse {
    #[serde(default)]
    results: serde_json::Value,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Clone)]
pub struct SunriseClient {
    http: Client,
    base_url: String,
}

impl SunriseClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Sun events for one calendar date at `position`.
    ///
    /// # Errors
    /// `Transport` on HTTP/network failure, `NotFound` when the service
    /// answers with a status other than `"OK"` or no record.
    pub async fn day(
        &self,
        position: Coordinates,
        date: NaiveDate,
    ) -> Result<DaySolarData, FetchError> {
        let date = date.format("%Y-%m-%d").to_string();
        let url = endpoint(
            SERVICE,
            &self.base_url,
            "json",
            &[
                ("lat", position.latitude.to_string()),
                ("lng", position.longitude.to_string()),
                ("date_start", date.clone()),
                ("date_end", date),
            ],
        )?;
        tracing::debug!("Fetching sun events from: {}", url);

        let failure = "Failed to fetch day length data";
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::debug!("sunrise request error: {}", e);
            FetchError::transport(SERVICE, failure)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("sunrise service returned HTTP {}", status);
            return Err(FetchError::transport(SERVICE, failure));
        }

        let body: SunriseResponse = response.json().await.map_err(|e| {
            tracing::debug!("sunrise body could not be decoded: {}", e);
            FetchError::transport(SERVICE, failure)
        })?;

        let not_found = || FetchError::NotFound("Could not calculate day length".into());
        if body.status != "OK" {
            return Err(not_found());
        }

        match body.results {
            serde_json::Value::Array(days) => {
                let first = days.into_iter().next().ok_or_else(not_found)?;
                serde_json::from_value(first).map_err(|_| not_found())
            }
            day @ serde_json::Value::Object(_) => {
                serde_json::from_value(day).map_err(|_| not_found())
            }
            _ => Err(not_found()),
        }
    }
}
