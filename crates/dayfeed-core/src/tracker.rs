//! Day tracker.
//!
//! A search geocodes a free-text place, then fetches today's record and both
//! solstice records concurrently. The combined result is committed to the
//! shared [`SnapshotSlot`] for the live clock and returned as a
//! [`DayReport`] for rendering.
//!
//! Every search reserves a generation before it starts. If a newer search
//! has already committed by the time an older one finishes, the older result
//! is dropped with [`TrackerError::Superseded`].

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::api::{http_client, Coordinates, GeocodingClient, SunriseClient};
use crate::clock::{local_time_of_day, LocationSnapshot, SnapshotSlot};
use crate::error::FetchError;
use crate::solar::{
    build_timeline, compute_range_bar, compute_sun_visual_with, format_length,
    next_solstice_countdown, ArcGeometry, DaySolarData, RangeBar, Solstice, SolsticeCountdown,
    SunEvents, SunVisual, TimelineSegment,
};
use crate::storage::Config;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("search {generation} was superseded by a newer search")]
    Superseded { generation: u64 },

    #[error("no solstice dates can be represented around year {year}")]
    DateOutOfRange { year: i32 },
}

impl TrackerError {
    /// The single line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::EmptyQuery => "Please enter a location.".to_string(),
            TrackerError::Fetch(FetchError::Transport { message, .. })
            | TrackerError::Fetch(FetchError::NotFound(message))
            | TrackerError::Fetch(FetchError::PermissionDenied(message))
                if !message.is_empty() =>
            {
                message.clone()
            }
            TrackerError::Fetch(_) | TrackerError::DateOutOfRange { .. } => {
                "Something went wrong. Please try again.".to_string()
            }
            TrackerError::Superseded { .. } => "A newer search replaced this one.".to_string(),
        }
    }
}

/// Everything shown for one committed search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub generation: u64,
    /// The term that produced this report, as mirrored into `?q=`.
    pub query: String,
    pub location_name: String,
    pub sunrise: String,
    pub sunset: String,
    pub day_length: String,
    pub range: RangeBar,
    pub countdown: SolsticeCountdown,
    /// Local time at the location when the report was built.
    pub local_time: String,
    /// `None` when today's sunrise or sunset is missing (polar day or night)
    /// or any sun event is unreadable. Missing twilight bounds alone keep it.
    pub timeline: Option<Vec<TimelineSegment>>,
    pub visual: Option<SunVisual>,
}

impl DayReport {
    pub fn sun_data_available(&self) -> bool {
        self.timeline.is_some()
    }
}

pub struct DayTracker {
    geocoder: GeocodingClient,
    sun: SunriseClient,
    slot: Arc<SnapshotSlot>,
    sky_buffer_secs: u32,
    fixed_position: Option<Coordinates>,
}

impl DayTracker {
    pub fn new(geocoder: GeocodingClient, sun: SunriseClient, sky_buffer_secs: u32) -> Self {
        Self {
            geocoder,
            sun,
            slot: Arc::new(SnapshotSlot::new()),
            sky_buffer_secs,
            fixed_position: None,
        }
    }

    /// Tracker wired to the configured endpoints, sky buffer and position.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let http = http_client(&config.api)?;
        let tracker = Self::new(
            GeocodingClient::new(http.clone(), config.api.geocoding_url.clone()),
            SunriseClient::new(http, config.api.sunrise_url.clone()),
            config.clock.sky_buffer_secs,
        );
        let position = config
            .location
            .coordinates()
            .map(|(lat, lon)| Coordinates::new(lat, lon));
        Ok(tracker.with_position(position))
    }

    /// Position used by [`locate`](Self::locate) when none is passed.
    pub fn with_position(mut self, position: Option<Coordinates>) -> Self {
        self.fixed_position = position;
        self
    }

    pub fn slot(&self) -> &Arc<SnapshotSlot> {
        &self.slot
    }

    pub fn sky_buffer_secs(&self) -> u32 {
        self.sky_buffer_secs
    }

    pub async fn search(&self, query: &str) -> Result<DayReport, TrackerError> {
        self.search_at(query, Utc::now()).await
    }

    /// Search as if the current instant were `now`.
    pub async fn search_at(
        &self,
        query: &str,
        now: DateTime<Utc>,
    ) -> Result<DayReport, TrackerError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TrackerError::EmptyQuery);
        }
        let generation = self.slot.begin();
        self.run_search(generation, query, now).await
    }

    /// Name the place at `position` (or the configured one) and search it.
    ///
    /// # Errors
    /// `PermissionDenied` when no position is known at all.
    pub async fn locate(&self, position: Option<Coordinates>) -> Result<DayReport, TrackerError> {
        let position = position.or(self.fixed_position).ok_or_else(|| {
            FetchError::PermissionDenied(
                "Unable to retrieve your location. Please check permissions.".into(),
            )
        })?;
        tracing::debug!(
            "Locating position {}, {}",
            position.latitude,
            position.longitude
        );

        let place = self.geocoder.reverse(position).await.map_err(|e| match e {
            FetchError::Transport { service, .. } => FetchError::Transport {
                service,
                message: "Failed to retrieve location info.".into(),
            },
            other => other,
        })?;

        let query = place.search_query();
        if query.is_empty() {
            return Err(FetchError::NotFound("Could not determine your city name.".into()).into());
        }
        self.search(&query).await
    }

    async fn run_search(
        &self,
        generation: u64,
        query: &str,
        now: DateTime<Utc>,
    ) -> Result<DayReport, TrackerError> {
        let year = now.year();
        let out_of_range = || TrackerError::DateOutOfRange { year };
        let june_date = Solstice::June.api_date(year).ok_or_else(out_of_range)?;
        let december_date = Solstice::December.api_date(year).ok_or_else(out_of_range)?;
        let countdown = next_solstice_countdown(now).ok_or_else(out_of_range)?;

        let place = self.geocoder.search(query).await?;
        let position = place.coordinates();

        let (today, june, december) = tokio::try_join!(
            self.sun.day(position, now.date_naive()),
            self.sun.day(position, june_date),
            self.sun.day(position, december_date)
        )?;

        let events = match SunEvents::try_from(&today) {
            Ok(events) => {
                if !events.is_monotonic() {
                    tracing::debug!("Sun events for {} are out of order", place.display_name());
                }
                if !events.has_night() {
                    tracing::debug!("No astronomical night at {}", place.display_name());
                }
                Some(events)
            }
            Err(e) => {
                tracing::warn!("Sun data unavailable for {}: {}", place.display_name(), e);
                None
            }
        };

        let snapshot = LocationSnapshot {
            generation,
            location_name: place.display_name(),
            utc_offset_minutes: today.utc_offset_minutes(),
            today,
            events,
        };
        let report = self.report(&snapshot, query, &june, &december, countdown, now);

        if !self.slot.commit(snapshot) {
            tracing::warn!(
                "Discarding stale result for '{}' (generation {}, committed {})",
                query,
                generation,
                self.slot.committed_generation()
            );
            return Err(TrackerError::Superseded { generation });
        }

        tracing::info!(
            "Committed '{}' as {} (generation {})",
            query,
            report.location_name,
            generation
        );
        Ok(report)
    }

    fn report(
        &self,
        snapshot: &LocationSnapshot,
        query: &str,
        june: &DaySolarData,
        december: &DaySolarData,
        countdown: SolsticeCountdown,
        now: DateTime<Utc>,
    ) -> DayReport {
        let today = &snapshot.today;
        let (seconds, local_time) = local_time_of_day(now, snapshot.utc_offset_minutes);

        DayReport {
            generation: snapshot.generation,
            query: query.to_string(),
            location_name: snapshot.location_name.clone(),
            sunrise: today.sunrise_label().to_string(),
            sunset: today.sunset_label().to_string(),
            day_length: format_length(today.day_length_raw()),
            range: compute_range_bar(
                today.day_length_raw(),
                june.day_length_raw(),
                december.day_length_raw(),
            ),
            countdown,
            local_time,
            timeline: snapshot.events.as_ref().map(build_timeline),
            visual: snapshot.events.as_ref().map(|events| {
                compute_sun_visual_with(
                    seconds,
                    events,
                    self.sky_buffer_secs,
                    &ArcGeometry::default(),
                )
            }),
        }
    }
}
