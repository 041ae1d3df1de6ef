use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::snapshot::{LocationSnapshot, SnapshotSlot};
use crate::solar::{compute_sun_visual_with, ArcGeometry, SunVisual, SECONDS_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Idle,
    Running,
}

/// What the clock shows for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockFrame {
    pub generation: u64,
    pub location_name: String,
    /// `"HH:MM:SS"` at the searched location.
    pub local_time: String,
    pub seconds_of_day: u32,
    /// `None` when the snapshot has no usable sun events.
    pub visual: Option<SunVisual>,
}

/// Reads the committed snapshot and derives a frame per tick.
///
/// Holds only a watch receiver, so a tick always sees one whole snapshot.
#[derive(Debug, Clone)]
pub struct LiveClock {
    rx: watch::Receiver<Option<Arc<LocationSnapshot>>>,
    sky_buffer_secs: u32,
    geometry: ArcGeometry,
}

impl LiveClock {
    pub fn new(slot: &SnapshotSlot, sky_buffer_secs: u32) -> Self {
        Self {
            rx: slot.subscribe(),
            sky_buffer_secs,
            geometry: ArcGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: ArcGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn state(&self) -> ClockState {
        if self.rx.borrow().is_some() {
            ClockState::Running
        } else {
            ClockState::Idle
        }
    }

    /// Frame for `now`, or `None` while idle.
    pub fn tick(&self, now: DateTime<Utc>) -> Option<ClockFrame> {
        let snapshot = self.rx.borrow().clone()?;
        let (seconds_of_day, local_time) = local_time_of_day(now, snapshot.utc_offset_minutes);
        let visual = snapshot.events.as_ref().map(|events| {
            compute_sun_visual_with(seconds_of_day, events, self.sky_buffer_secs, &self.geometry)
        });

        Some(ClockFrame {
            generation: snapshot.generation,
            location_name: snapshot.location_name.clone(),
            local_time,
            seconds_of_day,
            visual,
        })
    }
}

/// Seconds since local midnight and `"HH:MM:SS"` for a fixed UTC offset.
///
/// The host time zone plays no part.
pub fn local_time_of_day(now: DateTime<Utc>, utc_offset_minutes: i32) -> (u32, String) {
    let local = now.timestamp() + i64::from(utc_offset_minutes) * 60;
    let seconds = local.rem_euclid(i64::from(SECONDS_PER_DAY)) as u32;
    let label = format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    );
    (seconds, label)
}

/// Drive `clock` until `on_frame` breaks or `shutdown` changes.
///
/// Idle ticks produce no frame.
pub async fn run_clock<F>(
    clock: LiveClock,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
    mut on_frame: F,
) where
    F: FnMut(ClockFrame) -> ControlFlow<()>,
{
    let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(frame) = clock.tick(Utc::now()) {
                    if on_frame(frame).is_break() {
                        tracing::debug!("clock stopped by consumer");
                        break;
                    }
                }
            }
            _ = shutdown.changed() => {
                tracing::info!("clock shutdown signal received");
                break;
            }
        }
    }
}
