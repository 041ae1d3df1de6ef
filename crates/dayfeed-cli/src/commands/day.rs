//! Day tracker commands for CLI.

use std::error::Error;
use std::ops::ControlFlow;

use clap::Subcommand;
use dayfeed_core::clock::run_clock;
use dayfeed_core::history::to_query_string;
use dayfeed_core::{Config, Coordinates, DayTracker, LiveClock, TrackerError};
use tokio::sync::watch;

use crate::render::{renderer, Render, TextRenderer};

#[derive(Subcommand)]
pub enum DayAction {
    /// Look up a place and show its day
    Search {
        /// Free-text place, e.g. "Berlin" or "Paris, France"
        query: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the day where you are (flags, else the configured location)
    Locate {
        /// Latitude in decimal degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in decimal degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Look up a place, then keep printing its live clock until Ctrl-C
    Watch {
        /// Free-text place
        query: String,
        /// Stop after this many frames (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,
    },
    /// Print the shareable `?q=` query string for a search term
    Url {
        /// Search term
        query: String,
    },
}

fn user_facing(err: TrackerError) -> Box<dyn Error> {
    err.user_message().into()
}

pub async fn run(action: DayAction, config: &Config) -> Result<(), Box<dyn Error>> {
    match action {
        DayAction::Search { query, json } => {
            let tracker = DayTracker::from_config(config)?;
            let report = tracker.search(&query).await.map_err(user_facing)?;
            println!("{}", renderer(json).day_report(&report)?);
        }
        DayAction::Locate { lat, lon, json } => {
            let tracker = DayTracker::from_config(config)?;
            let position = lat.zip(lon).map(|(lat, lon)| Coordinates::new(lat, lon));
            let report = tracker.locate(position).await.map_err(user_facing)?;
            println!("{}", renderer(json).day_report(&report)?);
        }
        DayAction::Watch { query, ticks } => {
            let tracker = DayTracker::from_config(config)?;
            let report = tracker.search(&query).await.map_err(user_facing)?;
            let text = TextRenderer;
            println!("{}", text.day_report(&report)?);
            println!();

            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        let _ = shutdown_tx.send(true);
                    }
                    Err(e) => {
                        tracing::warn!("cannot listen for Ctrl-C: {}", e);
                        std::future::pending::<()>().await;
                    }
                }
            });

            let clock = LiveClock::new(tracker.slot(), tracker.sky_buffer_secs());
            let mut printed = 0u64;
            run_clock(clock, config.clock.tick_interval(), shutdown_rx, |frame| {
                match text.clock_frame(&frame) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!("cannot render frame: {}", e),
                }
                printed += 1;
                if ticks.is_some_and(|limit| printed >= limit) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;
        }
        DayAction::Url { query } => {
            println!("{}", to_query_string(query.trim()));
        }
    }
    Ok(())
}
