//! # Dayfeed Core Library
//!
//! Core logic for two small front-ends over third-party HTTP services: a day
//! tracker that shows where the sun is at any place on Earth, and an RSS
//! feed reader. Everything is available through the `dayfeed` CLI; rendering
//! lives there, this crate only returns data.
//!
//! ## Architecture
//!
//! - **Solar**: pure functions turning sun-event timestamps into a sun
//!   marker, sky class, day timeline, annual range bar and solstice countdown
//! - **Clock**: a tick-driven live clock reading an immutable snapshot slot
//! - **Tracker**: geocoding plus concurrent sun-event fetches, committed with
//!   a generation check
//! - **Feed**: rss2json items turned into paged, sanitized cards
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`DayTracker`]: search and locate
//! - [`LiveClock`]: per-tick frames for the committed location
//! - [`FeedReader`]: feed loading and pagination
//! - [`Config`]: application configuration management

pub mod api;
pub mod clock;
pub mod error;
pub mod feed;
pub mod history;
pub mod solar;
pub mod storage;
pub mod tracker;

pub use api::{Coordinates, FeedItem, GeoPlace};
pub use clock::{ClockFrame, ClockState, LiveClock, LocationSnapshot, SnapshotSlot};
pub use error::{ConfigError, CoreError, FetchError, TimeParseError};
pub use feed::{FeedCard, FeedError, FeedPage, FeedReader, Pager};
pub use history::{Navigation, SearchHistory};
pub use solar::{DaySolarData, SkyClass, SunEvents, SunVisual};
pub use storage::Config;
pub use tracker::{DayReport, DayTracker, TrackerError};
