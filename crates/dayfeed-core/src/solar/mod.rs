//! Solar phase engine.
//!
//! Pure functions over API-provided sun-event timestamps:
//! - time-of-day parsing and formatting
//! - sun marker position and sky classification
//! - day timeline segmentation
//! - annual day-length range bar
//! - solstice countdown
//!
//! Nothing here performs I/O; renderers consume the returned data.

mod data;
mod range;
mod solstice;
pub mod time;
mod timeline;
mod visual;

pub use data::{DaySolarData, SunEvents};
pub use range::{compute_range_bar, RangeBar};
pub use solstice::{next_solstice_countdown, Solstice, SolsticeCountdown};
pub use time::{
    format_clock, format_length, format_length_secs, parse_duration, parse_time_to_seconds,
    parse_time_to_seconds_or_zero, SECONDS_PER_DAY,
};
pub use timeline::{
    build_timeline, phase_at, timeline_boundaries, Boundary, TimelinePhase, TimelineSegment,
};
pub use visual::{
    angle_fraction, classify_sky, compute_sun_visual, compute_sun_visual_with, ArcGeometry,
    SkyClass, SunVisual, DEFAULT_SKY_BUFFER_SECS,
};

