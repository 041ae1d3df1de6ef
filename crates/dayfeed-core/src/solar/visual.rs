//! Sun marker placement and sky classification.
//!
//! The marker travels a half circle from sunrise (angle π) to sunset
//! (angle 2π). The sky class is picked by a fixed-priority ladder around
//! sunrise and sunset; see [`classify_sky`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::data::SunEvents;
use super::time::SECONDS_PER_DAY;

/// Default half-width of the sunrise/sunset transition window (30 minutes).
pub const DEFAULT_SKY_BUFFER_SECS: u32 = 1800;

const DAYLIGHT_OPACITY: f64 = 1.0;
const NIGHT_OPACITY: f64 = 0.3;

/// Sky appearance for a moment of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkyClass {
    Day,
    SunriseTransition,
    SunsetTransition,
    CivilTwilight,
    NauticalTwilight,
    Night,
}

impl SkyClass {
    /// Stable style-class name for renderers.
    pub fn css_class(&self) -> &'static str {
        match self {
            SkyClass::Day => "sky-day",
            SkyClass::SunriseTransition => "sky-sunrise",
            SkyClass::SunsetTransition => "sky-sunset",
            SkyClass::CivilTwilight => "sky-civil",
            SkyClass::NauticalTwilight => "sky-nautical",
            SkyClass::Night => "sky-night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkyClass::Day => "day",
            SkyClass::SunriseTransition => "sunrise",
            SkyClass::SunsetTransition => "sunset",
            SkyClass::CivilTwilight => "civil twilight",
            SkyClass::NauticalTwilight => "nautical twilight",
            SkyClass::Night => "night",
        }
    }
}

/// Circle the marker is drawn on. Only the upper half is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for ArcGeometry {
    fn default() -> Self {
        Self {
            radius: 80.0,
            center_x: 100.0,
            center_y: 90.0,
        }
    }
}

/// Everything a renderer needs to draw the sun for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunVisual {
    /// 0.0 at/before sunrise, 1.0 at/after sunset.
    pub angle_fraction: f64,
    pub is_daylight: bool,
    pub sky_class: SkyClass,
    pub marker_x: f64,
    pub marker_y: f64,
    pub opacity: f64,
}

/// Fraction of the sunrise→sunset arc covered at `current`.
pub fn angle_fraction(current: u32, events: &SunEvents) -> f64 {
    if current <= events.sunrise {
        0.0
    } else if current >= events.sunset {
        1.0
    } else {
        // sunrise < current < sunset, so the span is positive.
        f64::from(current - events.sunrise) / f64::from(events.sunset - events.sunrise)
    }
}

/// Pick the sky class with the fixed-priority ladder, first match wins:
///
/// 1. day: `sunrise+b <= t <= sunset-b`
/// 2. sunrise transition: `|t - sunrise| <= b`
/// 3. sunset transition: `|t - sunset| <= b`
/// 4. civil twilight: `dawn <= t < sunrise-b` or `sunset+b < t <= dusk`
/// 5. nautical twilight: `first_light <= t < dawn` or `dusk < t <= last_light`
/// 6. night
///
/// On short days the two transition windows overlap; rule 2 still wins.
///
/// A missing twilight bound extends its band to the edge of the day: without
/// `first_light`/`last_light` nautical twilight runs from midnight to dawn and
/// from dusk to midnight, so the night class never occurs. Without
/// `dawn`/`dusk` the same holds one band up.
pub fn classify_sky(current: u32, events: &SunEvents, buffer_secs: u32) -> SkyClass {
    let day_start = 0;
    let day_end = i64::from(SECONDS_PER_DAY);
    let morning = |bound: Option<u32>| bound.map_or(day_start, i64::from);
    let evening = |bound: Option<u32>| bound.map_or(day_end, i64::from);

    let t = i64::from(current);
    let b = i64::from(buffer_secs);
    let first_light = morning(events.first_light);
    let dawn = morning(events.dawn);
    let sunrise = i64::from(events.sunrise);
    let sunset = i64::from(events.sunset);
    let dusk = evening(events.dusk);
    let last_light = evening(events.last_light);

    if t >= sunrise + b && t <= sunset - b {
        SkyClass::Day
    } else if (t - sunrise).abs() <= b {
        SkyClass::SunriseTransition
    } else if (t - sunset).abs() <= b {
        SkyClass::SunsetTransition
    } else if (t >= dawn && t < sunrise - b) || (t > sunset + b && t <= dusk) {
        SkyClass::CivilTwilight
    } else if (t >= first_light && t < dawn) || (t > dusk && t <= last_light) {
        SkyClass::NauticalTwilight
    } else {
        SkyClass::Night
    }
}

/// Full visual state with the default buffer and arc.
pub fn compute_sun_visual(current: u32, events: &SunEvents) -> SunVisual {
    compute_sun_visual_with(current, events, DEFAULT_SKY_BUFFER_SECS, &ArcGeometry::default())
}

pub fn compute_sun_visual_with(
    current: u32,
    events: &SunEvents,
    buffer_secs: u32,
    arc: &ArcGeometry,
) -> SunVisual {
    let fraction = angle_fraction(current, events);
    let is_daylight = current > events.sunrise && current < events.sunset;
    let angle = PI + fraction * PI;

    SunVisual {
        angle_fraction: fraction,
        is_daylight,
        sky_class: classify_sky(current, events, buffer_secs),
        marker_x: arc.center_x + arc.radius * angle.cos(),
        marker_y: arc.center_y + arc.radius * angle.sin(),
        opacity: if is_daylight { DAYLIGHT_OPACITY } else { NIGHT_OPACITY },
    }
}
