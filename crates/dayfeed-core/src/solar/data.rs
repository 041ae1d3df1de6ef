//! Sun-event records as delivered by the sunrise/sunset API.

use serde::{Deserialize, Serialize};

use super::time::parse_time_to_seconds;
use crate::error::TimeParseError;

/// One day of sun events for a location.
///
/// Time-of-day fields are 12-hour wall-clock strings in the location's local
/// time. Polar days come back with `null` fields, hence the `Option`s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaySolarData {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub first_light: Option<String>,
    #[serde(default)]
    pub dawn: Option<String>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub solar_noon: Option<String>,
    #[serde(default)]
    pub golden_hour: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
    #[serde(default)]
    pub dusk: Option<String>,
    #[serde(default)]
    pub last_light: Option<String>,
    /// `"H:M:S"`.
    #[serde(default)]
    pub day_length: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Minutes east of UTC.
    #[serde(default)]
    pub utc_offset: Option<i32>,
}

impl DaySolarData {
    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset.unwrap_or(0)
    }

    pub fn day_length_raw(&self) -> &str {
        self.day_length.as_deref().unwrap_or("")
    }

    pub fn sunrise_label(&self) -> &str {
        self.sunrise.as_deref().unwrap_or("--")
    }

    pub fn sunset_label(&self) -> &str {
        self.sunset.as_deref().unwrap_or("--")
    }
}

/// The sun events of a day in seconds since local midnight.
///
/// Sunrise and sunset are required. The twilight bounds are `None` when the
/// sun never gets that far below the horizon, as on white nights where
/// `first_light`/`last_light` (and at higher latitudes `dawn`/`dusk`) come
/// back `null`.
///
/// Ordering is not validated: malformed data may yield events out of order,
/// and every consumer tolerates that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunEvents {
    pub first_light: Option<u32>,
    pub dawn: Option<u32>,
    pub sunrise: u32,
    pub sunset: u32,
    pub dusk: Option<u32>,
    pub last_light: Option<u32>,
}

impl SunEvents {
    /// A day with every twilight bound present.
    pub fn full(
        first_light: u32,
        dawn: u32,
        sunrise: u32,
        sunset: u32,
        dusk: u32,
        last_light: u32,
    ) -> Self {
        Self {
            first_light: Some(first_light),
            dawn: Some(dawn),
            sunrise,
            sunset,
            dusk: Some(dusk),
            last_light: Some(last_light),
        }
    }

    /// The events that are present, in nominal chronological order.
    pub fn known_events(&self) -> Vec<u32> {
        [
            self.first_light,
            self.dawn,
            Some(self.sunrise),
            Some(self.sunset),
            self.dusk,
            self.last_light,
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Whether the present events are non-decreasing in their nominal order.
    pub fn is_monotonic(&self) -> bool {
        self.known_events().windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether the sun ever sinks past nautical twilight, i.e. the day has a
    /// dark night band at all.
    pub fn has_night(&self) -> bool {
        self.first_light.is_some() || self.last_light.is_some()
    }
}

impl TryFrom<&DaySolarData> for SunEvents {
    type Error = TimeParseError;

    /// Missing sunrise or sunset fails with [`TimeParseError::Missing`]. A
    /// missing twilight bound becomes `None`; a present but malformed one is
    /// still an error.
    fn try_from(data: &DaySolarData) -> Result<Self, Self::Error> {
        let required = |value: &Option<String>| -> Result<u32, TimeParseError> {
            parse_time_to_seconds(value.as_deref().ok_or(TimeParseError::Missing)?)
        };
        let optional = |value: &Option<String>| -> Result<Option<u32>, TimeParseError> {
            value.as_deref().map(parse_time_to_seconds).transpose()
        };
        Ok(Self {
            first_light: optional(&data.first_light)?,
            dawn: optional(&data.dawn)?,
            sunrise: required(&data.sunrise)?,
            sunset: required(&data.sunset)?,
            dusk: optional(&data.dusk)?,
            last_light: optional(&data.last_light)?,
        })
    }
}

#[cfg(test)]
fn sample_day() -> DaySolarData {
    DaySolarData {
        date: Some("2024-03-20".into()),
        first_light: Some("5:00:00 AM".into()),
        dawn: Some("5:30:00 AM".into()),
        sunrise: Some("6:00:00 AM".into()),
        solar_noon: Some("1:00:00 PM".into()),
        golden_hour: Some("7:00:00 PM".into()),
        sunset: Some("8:00:00 PM".into()),
        dusk: Some("8:30:00 PM".into()),
        last_light: Some("9:00:00 PM".into()),
        day_length: Some("14:00:00".into()),
        timezone: Some("Europe/Berlin".into()),
        utc_offset: Some(60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_record() {
        let json = r#"{
            "date": "2024-01-01",
            "sunrise": "7:58:44 AM",
            "sunset": "4:28:58 PM",
            "first_light": "6:03:07 AM",
            "last_light": "6:24:35 PM",
            "dawn": "7:25:43 AM",
            "dusk": "5:01:59 PM",
            "solar_noon": "12:13:51 PM",
            "golden_hour": "3:44:55 PM",
            "day_length": "8:30:14",
            "timezone": "Europe/London",
            "utc_offset": 0
        }"#;
        let data: DaySolarData = serde_json::from_str(json).unwrap();
        assert_eq!(data.sunrise.as_deref(), Some("7:58:44 AM"));
        assert_eq!(data.utc_offset_minutes(), 0);

        let events = SunEvents::try_from(&data).unwrap();
        assert_eq!(events.sunrise, 7 * 3600 + 58 * 60 + 44);
        assert!(events.is_monotonic());
    }

    #[test]
    fn polar_nulls_are_explicit_failures() {
        let json = r#"{"sunrise": null, "sunset": null, "day_length": "24:00:00", "utc_offset": 120}"#;
        let data: DaySolarData = serde_json::from_str(json).unwrap();
        assert_eq!(SunEvents::try_from(&data), Err(TimeParseError::Missing));
        assert_eq!(data.sunrise_label(), "--");
    }

    #[test]
    fn white_night_keeps_sunrise_and_sunset() {
        let mut data = sample_day();
        data.first_light = None;
        data.last_light = None;
        let events = SunEvents::try_from(&data).unwrap();
        assert_eq!(events.first_light, None);
        assert_eq!(events.dawn, Some(19_800));
        assert_eq!(events.sunrise, 21_600);
        assert!(!events.has_night());
        assert_eq!(events.known_events(), vec![19_800, 21_600, 72_000, 73_800]);
    }

    #[test]
    fn malformed_twilight_bound_is_still_an_error() {
        let mut data = sample_day();
        data.dusk = Some("half past eight".into());
        assert!(matches!(
            SunEvents::try_from(&data),
            Err(TimeParseError::Malformed(_))
        ));
    }

    #[test]
    fn sample_day_is_monotonic() {
        let events = SunEvents::try_from(&sample_day()).unwrap();
        assert_eq!(events.sunrise, 21_600);
        assert_eq!(events.sunset, 72_000);
        assert!(events.is_monotonic());
    }
}
