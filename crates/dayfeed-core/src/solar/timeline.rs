//! Segmentation of a day into night / twilight / daylight bands.
//!
//! Up to eight boundaries (`0`, the sun events present, `86400`) are
//! stable-sorted by time; each consecutive pair with a positive gap becomes
//! one segment named after the earlier boundary.

use serde::{Deserialize, Serialize};

use super::data::SunEvents;
use super::time::{format_clock, SECONDS_PER_DAY};

/// Sky band a timeline segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelinePhase {
    Night,
    Nautical,
    Civil,
    Day,
}

impl TimelinePhase {
    pub fn name(&self) -> &'static str {
        match self {
            TimelinePhase::Night => "night",
            TimelinePhase::Nautical => "nautical",
            TimelinePhase::Civil => "civil",
            TimelinePhase::Day => "day",
        }
    }
}

/// A point where the sky band changes. `phase` is `None` for the end-of-day
/// sentinel, which never starts a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub phase: Option<TimelinePhase>,
    pub seconds: u32,
}

/// One rendered band of the day bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub phase: TimelinePhase,
    pub start_seconds: u32,
    pub duration_seconds: u32,
    pub width_percent: f64,
    /// `"HH:MM"` of the segment start.
    pub start_label: String,
}

impl TimelineSegment {
    /// Tooltip text, e.g. `"CIVIL: 05:30"`.
    pub fn title(&self) -> String {
        format!("{}: {}", self.phase.name().to_uppercase(), self.start_label)
    }
}

/// Band in effect at midnight: the darkest one the day reaches.
fn midnight_phase(events: &SunEvents) -> TimelinePhase {
    if events.has_night() {
        TimelinePhase::Night
    } else if events.dawn.is_some() || events.dusk.is_some() {
        TimelinePhase::Nautical
    } else {
        TimelinePhase::Civil
    }
}

/// The boundaries of a day, stable-sorted by time.
///
/// Missing twilight bounds contribute no boundary, so their band stretches
/// to midnight. Equal timestamps keep their nominal order, which matters when
/// malformed data collapses several events onto the same second.
pub fn timeline_boundaries(events: &SunEvents) -> Vec<Boundary> {
    use TimelinePhase::*;

    let start = Boundary {
        phase: Some(midnight_phase(events)),
        seconds: 0,
    };
    let present = [
        (Nautical, events.first_light),
        (Civil, events.dawn),
        (Day, Some(events.sunrise)),
        (Civil, Some(events.sunset)),
        (Nautical, events.dusk),
        (Night, events.last_light),
    ];

    let mut boundaries: Vec<Boundary> = std::iter::once(start)
        .chain(present.into_iter().filter_map(|(phase, seconds)| {
            seconds.map(|seconds| Boundary {
                phase: Some(phase),
                seconds,
            })
        }))
        .chain(std::iter::once(Boundary {
            phase: None,
            seconds: SECONDS_PER_DAY,
        }))
        .collect();
    // sort_by_key is stable.
    boundaries.sort_by_key(|b| b.seconds);
    boundaries
}

/// Build the rendered day bar. Zero-length gaps are skipped.
pub fn build_timeline(events: &SunEvents) -> Vec<TimelineSegment> {
    let boundaries = timeline_boundaries(events);

    boundaries
        .windows(2)
        .filter_map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let phase = start.phase?;
            let duration = end.seconds.checked_sub(start.seconds)?;
            if duration == 0 {
                return None;
            }
            Some(TimelineSegment {
                phase,
                start_seconds: start.seconds,
                duration_seconds: duration,
                width_percent: f64::from(duration) / f64::from(SECONDS_PER_DAY) * 100.0,
                start_label: format_clock(start.seconds),
            })
        })
        .collect()
}

/// Phase in effect at `seconds`, according to the segmented timeline.
pub fn phase_at(segments: &[TimelineSegment], seconds: u32) -> Option<TimelinePhase> {
    segments
        .iter()
        .find(|s| seconds >= s.start_seconds && seconds < s.start_seconds + s.duration_seconds)
        .map(|s| s.phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn normal_day() -> SunEvents {
        SunEvents::full(18_000, 19_800, 21_600, 72_000, 73_800, 75_600)
    }

    #[test]
    fn normal_day_has_seven_segments() {
        let segments = build_timeline(&normal_day());
        let phases: Vec<_> = segments.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                TimelinePhase::Night,
                TimelinePhase::Nautical,
                TimelinePhase::Civil,
                TimelinePhase::Day,
                TimelinePhase::Civil,
                TimelinePhase::Nautical,
                TimelinePhase::Night,
            ]
        );
        let total: f64 = segments.iter().map(|s| s.width_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(segments[2].title(), "CIVIL: 05:30");
    }

    #[test]
    fn collapsed_events_are_skipped() {
        let mut e = normal_day();
        e.dawn = e.first_light;
        assert_eq!(timeline_boundaries(&e).len(), 8);
        let segments = build_timeline(&e);
        assert_eq!(segments.len(), 6);
        // The nautical boundary sorts first on the tie and yields nothing.
        assert_eq!(segments[1].phase, TimelinePhase::Civil);
        assert_eq!(segments[1].start_seconds, 18_000);
    }

    #[test]
    fn out_of_order_events_are_sorted() {
        let mut e = normal_day();
        e.dawn = Some(21_600);
        e.sunrise = 19_800;
        let segments = build_timeline(&e);
        assert_eq!(segments[2].phase, TimelinePhase::Day);
        assert_eq!(segments[3].phase, TimelinePhase::Civil);
    }

    #[test]
    fn events_at_midnight_drop_the_leading_night() {
        let e = SunEvents::full(0, 0, 0, 0, 0, 0);
        let segments = build_timeline(&e);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].phase, TimelinePhase::Night);
        assert_eq!(segments[0].duration_seconds, 86_400);
    }

    #[test]
    fn phase_lookup() {
        let segments = build_timeline(&normal_day());
        assert_eq!(phase_at(&segments, 0), Some(TimelinePhase::Night));
        assert_eq!(phase_at(&segments, 21_600), Some(TimelinePhase::Day));
        assert_eq!(phase_at(&segments, 86_399), Some(TimelinePhase::Night));
    }

    #[test]
    fn white_night_starts_and_ends_in_nautical_twilight() {
        let e = SunEvents {
            first_light: None,
            last_light: None,
            ..normal_day()
        };
        let segments = build_timeline(&e);
        let phases: Vec<_> = segments.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                TimelinePhase::Nautical,
                TimelinePhase::Civil,
                TimelinePhase::Day,
                TimelinePhase::Civil,
                TimelinePhase::Nautical,
            ]
        );
        assert_eq!(segments[0].start_seconds, 0);
        assert_eq!(segments[0].duration_seconds, 19_800);
        assert_eq!(phase_at(&segments, 86_399), Some(TimelinePhase::Nautical));
    }

    #[test]
    fn no_twilight_bounds_leaves_civil_around_the_day() {
        let e = SunEvents {
            first_light: None,
            dawn: None,
            dusk: None,
            last_light: None,
            ..normal_day()
        };
        let phases: Vec<_> = build_timeline(&e).iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![TimelinePhase::Civil, TimelinePhase::Day, TimelinePhase::Civil]
        );
    }

    fn arbitrary_events() -> impl Strategy<Value = SunEvents> {
        let bound = || prop::option::of(0u32..86_400);
        (bound(), bound(), 0u32..86_400, 0u32..86_400, bound(), bound()).prop_map(
            |(first_light, dawn, sunrise, sunset, dusk, last_light)| SunEvents {
                first_light,
                dawn,
                sunrise,
                sunset,
                dusk,
                last_light,
            },
        )
    }

    proptest! {
        #[test]
        fn boundary_gaps_cover_the_whole_day(events in arbitrary_events()) {
            let boundaries = timeline_boundaries(&events);
            let total: u32 = boundaries.windows(2).map(|w| w[1].seconds - w[0].seconds).sum();
            prop_assert_eq!(total, 86_400);
        }

        #[test]
        fn widths_never_exceed_the_day(events in arbitrary_events()) {
            let segments = build_timeline(&events);
            let total: f64 = segments.iter().map(|s| s.width_percent).sum();
            prop_assert!(total <= 100.0 + 1e-9);
        }

        #[test]
        fn cumulative_durations_rebuild_the_day(events in arbitrary_events()) {
            let segments = build_timeline(&events);
            let mut cursor = segments.first().map(|s| s.start_seconds).unwrap_or(0);
            for segment in &segments {
                prop_assert_eq!(segment.start_seconds, cursor);
                cursor += segment.duration_seconds;
            }
            prop_assert_eq!(cursor, 86_400);
        }
    }
}
