//! Countdown to the next (approximate) solstice.
//!
//! Solstices are pinned to June 21 and December 21 at 00:00 UTC rather than
//! the astronomical instants.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Solstice {
    June,
    December,
}

impl Solstice {
    pub fn month(&self) -> u32 {
        match self {
            Solstice::June => 6,
            Solstice::December => 12,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Solstice::June => "June Solstice",
            Solstice::December => "December Solstice",
        }
    }

    /// 00:00 UTC on the 21st of this solstice's month in `year`, or `None`
    /// outside chrono's representable years.
    pub fn date_in(&self, year: i32) -> Option<DateTime<Utc>> {
        Some(self.api_date(year)?.and_hms_opt(0, 0, 0)?.and_utc())
    }

    /// `YYYY-MM-21`, the form the sun-event API expects.
    pub fn api_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), 21)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolsticeCountdown {
    pub event: Solstice,
    pub target: DateTime<Utc>,
    pub days_remaining: i64,
}

impl SolsticeCountdown {
    /// `"62 days until the June Solstice"`
    pub fn message(&self) -> String {
        format!(
            "{} days until the {}",
            self.days_remaining,
            self.event.display_name()
        )
    }
}

/// Next solstice after `now`, with the remaining whole days rounded up.
///
/// `None` only when that solstice falls past the last date chrono can
/// represent.
pub fn next_solstice_countdown(now: DateTime<Utc>) -> Option<SolsticeCountdown> {
    let year = now.year();
    let june = Solstice::June.date_in(year)?;
    let december = Solstice::December.date_in(year)?;

    let (event, target) = if now < june {
        (Solstice::June, june)
    } else if now < december {
        (Solstice::December, december)
    } else {
        (Solstice::June, Solstice::June.date_in(year.checked_add(1)?)?)
    };

    let diff_ms = (target - now).num_milliseconds();
    // target > now, so diff_ms is positive and this is a ceiling division.
    let days_remaining = (diff_ms + MS_PER_DAY - 1) / MS_PER_DAY;

    Some(SolsticeCountdown {
        event,
        target,
        days_remaining,
    })
}
