//! Annual day-length range bar.

use serde::{Deserialize, Serialize};

use super::time::{format_length, parse_duration, SECONDS_PER_DAY};

/// Today's day length placed between the two solstice extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBar {
    pub min_percent: f64,
    pub max_percent: f64,
    pub current_percent: f64,
    /// Width of the fill anchored on the right edge (`100 - max_percent`).
    pub max_fill_percent: f64,
    pub min_label: String,
    pub max_label: String,
    pub today_label: String,
}

impl RangeBar {
    /// `"9h 47m (Annual Range: 8h 1m - 16h 5m)"`
    pub fn summary(&self) -> String {
        format!(
            "{} (Annual Range: {} - {})",
            self.today_label, self.min_label, self.max_label
        )
    }
}

fn percent_of_day(seconds: u32) -> f64 {
    f64::from(seconds) / f64::from(SECONDS_PER_DAY) * 100.0
}

/// Build the range bar from raw `"H:M:S"` day lengths.
///
/// When both solstices have the same length, both labels come from the
/// first operand.
pub fn compute_range_bar(today: &str, solstice_a: &str, solstice_b: &str) -> RangeBar {
    let today_sec = parse_duration(today);
    let a_sec = parse_duration(solstice_a);
    let b_sec = parse_duration(solstice_b);

    let min_sec = a_sec.min(b_sec);
    let max_sec = a_sec.max(b_sec);

    let min_raw = if min_sec == a_sec { solstice_a } else { solstice_b };
    let max_raw = if max_sec == a_sec { solstice_a } else { solstice_b };

    let max_percent = percent_of_day(max_sec);
    RangeBar {
        min_percent: percent_of_day(min_sec),
        max_percent,
        current_percent: percent_of_day(today_sec),
        max_fill_percent: 100.0 - max_percent,
        min_label: format_length(min_raw),
        max_label: format_length(max_raw),
        today_label: format_length(today),
    }
}
