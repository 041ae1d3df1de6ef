//! Wall-clock and duration string handling.
//!
//! The sun-event API reports times of day as 12-hour strings (`"6:02:11 AM"`)
//! and day lengths as `"H:M:S"`. Everything downstream works in seconds
//! since local midnight.

use crate::error::TimeParseError;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Parse `"H:MM[:SS] AM|PM"` into seconds since local midnight.
///
/// `12 AM` is hour 0, `12 PM` stays 12, any other PM hour gets +12.
/// The result is always in `0..86_400`.
pub fn parse_time_to_seconds(input: &str) -> Result<u32, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Missing);
    }

    let malformed = || TimeParseError::Malformed(trimmed.to_string());

    let mut parts = trimmed.split_whitespace();
    let clock = parts.next().ok_or_else(malformed)?;
    let meridiem = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    let is_pm = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => false,
        "PM" => true,
        _ => return Err(malformed()),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(malformed());
    }

    let number = |s: &str| -> Result<u32, TimeParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        s.parse::<u32>().map_err(|_| malformed())
    };

    let mut hours = number(fields[0])?;
    let minutes = number(fields[1])?;
    let seconds = match fields.get(2) {
        Some(s) => number(s)?,
        None => 0,
    };

    if !(1..=12).contains(&hours) {
        return Err(TimeParseError::OutOfRange {
            field: "hour",
            input: trimmed.to_string(),
        });
    }
    if minutes > 59 {
        return Err(TimeParseError::OutOfRange {
            field: "minute",
            input: trimmed.to_string(),
        });
    }
    if seconds > 59 {
        return Err(TimeParseError::OutOfRange {
            field: "second",
            input: trimmed.to_string(),
        });
    }

    if hours == 12 && !is_pm {
        hours = 0;
    } else if hours != 12 && is_pm {
        hours += 12;
    }

    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Lenient variant: any unreadable input becomes midnight.
///
/// Kept for renderers that prefer a placeholder over an error. Note that a
/// zero here is indistinguishable from a real midnight event.
pub fn parse_time_to_seconds_or_zero(input: &str) -> u32 {
    parse_time_to_seconds(input).unwrap_or(0)
}

/// Leading-digit integer parse: `"09"` → 9, `"12abc"` → 12, `"abc"` → 0.
fn leading_int(s: &str) -> u32 {
    let s = s.trim_start();
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse an `"H:M[:S]"` duration into seconds.
///
/// Fewer than two components yields 0; non-numeric components count as 0.
pub fn parse_duration(input: &str) -> u32 {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() < 2 {
        return 0;
    }
    let h = leading_int(parts[0]);
    let m = leading_int(parts[1]);
    let s = parts.get(2).map(|p| leading_int(p)).unwrap_or(0);
    h.saturating_mul(3600)
        .saturating_add(m.saturating_mul(60))
        .saturating_add(s)
}

/// `"09:47:12"` → `"9h 47m"`.
///
/// An empty value renders as `"--h --m"`; a value without a colon is
/// returned unchanged.
pub fn format_length(raw: &str) -> String {
    if raw.is_empty() {
        return "--h --m".to_string();
    }
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() >= 2 {
        format!("{}h {}m", leading_int(parts[0]), leading_int(parts[1]))
    } else {
        raw.to_string()
    }
}

/// Seconds → `"9h 47m"`.
pub fn format_length_secs(seconds: u32) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Seconds since midnight → `"HH:MM"`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}
