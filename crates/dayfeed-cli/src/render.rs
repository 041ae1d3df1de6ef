//! Output rendering for the day tracker and the feed reader.

use std::error::Error;
use std::fmt::Write as _;

use dayfeed_core::feed::FeedPage;
use dayfeed_core::solar::RangeBar;
use dayfeed_core::{ClockFrame, DayReport, SunVisual};

type RenderResult = Result<String, Box<dyn Error>>;

/// Turns core data into printable text.
pub trait Render {
    fn day_report(&self, report: &DayReport) -> RenderResult;
    fn clock_frame(&self, frame: &ClockFrame) -> RenderResult;
    fn feed_page(&self, page: &FeedPage) -> RenderResult;
}

pub fn renderer(json: bool) -> Box<dyn Render> {
    if json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer)
    }
}

/// Pretty-printed JSON, one document per call.
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn day_report(&self, report: &DayReport) -> RenderResult {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn clock_frame(&self, frame: &ClockFrame) -> RenderResult {
        Ok(serde_json::to_string(frame)?)
    }

    fn feed_page(&self, page: &FeedPage) -> RenderResult {
        Ok(serde_json::to_string_pretty(page)?)
    }
}

/// Human-readable terminal output.
pub struct TextRenderer;

const BAR_WIDTH: usize = 40;

fn sun_line(visual: Option<&SunVisual>) -> String {
    match visual {
        Some(v) => format!(
            "{} ({}), arc {:.0}%, marker ({:.1}, {:.1})",
            v.sky_class.label(),
            v.sky_class.css_class(),
            v.angle_fraction * 100.0,
            v.marker_x,
            v.marker_y
        ),
        None => "sun data unavailable".to_string(),
    }
}

/// `[###.......|.......###]`: shortest day on the left, longest on the right.
fn range_bar(range: &RangeBar) -> String {
    let cells = |percent: f64| ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let min_fill = cells(range.min_percent).min(BAR_WIDTH);
    let max_fill = cells(range.max_fill_percent).min(BAR_WIDTH - min_fill);
    let marker = cells(range.current_percent).min(BAR_WIDTH - 1);

    let bar: String = (0..BAR_WIDTH)
        .map(|i| {
            if i == marker {
                '|'
            } else if i < min_fill || i >= BAR_WIDTH - max_fill {
                '#'
            } else {
                '.'
            }
        })
        .collect();
    format!("[{bar}]")
}

impl Render for TextRenderer {
    fn day_report(&self, report: &DayReport) -> RenderResult {
        let mut out = String::new();
        writeln!(out, "{}", report.location_name)?;
        writeln!(out, "  Local time  {}", report.local_time)?;
        writeln!(out, "  Sunrise     {}", report.sunrise)?;
        writeln!(out, "  Sunset      {}", report.sunset)?;
        writeln!(out, "  Day length  {}", report.range.summary())?;
        writeln!(out, "              {}", range_bar(&report.range))?;
        writeln!(out, "  Sky         {}", sun_line(report.visual.as_ref()))?;
        writeln!(out, "  {}", report.countdown.message())?;

        if let Some(timeline) = &report.timeline {
            writeln!(out, "  Timeline")?;
            for segment in timeline {
                writeln!(
                    out,
                    "    {:<16} {:>5.1}%",
                    segment.title(),
                    segment.width_percent
                )?;
            }
        }
        Ok(out.trim_end().to_string())
    }

    fn clock_frame(&self, frame: &ClockFrame) -> RenderResult {
        Ok(format!(
            "{}  {}  {}",
            frame.local_time,
            frame.location_name,
            sun_line(frame.visual.as_ref())
        ))
    }

    fn feed_page(&self, page: &FeedPage) -> RenderResult {
        let mut out = String::new();
        for card in &page.cards {
            writeln!(out, "{}", card.meta_line())?;
            writeln!(out, "{}", card.title)?;
            writeln!(out, "{}", card.snippet)?;
            if let Some(thumbnail) = &card.thumbnail {
                writeln!(out, "image: {thumbnail}")?;
            }
            writeln!(out, "{}", card.link)?;
            writeln!(out)?;
        }

        let prev = if page.prev_disabled { "-" } else { "<" };
        let next = if page.next_disabled { "-" } else { ">" };
        write!(out, "{prev} {} {next}", page.page_info)?;
        Ok(out)
    }
}
