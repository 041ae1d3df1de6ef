//! Display cards built from feed items.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::sanitize::sanitize_html;
use crate::api::FeedItem;

/// Date label used when `pubDate` cannot be read.
pub const INVALID_DATE: &str = "Invalid Date";

/// One rendered feed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedCard {
    pub date_label: String,
    pub author: Option<String>,
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub thumbnail: Option<String>,
}

impl FeedCard {
    /// Build a card; the snippet is the first `snippet_length` characters of
    /// the description's text followed by `"..."`.
    pub fn from_item(item: &FeedItem, snippet_length: usize) -> Self {
        let mut snippet: String = sanitize_html(&item.description)
            .chars()
            .take(snippet_length)
            .collect();
        snippet.push_str("...");

        Self {
            date_label: format_pub_date(&item.pub_date),
            author: item.author.clone(),
            title: item.title.clone(),
            snippet,
            link: item.link.clone(),
            thumbnail: item.thumbnail.clone(),
        }
    }

    /// `"Jan 2, 2024 • Jane Doe"`, or just the date without an author.
    pub fn meta_line(&self) -> String {
        match &self.author {
            Some(author) => format!("{} • {}", self.date_label, author),
            None => self.date_label.clone(),
        }
    }
}

/// Format a feed timestamp as `"Jan 2, 2024"`.
///
/// Accepts rss2json's `"YYYY-MM-DD HH:MM:SS"`, RFC 2822 and RFC 3339, and a
/// bare `"YYYY-MM-DD"`. Anything else yields [`INVALID_DATE`].
pub fn format_pub_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|dt| dt.date_naive()))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
