//! RSS feed reader.
//!
//! Items come from the rss2json conversion service; this module turns them
//! into display cards, strips their HTML and pages through them.

mod card;
mod pager;
mod reader;
mod sanitize;

pub use card::{format_pub_date, FeedCard, INVALID_DATE};
pub use pager::{Pager, DEFAULT_PAGE_SIZE};
pub use reader::{FeedError, FeedPage, FeedReader};
pub use sanitize::sanitize_html;
