//! Feed reader state: the loaded items, the current page and the last error.

use serde::Serialize;
use thiserror::Error;

use super::card::FeedCard;
use super::pager::Pager;
use crate::api::{http_client, FeedClient, FeedItem};
use crate::error::FetchError;
use crate::storage::Config;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("no feed URL given")]
    EmptyUrl,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl FeedError {
    /// The single line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::EmptyUrl => "Please enter a URL.".to_string(),
            FeedError::Fetch(e) if e.is_transport() => {
                "An error occurred while fetching the feed.".to_string()
            }
            FeedError::Fetch(_) => "Failed to load feed. Check the URL and try again.".to_string(),
        }
    }
}

/// Everything a renderer needs for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedPage {
    pub cards: Vec<FeedCard>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_info: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

pub struct FeedReader {
    client: FeedClient,
    pager: Pager<FeedItem>,
    page_size: usize,
    snippet_length: usize,
    last_error: Option<FeedError>,
}

impl FeedReader {
    pub fn new(client: FeedClient, page_size: usize, snippet_length: usize) -> Self {
        Self {
            client,
            pager: Pager::new(Vec::new(), page_size),
            page_size,
            snippet_length,
            last_error: None,
        }
    }

    /// Reader wired to the configured rss2json endpoint.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let http = http_client(&config.api)?;
        let client = FeedClient::new(http, config.api.rss2json_url.clone());
        Ok(Self::new(
            client,
            config.feed.page_size,
            config.feed.snippet_length,
        ))
    }

    /// Fetch `url` and show its first page.
    ///
    /// On any failure the previous items and pagination are cleared and the
    /// error is kept for [`last_error`](Self::last_error).
    pub async fn load(&mut self, url: &str) -> Result<(), FeedError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(self.fail(FeedError::EmptyUrl));
        }

        match self.client.fetch(url).await {
            Ok(items) => {
                tracing::info!("Loaded {} feed items from {}", items.len(), url);
                self.pager = Pager::new(items, self.page_size);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Feed load failed for {}: {}", url, e);
                Err(self.fail(e.into()))
            }
        }
    }

    fn fail(&mut self, err: FeedError) -> FeedError {
        self.pager = Pager::new(Vec::new(), self.page_size);
        self.last_error = Some(err.clone());
        err
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev()
    }

    pub fn go_to(&mut self, page: usize) {
        self.pager.go_to(page);
    }

    pub fn pager(&self) -> &Pager<FeedItem> {
        &self.pager
    }

    pub fn last_error(&self) -> Option<&FeedError> {
        self.last_error.as_ref()
    }

    /// Cards and controls for the current page.
    pub fn page(&self) -> FeedPage {
        FeedPage {
            cards: self
                .pager
                .page_items()
                .iter()
                .map(|item| FeedCard::from_item(item, self.snippet_length))
                .collect(),
            current_page: self.pager.current_page(),
            total_pages: self.pager.total_pages(),
            page_info: self.pager.page_info(),
            prev_disabled: self.pager.prev_disabled(),
            next_disabled: self.pager.next_disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use reqwest::Client;

    fn items_body(count: usize) -> String {
        let items: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{"title":"Post {i}","link":"https://example.com/{i}","pubDate":"2024-01-0{d} 09:00:00","author":"","description":"<p>Body {i}</p>","thumbnail":""}}"#,
                    d = (i % 9) + 1
                )
            })
            .collect();
        format!(r#"{{"status":"ok","items":[{}]}}"#, items.join(","))
    }

    async fn reader_for(server: &mockito::ServerGuard) -> FeedReader {
        FeedReader::new(FeedClient::new(Client::new(), server.url()), 6, 200)
    }

    #[tokio::test]
    async fn empty_url_is_rejected_without_a_request() {
        let server = mockito::Server::new_async().await;
        let mut reader = reader_for(&server).await;
        let err = reader.load("   ").await.unwrap_err();
        assert_eq!(err, FeedError::EmptyUrl);
        assert_eq!(err.user_message(), "Please enter a URL.");
    }

    #[tokio::test]
    async fn loads_and_pages_thirteen_items() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/api.json")
            .match_query(Matcher::UrlEncoded(
                "rss_url".into(),
                "https://example.com/feed.xml".into(),
            ))
            .with_status(200)
            .with_body(items_body(13))
            .create_async()
            .await;

        let mut reader = reader_for(&server).await;
        reader.load("  https://example.com/feed.xml ").await.unwrap();

        let first = reader.page();
        assert_eq!(first.cards.len(), 6);
        assert_eq!(first.page_info, "Page 1 of 3");
        assert!(first.prev_disabled);
        assert_eq!(first.cards[0].snippet, "Body 1...");
        assert_eq!(first.cards[0].author, None);

        reader.go_to(3);
        let last = reader.page();
        assert_eq!(last.cards.len(), 1);
        assert_eq!(last.cards[0].title, "Post 13");
        assert!(last.next_disabled);
    }

    #[tokio::test]
    async fn failure_clears_previous_items() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/api.json")
            .match_query(Matcher::UrlEncoded("rss_url".into(), "https://good".into()))
            .with_status(200)
            .with_body(items_body(3))
            .create_async()
            .await;
        server
            .mock("GET", "/v1/api.json")
            .match_query(Matcher::UrlEncoded("rss_url".into(), "https://bad".into()))
            .with_status(200)
            .with_body(r#"{"status":"error","message":"Cannot download this RSS feed"}"#)
            .create_async()
            .await;

        let mut reader = reader_for(&server).await;
        reader.load("https://good").await.unwrap();
        assert_eq!(reader.pager().len(), 3);

        let err = reader.load("https://bad").await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Failed to load feed. Check the URL and try again."
        );
        assert!(reader.pager().is_empty());
        assert_eq!(reader.last_error(), Some(&err));
    }

    #[test]
    fn transport_failures_get_the_generic_message() {
        let err = FeedError::from(FetchError::transport("rss2json", "connection refused"));
        assert_eq!(
            err.user_message(),
            "An error occurred while fetching the feed."
        );
    }
}
