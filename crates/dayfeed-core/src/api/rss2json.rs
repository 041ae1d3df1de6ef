//! rss2json conversion client.

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

use super::endpoint;
use crate::error::FetchError;

const SERVICE: &str = "rss2json";

/// One feed entry as converted by rss2json.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub author: Option<String>,
    /// HTML fragment.
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub thumbnail: Option<String>,
}

/// rss2json sends `""` for absent optional fields.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    items: Vec<FeedItem>,
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Convert the feed at `feed_url` and return its items in feed order.
    ///
    /// The body is decoded whatever the HTTP status, since rss2json reports
    /// bad feeds as JSON with an error status.
    ///
    /// # Errors
    /// `NotFound` for a status other than `"ok"`, `Transport` when the
    /// service cannot be reached or answers with something other than JSON.
    pub async fn fetch(&self, feed_url: &str) -> Result<Vec<FeedItem>, FetchError> {
        let url = endpoint(
            SERVICE,
            &self.base_url,
            "v1/api.json",
            &[("rss_url", feed_url.to_string())],
        )?;
        tracing::debug!("Fetching feed via: {}", url);

        let failure = "An error occurred while fetching the feed.";
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::debug!("rss2json request error: {}", e);
            FetchError::transport(SERVICE, failure)
        })?;
        let http_status = response.status();

        let body: FeedResponse = response.json().await.map_err(|e| {
            tracing::debug!("rss2json body (HTTP {}) could not be decoded: {}", http_status, e);
            FetchError::transport(SERVICE, failure)
        })?;

        if body.status != "ok" {
            tracing::debug!(
                "rss2json rejected feed: {}",
                body.message.as_deref().unwrap_or("no message")
            );
            return Err(FetchError::NotFound(
                "Failed to load feed. Check the URL and try again.".into(),
            ));
        }

        tracing::debug!("Parsed {} items from feed", body.items.len());
        Ok(body.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn empty_optional_fields_become_none() {
        let item: FeedItem = serde_json::from_str(
            r#"{"title":"T","link":"https://x","pubDate":"2024-01-02 10:00:00",
                "author":"","thumbnail":"","description":"<p>hi</p>"}"#,
        )
        .unwrap();
        assert_eq!(item.author, None);
        assert_eq!(item.thumbnail, None);
        assert_eq!(item.pub_date, "2024-01-02 10:00:00");
    }

    #[tokio::test]
    async fn fetch_returns_items() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/api.json")
            .match_query(Matcher::UrlEncoded(
                "rss_url".into(),
                "https://blog.rust-lang.org/feed.xml".into(),
            ))
            .with_status(200)
            .with_body(
                r#"{"status":"ok","feed":{"title":"Rust Blog"},"items":[
                    {"title":"Announcing Rust","link":"https://blog.rust-lang.org/a","pubDate":"2024-01-02 10:00:00",
                     "author":"The Rust Team","description":"<p>New release</p>","thumbnail":""}
                ]}"#,
            )
            .create_async()
            .await;

        let client = FeedClient::new(Client::new(), server.url());
        let items = client
            .fetch("https://blog.rust-lang.org/feed.xml")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].author.as_deref(), Some("The Rust Team"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_not_found_even_on_http_422() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/api.json")
            .match_query(Matcher::Any)
            .with_status(422)
            .with_body(r#"{"status":"error","message":"Cannot download this RSS feed"}"#)
            .create_async()
            .await;

        let client = FeedClient::new(Client::new(), server.url());
        let err = client.fetch("https://example.com/nope").await.unwrap_err();
        assert_eq!(
            err,
            FetchError::NotFound("Failed to load feed. Check the URL and try again.".into())
        );
    }

    #[tokio::test]
    async fn non_json_reply_is_transport() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/api.json")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let client = FeedClient::new(Client::new(), server.url());
        let err = client.fetch("https://example.com/feed").await.unwrap_err();
        assert!(err.is_transport());
    }
}
