//! Fetch a source's feed and return its items.

use crate::feeds::document::{FeedDocument, FeedItem};
use crate::http::{fetch_page, FetchError};
use crate::models::Source;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Fetch and parse the feed for `source`.
///
/// Transport failures, non-200 responses and malformed XML all come back as
/// an empty list. The cause is only visible in the logs.
#[instrument(level = "info", skip_all, fields(source = %source.name, url = %source.url))]
pub async fn fetch_feed(client: &Client, source: &Source) -> Vec<FeedItem> {
    let body = match fetch_page(client, &source.url).await {
        Ok(body) => body,
        Err(FetchError::Status(status)) => {
            warn!(source = %source.name, url = %source.url, %status, "Bad response from RSS feed");
            return Vec::new();
        }
        Err(e) => {
            warn!(source = %source.name, error = %e, "Failed to fetch RSS feed");
            return Vec::new();
        }
    };

    match FeedDocument::parse(&body) {
        Ok(document) => {
            let items = document.into_items();
            debug!(count = items.len(), "Parsed feed items");
            items
        }
        Err(e) => {
            warn!(source = %source.name, error = %e, "Unparseable RSS feed");
            Vec::new()
        }
    }
}
