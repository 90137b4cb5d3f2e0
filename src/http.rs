//! Shared HTTP plumbing for feed fetches and article crawls.
//!
//! Every outbound request carries a desktop-browser `User-Agent`; many
//! publishers reject traffic that identifies as a bot. Anything other than
//! `200 OK` is treated as a failed fetch.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Browser identification sent with every request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/113.0";

/// Why a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
}

/// Build the client used by the whole pipeline.
///
/// No timeout is applied unless one is given: a hanging request holds up only
/// its own source, but the aggregate waits for it.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// GET `url` and return its body when the server answers `200 OK`.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }
    let body = response.text().await?;
    debug!(%url, bytes = body.len(), "Fetched page");
    Ok(body)
}
