//! Data models for feed sources and the articles ingested from them.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`Source`]: A named feed endpoint supplied by the registry
//! - [`BaseArticle`]: The metadata mapped from a single feed item
//! - [`Article`]: A base article tagged with its source and resolved full text
//! - [`Edition`]: The collection of articles produced by one run
//!
//! Articles serialize with camelCase keys (`publishedAt`, `fullText`) to match
//! the JSON shape downstream consumers expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named RSS or Atom feed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    /// Human-readable outlet name, copied onto every article from this feed.
    pub name: String,
    /// Absolute URL of the feed document.
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Article metadata extracted from one feed item, before content resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseArticle {
    pub title: String,
    /// Absolute http(s) URL of the article page.
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub categories: Vec<String>,
}

/// A fully ingested article.
///
/// `full_text` is always present; an empty string means every content stage
/// came up empty, which is a valid outcome.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Name of the [`Source`] the article was read from.
    pub source: String,
    pub title: String,
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub full_text: String,
}

impl Article {
    /// Combine a mapped feed item with its resolved text.
    pub fn from_base(source: &str, base: BaseArticle, full_text: String) -> Self {
        Self {
            source: source.to_string(),
            title: base.title,
            url: base.url,
            published_at: base.published_at,
            author: base.author,
            categories: base.categories,
            full_text,
        }
    }
}

/// All articles gathered by a single run.
///
/// # Edition Naming
///
/// The `time_of_day` field categorizes editions as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Deserialize, Serialize)]
pub struct Edition {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The time of day category: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The exact local time of the run.
    pub local_time: String,
    pub articles: Vec<Article>,
}
