//! Full-text resolution for one feed item.
//!
//! Stages run in a fixed order and stop at the first non-empty text:
//!
//! 1. [`Stage::RichContent`]: the item's embedded body (`content:encoded`)
//! 2. [`Stage::Crawled`]: a live crawl of the article page
//! 3. [`Stage::Summary`]: the item's description, even if empty
//!
//! There are no retries; the summary stage is terminal.

use crate::content::crawler::ArticleCrawler;
use crate::content::text::normalize;
use crate::feeds::document::FeedItem;
use crate::models::BaseArticle;
use std::fmt;

/// Which stage produced an article's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RichContent,
    Crawled,
    Summary,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::RichContent => "rich_content",
            Stage::Crawled => "crawled",
            Stage::Summary => "summary",
        })
    }
}

/// Resolved text, tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    RichContent(String),
    Crawled(String),
    /// May be empty.
    Summary(String),
}

impl Resolution {
    pub fn stage(&self) -> Stage {
        match self {
            Resolution::RichContent(_) => Stage::RichContent,
            Resolution::Crawled(_) => Stage::Crawled,
            Resolution::Summary(_) => Stage::Summary,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Resolution::RichContent(text) | Resolution::Crawled(text) | Resolution::Summary(text) => {
                text
            }
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::RichContent(text) | Resolution::Crawled(text) | Resolution::Summary(text) => {
                text
            }
        }
    }
}

/// Stage 1: normalized embedded content, when non-empty.
pub fn from_rich_content(item: &FeedItem) -> Option<Resolution> {
    let text = normalize(item.rich_content()?);
    (!text.is_empty()).then_some(Resolution::RichContent(text))
}

/// Stage 2: crawled page text, when non-empty.
pub async fn from_crawl<C: ArticleCrawler>(crawler: &C, url: &str) -> Option<Resolution> {
    let text = crawler.crawl(url).await;
    (!text.is_empty()).then_some(Resolution::Crawled(text))
}

/// Stage 3: normalized description. Always succeeds.
pub fn from_summary(item: &FeedItem) -> Resolution {
    Resolution::Summary(item.summary().map(normalize).unwrap_or_default())
}

/// Run the stages in order for one mapped item.
pub async fn resolve<C: ArticleCrawler>(crawler: &C, base: &BaseArticle, item: &FeedItem) -> Resolution {
    if let Some(resolved) = from_rich_content(item) {
        return resolved;
    }
    if let Some(resolved) = from_crawl(crawler, &base.url).await {
        return resolved;
    }
    from_summary(item)
}
