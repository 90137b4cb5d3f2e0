//! Built-in feed registry used when no sources file is given.

use crate::models::Source;

/// Default news feeds.
pub fn default_sources() -> Vec<Source> {
    [
        ("BBC News", "https://feeds.bbci.co.uk/news/rss.xml"),
        ("NPR News", "https://feeds.npr.org/1001/rss.xml"),
        ("The Guardian", "https://www.theguardian.com/world/rss"),
        ("Al Jazeera", "https://www.aljazeera.com/xml/rss/all.xml"),
        ("CBS News", "https://www.cbsnews.com/latest/rss/main"),
        ("NYT World", "https://rss.nytimes.com/services/xml/rss/nyt/World.xml"),
        ("The Verge", "https://www.theverge.com/rss/index.xml"),
        ("Ars Technica", "https://feeds.arstechnica.com/arstechnica/index"),
    ]
    .into_iter()
    .map(|(name, url)| Source::new(name, url))
    .collect()
}
