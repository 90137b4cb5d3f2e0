//! Live article crawling.
//!
//! When a feed carries no full body, the article page itself is fetched and
//! its main text pulled out heuristically: the `<article>` region when the
//! page has one, otherwise every paragraph in document order.

use crate::http::{fetch_page, FetchError};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::future::Future;
use tracing::{debug, instrument, warn};

static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").expect("static selector"));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("static selector"));

/// Fetches the readable text of an article page.
///
/// Implementations never fail: any problem degrades to an empty string.
pub trait ArticleCrawler {
    /// Crawl `url` and return its trimmed main text, or `""`.
    fn crawl(&self, url: &str) -> impl Future<Output = String> + Send;
}

/// [`ArticleCrawler`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpCrawler {
    client: Client,
}

impl HttpCrawler {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ArticleCrawler for HttpCrawler {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn crawl(&self, url: &str) -> String {
        match fetch_page(&self.client, url).await {
            Ok(html) => {
                let text = extract_main_text(&html);
                debug!(chars = text.len(), "Crawled article");
                text
            }
            Err(FetchError::Status(status)) => {
                warn!(%url, %status, "Failed to fetch article");
                String::new()
            }
            Err(e) => {
                warn!(%url, error = %e, "Error crawling article");
                String::new()
            }
        }
    }
}

/// Pull the main text out of an article page.
///
/// Text from `<article>` elements wins when any exist; otherwise paragraphs
/// are joined with newlines. The result is trimmed but otherwise untouched.
pub fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut articles = document.select(&ARTICLE).peekable();
    let content = if articles.peek().is_some() {
        articles.flat_map(|article| article.text()).collect::<String>()
    } else {
        let mut content = String::new();
        for paragraph in document.select(&PARAGRAPH) {
            content.extend(paragraph.text());
            content.push('\n');
        }
        content
    };

    content.trim().to_string()
}
