//! End-to-end ingestion of a single source.

use crate::content::crawler::{ArticleCrawler, HttpCrawler};
use crate::content::resolver::resolve;
use crate::feeds::fetcher::fetch_feed;
use crate::feeds::mapper::map_item;
use crate::models::{Article, Source};
use crate::utils::truncate_for_log;
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Upper bound on articles taken from any one feed.
pub const MAX_ARTICLES_PER_SOURCE: usize = 20;

/// Runs the fetch, map and resolve pipeline for feed sources.
///
/// Cloning is cheap: the `reqwest` client is reference counted, and each
/// concurrent source task works on its own clone.
#[derive(Debug, Clone)]
pub struct Ingester<C> {
    client: Client,
    crawler: C,
}

impl Ingester<HttpCrawler> {
    /// Ingester that crawls article pages with the same client it fetches feeds with.
    pub fn with_http(client: Client) -> Self {
        let crawler = HttpCrawler::new(client.clone());
        Self::new(client, crawler)
    }
}

impl<C: ArticleCrawler> Ingester<C> {
    pub fn new(client: Client, crawler: C) -> Self {
        Self { client, crawler }
    }

    /// Ingest one source.
    ///
    /// Items are handled one at a time in feed order. Items without a usable
    /// URL are skipped, and at most [`MAX_ARTICLES_PER_SOURCE`] articles are
    /// returned. Failures only ever shorten the result.
    #[instrument(level = "info", skip_all, fields(source = %source.name))]
    pub async fn ingest(&self, source: &Source) -> Vec<Article> {
        let items = fetch_feed(&self.client, source).await;
        let mut articles = Vec::new();

        for item in &items {
            let Some(base) = map_item(item) else {
                debug!("Skipping item without a usable URL");
                continue;
            };

            let resolution = resolve(&self.crawler, &base, item).await;
            debug!(
                url = %base.url,
                stage = %resolution.stage(),
                chars = resolution.text().len(),
                preview = %truncate_for_log(resolution.text(), 120),
                "Resolved article text"
            );
            articles.push(Article::from_base(&source.name, base, resolution.into_text()));

            if articles.len() >= MAX_ARTICLES_PER_SOURCE {
                break;
            }
        }

        if articles.is_empty() {
            info!(url = %source.url, "No valid articles found");
        } else {
            info!(count = articles.len(), "Ingested source");
        }
        articles
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::resolver::tests::CountingCrawler;
    use crate::http::build_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// RSS document with `count` items. Items carry embedded content when
    /// `rich` is set, otherwise only a description.
    pub(crate) fn rss_with_items(count: usize, rich: bool) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0"?><rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/"><channel><title>Mock</title>"#,
        );
        for i in 0..count {
            xml.push_str(&format!(
                "<item><title>Story {i}</title><link>https://news.example.com/{i}</link><description>Summary {i}</description>"
            ));
            if rich {
                xml.push_str(&format!(
                    "<content:encoded><![CDATA[<p>Body {i}</p>]]></content:encoded>"
                ));
            }
            xml.push_str("</item>");
        }
        xml.push_str("</channel></rss>");
        xml
    }

    pub(crate) async fn mount_feed(server: &MockServer, route: &str, status: u16, body: String) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_ingest_tags_source_and_keeps_order() {
        let server = MockServer::start().await;
        mount_feed(&server, "/rss", 200, rss_with_items(3, true)).await;
        let source = Source::new("Mock Wire", format!("{}/rss", server.uri()));

        let crawler = CountingCrawler::returning("crawled");
        let ingester = Ingester::new(build_client(None).unwrap(), crawler.clone());
        let articles = ingester.ingest(&source).await;

        assert_eq!(articles.len(), 3);
        for (i, article) in articles.iter().enumerate() {
            assert_eq!(article.source, "Mock Wire");
            assert_eq!(article.title, format!("Story {i}"));
            assert_eq!(article.url, format!("https://news.example.com/{i}"));
            assert_eq!(article.full_text, format!("Body {i}"));
        }
        assert_eq!(crawler.calls(), 0);
    }

    #[tokio::test]
    async fn test_ingest_caps_articles_per_source() {
        let server = MockServer::start().await;
        mount_feed(&server, "/rss", 200, rss_with_items(25, false)).await;
        let source = Source::new("Busy", format!("{}/rss", server.uri()));

        let crawler = CountingCrawler::returning("crawled");
        let ingester = Ingester::new(build_client(None).unwrap(), crawler.clone());
        let articles = ingester.ingest(&source).await;

        assert_eq!(articles.len(), MAX_ARTICLES_PER_SOURCE);
        assert_eq!(articles.last().unwrap().title, "Story 19");
        assert!(articles.iter().all(|a| a.full_text == "crawled"));
        assert_eq!(crawler.calls(), MAX_ARTICLES_PER_SOURCE);
    }

    #[tokio::test]
    async fn test_ingest_skips_items_without_url() {
        let server = MockServer::start().await;
        let body = r#"<rss><channel>
            <item><title>No link</title><description>dropped</description></item>
            <item><title>Kept</title><link>https://news.example.com/kept</link><description>Kept summary</description></item>
            <item><title>Relative</title><link>/relative</link></item>
        </channel></rss>"#;
        mount_feed(&server, "/rss", 200, body.to_string()).await;
        let source = Source::new("Sparse", format!("{}/rss", server.uri()));

        let ingester = Ingester::new(build_client(None).unwrap(), CountingCrawler::returning(""));
        let articles = ingester.ingest(&source).await;

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Kept");
        assert_eq!(articles[0].full_text, "Kept summary");
    }

    #[tokio::test]
    async fn test_ingest_failed_feed_is_empty() {
        let server = MockServer::start().await;
        mount_feed(&server, "/rss", 500, String::new()).await;
        let source = Source::new("Broken", format!("{}/rss", server.uri()));

        let ingester = Ingester::new(build_client(None).unwrap(), CountingCrawler::returning("x"));
        assert!(ingester.ingest(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_with_http_crawls_article_pages() {
        let server = MockServer::start().await;
        let feed = format!(
            r#"<rss><channel><item><title>Live</title><link>{}/story</link><description>fallback</description></item></channel></rss>"#,
            server.uri()
        );
        mount_feed(&server, "/rss", 200, feed).await;
        mount_feed(
            &server,
            "/story",
            200,
            "<html><body><p>Paragraph one.</p><p>Paragraph two.</p></body></html>".to_string(),
        )
        .await;
        let source = Source::new("Live", format!("{}/rss", server.uri()));

        let ingester = Ingester::with_http(build_client(None).unwrap());
        let articles = ingester.ingest(&source).await;

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].full_text, "Paragraph one.\nParagraph two.");
    }
}
