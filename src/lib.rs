//! # Awful Feed News
//!
//! Ingests news articles from RSS and Atom feeds and returns them with their
//! full text, ready for summarization or storage downstream.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: every source's feed is fetched concurrently, one task per source
//! 2. **Map**: each item becomes a [`BaseArticle`](models::BaseArticle); items without a URL are skipped
//! 3. **Resolve**: full text comes from the embedded body, a live crawl, or the summary, in that order
//! 4. **Aggregate**: per-source results (at most 20 each) are concatenated in source order
//!
//! Failures never cross the pipeline boundary. A broken feed, a dead link or a
//! panicking task only shrinks the result and leaves a log event behind.
//!
//! ```no_run
//! use awful_feed_news::{build_client, default_sources, Ingester};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let ingester = Ingester::with_http(build_client(None)?);
//! let articles = ingester.ingest_all(&default_sources()).await;
//! println!("{} articles", articles.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod feeds;
pub mod http;
pub mod ingest;
pub mod models;
pub mod outputs;
pub mod sources;
pub mod utils;

pub use config::{load_sources, ConfigError};
pub use http::{build_client, USER_AGENT};
pub use ingest::{Ingester, MAX_ARTICLES_PER_SOURCE};
pub use models::{Article, BaseArticle, Edition, Source};
pub use sources::default_sources;
