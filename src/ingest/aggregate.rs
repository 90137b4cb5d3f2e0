//! Concurrent fan-out over all sources.
//!
//! Each source runs in its own Tokio task with its own clone of the
//! [`Ingester`]; nothing mutable is shared. Results are joined in submission
//! order, so the output lists sources in the order given and each source's
//! articles in feed order. A task that panics is logged and contributes no
//! articles; its siblings are unaffected.

use crate::content::crawler::ArticleCrawler;
use crate::ingest::source::Ingester;
use crate::models::{Article, Source};
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use std::future::Future;
use tokio::task::JoinError;
use tracing::{error, info, instrument};

type SourceOutcome = (String, Result<Vec<Article>, JoinError>);

impl<C> Ingester<C>
where
    C: ArticleCrawler + Clone + Send + Sync + 'static,
{
    /// Ingest every source at once and concatenate the results.
    ///
    /// One task per source with no upper bound; see
    /// [`ingest_all_bounded`](Self::ingest_all_bounded) for a capped variant.
    #[instrument(level = "info", skip_all, fields(sources = sources.len()))]
    pub async fn ingest_all(&self, sources: &[Source]) -> Vec<Article> {
        let tasks: Vec<_> = sources
            .iter()
            .cloned()
            .map(|source| self.spawn_ingest(source))
            .collect();
        merge(join_all(tasks).await)
    }

    /// Like [`ingest_all`](Self::ingest_all), but with at most `limit` sources
    /// in flight. A `limit` of zero is treated as one.
    #[instrument(level = "info", skip_all, fields(sources = sources.len(), limit = limit))]
    pub async fn ingest_all_bounded(&self, sources: &[Source], limit: usize) -> Vec<Article> {
        let outcomes = stream::iter(sources.iter().cloned())
            .map(|source| self.spawn_ingest(source))
            .buffered(limit.max(1))
            .collect::<Vec<_>>()
            .await;
        merge(outcomes)
    }

    fn spawn_ingest(&self, source: Source) -> impl Future<Output = SourceOutcome> {
        let ingester = self.clone();
        let name = source.name.clone();
        let handle = tokio::spawn(async move { ingester.ingest(&source).await });
        async move { (name, handle.await) }
    }
}

fn merge(outcomes: Vec<SourceOutcome>) -> Vec<Article> {
    let mut articles = Vec::new();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(batch) => articles.extend(batch),
            Err(e) => error!(%source, error = %e, "Source fetch failed"),
        }
    }
    info!(count = articles.len(), "Aggregated articles from all sources");
    articles
}
