//! Source ingestion: one source end-to-end ([`source`]) and all sources
//! concurrently ([`aggregate`]).

pub mod aggregate;
pub mod source;

pub use source::{Ingester, MAX_ARTICLES_PER_SOURCE};
