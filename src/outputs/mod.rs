//! Output generation for ingested articles.
//!
//! - [`json`]: Writes an [`Edition`](crate::models::Edition) to a dated JSON
//!   file, or renders it for stdout

pub mod json;
