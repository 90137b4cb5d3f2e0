//! Article text: normalization, live crawling, and the fallback chain that
//! decides which of them supplies an article's full text.

pub mod crawler;
pub mod resolver;
pub mod text;

pub use crawler::{ArticleCrawler, HttpCrawler};
pub use resolver::{resolve, Resolution, Stage};
pub use text::normalize;
