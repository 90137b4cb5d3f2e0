//! Feed retrieval and item mapping.
//!
//! | Step | Module | Notes |
//! |------|--------|-------|
//! | Fetch | [`fetcher`] | One GET per source; failures become an empty item list |
//! | Parse | [`document`] | RSS `<item>` and Atom `<entry>`, namespaced fields kept verbatim |
//! | Map | [`mapper`] | Title, URL, dates, author, categories; items without a URL are skipped |

pub mod document;
pub mod fetcher;
pub mod mapper;

pub use document::{FeedDocument, FeedError, FeedItem, ItemField, ItemKind};
pub use fetcher::fetch_feed;
pub use mapper::map_item;
