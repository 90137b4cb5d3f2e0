//! Map feed items to [`BaseArticle`]s.

use crate::content::text::normalize;
use crate::feeds::document::{FeedItem, ItemKind};
use crate::models::BaseArticle;
use chrono::{DateTime, Utc};
use url::Url;

/// Map one feed item to its article metadata.
///
/// Returns `None` when the item has no usable absolute http(s) URL; such items
/// are skipped by the caller and never abort the rest of the feed.
pub fn map_item(item: &FeedItem) -> Option<BaseArticle> {
    let url = resolve_url(item)?;

    Some(BaseArticle {
        title: item.text("title").map(normalize).unwrap_or_default(),
        url,
        published_at: published_at(item),
        author: author(item),
        categories: categories(item),
    })
}

fn resolve_url(item: &FeedItem) -> Option<String> {
    let from_link = item.fields_named("link").find_map(|link| match item.kind() {
        ItemKind::Rss => Some(link.text.trim()),
        ItemKind::Atom => match link.attr("rel") {
            None | Some("alternate") => link.attr("href").map(str::trim),
            Some(_) => None,
        },
    });

    let from_guid = || {
        item.field("guid")
            .filter(|guid| guid.attr("isPermaLink") != Some("false"))
            .map(|guid| guid.text.trim())
    };

    [from_link, from_guid()]
        .into_iter()
        .flatten()
        .find_map(absolute_http_url)
}

fn absolute_http_url(candidate: &str) -> Option<String> {
    let parsed = Url::parse(candidate).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(parsed.to_string()),
        _ => None,
    }
}

fn published_at(item: &FeedItem) -> Option<DateTime<Utc>> {
    if let Some(date) = item.text("pubDate") {
        if let Ok(parsed) = DateTime::parse_from_rfc2822(date.trim()) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    ["published", "updated", "dc:date"]
        .into_iter()
        .filter_map(|name| item.text(name))
        .find_map(|date| DateTime::parse_from_rfc3339(date.trim()).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn author(item: &FeedItem) -> Option<String> {
    ["dc:creator", "author"]
        .into_iter()
        .filter_map(|name| item.text(name))
        .map(normalize)
        .find(|author| !author.is_empty())
}

fn categories(item: &FeedItem) -> Vec<String> {
    item.fields_named("category")
        .filter_map(|category| {
            let label = match category.attr("term") {
                Some(term) => normalize(term),
                None => normalize(&category.text),
            };
            (!label.is_empty()).then_some(label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::document::FeedDocument;
    use chrono::TimeZone;

    fn rss_item(body: &str) -> FeedItem {
        let xml = format!(
            r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/"><channel><item>{body}</item></channel></rss>"#
        );
        FeedDocument::parse(&xml).unwrap().into_items().remove(0)
    }

    fn atom_entry(body: &str) -> FeedItem {
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry>{body}</entry></feed>"#);
        FeedDocument::parse(&xml).unwrap().into_items().remove(0)
    }

    #[test]
    fn test_map_rss_item() {
        let item = rss_item(
            r#"<title>Budget &lt;b&gt;passes&lt;/b&gt;</title>
               <link> https://example.com/budget </link>
               <pubDate>Tue, 06 May 2025 14:30:00 +0200</pubDate>
               <dc:creator>Jane Reporter</dc:creator>
               <category>Politics</category>"#,
        );

        let base = map_item(&item).unwrap();
        assert_eq!(base.title, "Budget passes");
        assert_eq!(base.url, "https://example.com/budget");
        assert_eq!(
            base.published_at,
            Some(Utc.with_ymd_and_hms(2025, 5, 6, 12, 30, 0).unwrap())
        );
        assert_eq!(base.author.as_deref(), Some("Jane Reporter"));
        assert_eq!(base.categories, vec!["Politics".to_string()]);
    }

    #[test]
    fn test_map_atom_entry() {
        let item = atom_entry(
            r#"<title>Atom story</title>
               <link rel="self" href="https://example.org/feed/1"/>
               <link rel="alternate" href="https://example.org/story"/>
               <published>2025-05-06T08:00:00Z</published>
               <category term="science"/>"#,
        );

        let base = map_item(&item).unwrap();
        assert_eq!(base.url, "https://example.org/story");
        assert_eq!(
            base.published_at,
            Some(Utc.with_ymd_and_hms(2025, 5, 6, 8, 0, 0).unwrap())
        );
        assert_eq!(base.categories, vec!["science".to_string()]);
    }

    #[test]
    fn test_guid_permalink_fallback() {
        let item = rss_item(r#"<title>Guid only</title><guid>https://example.com/guid-story</guid>"#);
        assert_eq!(map_item(&item).unwrap().url, "https://example.com/guid-story");

        let item = rss_item(r#"<title>Opaque guid</title><guid isPermaLink="false">https://example.com/x</guid>"#);
        assert!(map_item(&item).is_none());
    }

    #[test]
    fn test_items_without_resolvable_url_are_skipped() {
        assert!(map_item(&rss_item("<title>No link</title>")).is_none());
        assert!(map_item(&rss_item("<title>Relative</title><link>/news/1</link>")).is_none());
        assert!(map_item(&rss_item("<title>Mailto</title><link>mailto:desk@example.com</link>")).is_none());
        assert!(map_item(&rss_item("<link></link>")).is_none());
    }

    #[test]
    fn test_missing_title_and_bad_date() {
        let item = rss_item(r#"<link>https://example.com/untitled</link><pubDate>yesterday</pubDate>"#);
        let base = map_item(&item).unwrap();
        assert_eq!(base.title, "");
        assert!(base.published_at.is_none());
        assert!(base.author.is_none());
        assert!(base.categories.is_empty());
    }
}
