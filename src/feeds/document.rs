//! Typed view over an RSS or Atom document.
//!
//! The document is read once with `quick-xml` into a flat list of
//! [`FeedItem`]s, each holding the direct child fields of one `<item>` or
//! `<entry>`. Field lookup uses the qualified element name exactly as written
//! (`content:encoded`, `dc:creator`), so namespaced extensions stay
//! addressable.

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// The feed document could not be read as XML.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },
}

/// Which syndication format an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// RSS `<item>`.
    Rss,
    /// Atom `<entry>`.
    Atom,
}

/// One direct child element of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemField {
    /// Qualified name, prefix included.
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// All descendant text, entities resolved, untrimmed.
    pub text: String,
}

impl ItemField {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// One `<item>`-equivalent node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    kind: ItemKind,
    fields: Vec<ItemField>,
}

impl FeedItem {
    pub fn new(kind: ItemKind, fields: Vec<ItemField>) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// First child field called `name`.
    pub fn field(&self, name: &str) -> Option<&ItemField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every child field called `name`, in document order.
    pub fn fields_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ItemField> + 'a {
        self.fields.iter().filter(move |f| f.name == name)
    }

    /// Text of the first field called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.text.as_str())
    }

    /// The publisher's full formatted body, if the item carries one.
    pub fn rich_content(&self) -> Option<&str> {
        match self.kind {
            ItemKind::Rss => self.text("content:encoded"),
            ItemKind::Atom => self.text("content"),
        }
    }

    /// The short description or summary field.
    pub fn summary(&self) -> Option<&str> {
        match self.kind {
            ItemKind::Rss => self.text("description"),
            ItemKind::Atom => self.text("summary"),
        }
    }
}

/// A parsed feed document.
#[derive(Debug, Default)]
pub struct FeedDocument {
    items: Vec<FeedItem>,
}

impl FeedDocument {
    /// Parse `xml` and collect its items in document order.
    pub fn parse(xml: &str) -> Result<Self, FeedError> {
        let mut reader = Reader::from_str(xml);
        let mut items = Vec::new();
        let mut current: Option<ItemBuilder> = None;
        // Depth of open elements below the current item's own tag.
        let mut depth = 0usize;

        loop {
            let event = reader.read_event().map_err(|e| FeedError::Malformed {
                position: reader.error_position() as u64,
                message: e.to_string(),
            })?;

            match event {
                Event::Start(ref e) => match current.as_mut() {
                    Some(builder) => {
                        if depth == 0 {
                            builder.open_field(e);
                        }
                        depth += 1;
                    }
                    None => {
                        if let Some(kind) = item_kind(e.name().as_ref()) {
                            current = Some(ItemBuilder::new(kind));
                            depth = 0;
                        }
                    }
                },
                Event::Empty(ref e) => {
                    if let Some(builder) = current.as_mut() {
                        if depth == 0 {
                            builder.open_field(e);
                            builder.close_field();
                        }
                    }
                }
                Event::End(_) if current.is_some() => {
                    if depth == 0 {
                        if let Some(builder) = current.take() {
                            items.push(builder.finish());
                        }
                    } else {
                        depth -= 1;
                        if let (0, Some(builder)) = (depth, current.as_mut()) {
                            builder.close_field();
                        }
                    }
                }
                Event::Text(ref e) => {
                    if let Some(builder) = current.as_mut() {
                        builder.push_text(&String::from_utf8_lossy(e));
                    }
                }
                Event::CData(ref e) => {
                    if let Some(builder) = current.as_mut() {
                        builder.push_text(&String::from_utf8_lossy(e));
                    }
                }
                Event::GeneralRef(ref e) => {
                    if let Some(builder) = current.as_mut() {
                        let resolved = match e.resolve_char_ref() {
                            Ok(Some(ch)) => ch.to_string(),
                            _ => {
                                let name = String::from_utf8_lossy(e);
                                match resolve_predefined_entity(&name) {
                                    Some(value) => value.to_string(),
                                    // HTML entities such as &nbsp; are left for the
                                    // HTML normalizer to decode.
                                    None => format!("&{name};"),
                                }
                            }
                        };
                        builder.push_text(&resolved);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { items })
    }

    /// Items in document order.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<FeedItem> {
        self.items
    }
}

fn item_kind(name: &[u8]) -> Option<ItemKind> {
    match name {
        b"item" => Some(ItemKind::Rss),
        b"entry" => Some(ItemKind::Atom),
        _ => None,
    }
}

struct ItemBuilder {
    kind: ItemKind,
    fields: Vec<ItemField>,
    open: Option<ItemField>,
}

impl ItemBuilder {
    fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            open: None,
        }
    }

    fn open_field(&mut self, start: &BytesStart<'_>) {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let attributes = start
            .attributes()
            .flatten()
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let raw = String::from_utf8_lossy(&attr.value).into_owned();
                let value = match unescape(&raw) {
                    Ok(value) => value.into_owned(),
                    Err(_) => raw,
                };
                (key, value)
            })
            .collect();
        self.open = Some(ItemField {
            name,
            attributes,
            text: String::new(),
        });
    }

    fn close_field(&mut self) {
        if let Some(field) = self.open.take() {
            self.fields.push(field);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(field) = self.open.as_mut() {
            field.text.push_str(text);
        }
    }

    fn finish(mut self) -> FeedItem {
        self.close_field();
        FeedItem::new(self.kind, self.fields)
    }
}
