//! JSON Feed 1.1 rendering.

use serde::Serialize;

use super::{Feed, FeedItem};
use crate::error::{Error, Result};

const VERSION: &str = "https://jsonfeed.org/version/1.1";

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    home_page_url: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<Author<'a>>,
    items: Vec<Item<'a>>,
}

#[derive(Serialize)]
struct Author<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct Item<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    url: &'a str,
    title: &'a str,
    content_html: &'a str,
    date_published: String,
    authors: Vec<Author<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment<'a>>,
}

#[derive(Serialize)]
struct Attachment<'a> {
    url: &'a str,
    mime_type: &'a str,
    size_in_bytes: u64,
}

impl<'a> From<&'a FeedItem> for Item<'a> {
    fn from(item: &'a FeedItem) -> Self {
        Self {
            id: &item.id,
            url: &item.link,
            title: &item.title,
            content_html: &item.description,
            date_published: item.created.to_rfc3339(),
            authors: vec![Author { name: &item.author }],
            attachments: item
                .enclosure
                .iter()
                .map(|e| Attachment {
                    url: &e.url,
                    mime_type: &e.mime_type,
                    size_in_bytes: e.length,
                })
                .collect(),
        }
    }
}

/// Render a pretty-printed JSON Feed document.
pub(super) fn render(feed: &Feed) -> Result<String> {
    let doc = JsonFeed {
        version: VERSION,
        title: &feed.title,
        home_page_url: &feed.link,
        description: &feed.description,
        icon: feed.image_url.as_deref(),
        authors: feed.author.iter().map(|name| Author { name }).collect(),
        items: feed.items.iter().map(Item::from).collect(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| Error::Feed(e.to_string()))
}
