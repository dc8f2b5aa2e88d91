//! Syndication feeds built from extracted channel pages.
//!
//! A [`Feed`] is format-neutral: [`Feed::from_page`] maps one channel page,
//! [`merge`] combines several channels, and [`render`] / [`save_to_dir`]
//! serialize to RSS 2.0, Atom 1.0 or JSON Feed 1.1.
//!
//! # Usage
//!
//! ```rust
//! use tg_preview_feed::feed::{self, Feed, FeedFormat};
//! use tg_preview_feed::extract_page;
//!
//! let html = r#"<div class="tgme_channel_info_header_title">News</div>
//! <div class="tgme_channel_info_header_username"><a href="https://t.me/news">@news</a></div>"#;
//! let page = extract_page(html)?;
//! let feed = Feed::from_page(&page);
//! let rss = feed::render(&feed, FeedFormat::Rss)?;
//! assert!(rss.contains("<title>News</title>"));
//! # Ok::<(), tg_preview_feed::Error>(())
//! ```

mod atom;
mod json;
mod rss;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::result::{PageRecord, PostRecord};

/// Title of a feed merged from several channels.
pub const MERGED_TITLE: &str = "Telegram Feed";

/// Description prefix of a merged feed, followed by the channel links.
pub const MERGED_DESCRIPTION_PREFIX: &str = "Channels: ";

/// Link of a merged feed.
pub const MERGED_LINK: &str = "https://github.com/kulapard/tg2feed";

/// MIME type announced for image enclosures.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// MIME type announced for video enclosures.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// A media attachment of a feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Media URL.
    pub url: String,
    /// Size in bytes; zero when unknown.
    pub length: u64,
    /// MIME type.
    pub mime_type: String,
}

/// One entry of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Stable item identifier.
    pub id: String,
    /// Plain-text title.
    pub title: String,
    /// Post URL.
    pub link: String,
    /// Body HTML.
    pub description: String,
    /// Author display name.
    pub author: String,
    /// Publication time.
    pub created: DateTime<FixedOffset>,
    /// First image, else first video.
    pub enclosure: Option<Enclosure>,
}

/// A format-neutral feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// Feed title.
    pub title: String,
    /// Home page of the feed.
    pub link: String,
    /// Description, possibly HTML.
    pub description: String,
    /// Feed-level author, if any.
    pub author: Option<String>,
    /// Logo URL, if any.
    pub image_url: Option<String>,
    /// Creation time of the feed document.
    pub created: DateTime<FixedOffset>,
    /// Last update time of the feed document.
    pub updated: DateTime<FixedOffset>,
    /// Entries, newest first.
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Build the feed of one channel page.
    #[must_use]
    pub fn from_page(page: &PageRecord) -> Self {
        let now = now();
        let mut feed = Self {
            title: page.title.clone(),
            link: page.link.clone(),
            description: page.description.clone(),
            author: Some(page.title.clone()),
            image_url: (!page.image_url.is_empty()).then(|| page.image_url.clone()),
            created: now,
            updated: now,
            items: page.posts.iter().map(|post| FeedItem::from_post(post, &page.title)).collect(),
        };
        feed.sort_items();
        feed
    }

    /// Order items newest first. Items with equal times keep their order.
    pub fn sort_items(&mut self) {
        self.items.sort_by(|a, b| b.created.cmp(&a.created));
    }
}

impl FeedItem {
    /// Map one post, attributing it to `author`.
    #[must_use]
    pub fn from_post(post: &PostRecord, author: &str) -> Self {
        let id = if post.id.is_empty() {
            fallback_id(&post.title, &post.created)
        } else {
            post.id.clone()
        };

        Self {
            id,
            title: post.title.clone(),
            link: post.link.clone(),
            description: post.text.clone(),
            author: author.to_string(),
            created: post.created,
            enclosure: enclosure(post),
        }
    }
}

/// Id for a post without a reference: SHA-256 of its title and RFC 3339 time.
#[must_use]
pub fn fallback_id(title: &str, created: &DateTime<FixedOffset>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(created.to_rfc3339().as_bytes());
    hex::encode(hasher.finalize())
}

fn enclosure(post: &PostRecord) -> Option<Enclosure> {
    let (url, mime_type) = if let Some(image) = post.images.first() {
        (image, IMAGE_MIME_TYPE)
    } else {
        (post.videos.first()?, VIDEO_MIME_TYPE)
    };

    Some(Enclosure {
        url: url.clone(),
        length: 0,
        mime_type: mime_type.to_string(),
    })
}

/// Combine channel feeds into one.
///
/// The description lists the channel links in input order; items from all
/// feeds are sorted newest first.
#[must_use]
pub fn merge(feeds: Vec<Feed>) -> Feed {
    let links: Vec<&str> = feeds.iter().map(|feed| feed.link.as_str()).collect();
    let description = format!("{MERGED_DESCRIPTION_PREFIX}{}", links.join(", "));

    let now = now();
    let mut merged = Feed {
        title: MERGED_TITLE.to_string(),
        link: MERGED_LINK.to_string(),
        description,
        author: None,
        image_url: None,
        created: now,
        updated: now,
        items: feeds.into_iter().flat_map(|feed| feed.items).collect(),
    };
    merged.sort_items();
    merged
}

/// Output format of a feed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedFormat {
    /// RSS 2.0.
    Rss,
    /// Atom 1.0.
    Atom,
    /// JSON Feed 1.1.
    Json,
}

impl FeedFormat {
    /// Every supported format.
    pub const ALL: [Self; 3] = [Self::Rss, Self::Atom, Self::Json];

    /// Fixed output file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Rss => "rss.xml",
            Self::Atom => "atom.xml",
            Self::Json => "feed.json",
        }
    }

    /// Name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized feed format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feed format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for FeedFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s.trim())
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Serialize `feed` in `format`.
///
/// # Errors
///
/// Returns [`crate::Error::Feed`] when JSON serialization fails.
pub fn render(feed: &Feed, format: FeedFormat) -> Result<String> {
    match format {
        FeedFormat::Rss => Ok(rss::render(feed)),
        FeedFormat::Atom => Ok(atom::render(feed)),
        FeedFormat::Json => json::render(feed),
    }
}

/// Write `feed` into `dir` once per requested format.
///
/// The directory is created recursively when absent. Unknown format names
/// are logged and skipped. Returns the paths written, in request order.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the directory or a file cannot be
/// written, [`crate::Error::Feed`] when rendering fails.
pub fn save_to_dir<S: AsRef<str>>(feed: &Feed, dir: &Path, formats: &[S]) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::info!(dir = %dir.display(), "created output directory");
    }

    let mut written = Vec::new();
    for name in formats {
        let name = name.as_ref();
        let format = match name.parse::<FeedFormat>() {
            Ok(format) => format,
            Err(err) => {
                tracing::warn!(format = name, "{err}, ignoring");
                continue;
            }
        };

        let path = dir.join(format.file_name());
        fs::write(&path, render(feed, format)?)?;
        tracing::info!(path = %path.display(), %format, items = feed.items.len(), "feed file saved");
        written.push(path);
    }
    Ok(written)
}

/// Escape text for XML element content and attribute values.
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}
