//! Result types for extraction output.
//!
//! Records are built fresh per page, never mutated after construction, and
//! handed to the feed builder once.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// An embedded link-card preview inside a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    /// Target URL of the card.
    pub link: String,

    /// Preview image URL (from the card's background-image style), or empty.
    pub image_url: String,

    /// Preview video URL, or empty.
    pub video_url: String,

    /// Site name shown on the card.
    pub site_name: String,

    /// Card title.
    pub title: String,

    /// Sanitized card description HTML.
    pub description: String,
}

/// One message container found on the channel page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Lowercase hex SHA-256 of the raw `data-post` reference.
    ///
    /// Empty when the container carries no reference.
    pub id: String,

    /// Truncated plain-text summary of the body.
    pub title: String,

    /// Sanitized, paragraph-wrapped body HTML.
    pub text: String,

    /// Absolute URL of the post on the web-preview page, or empty.
    pub link: String,

    /// Publication time; the extraction time when the page carries none.
    pub created: DateTime<FixedOffset>,

    /// Image URLs: grouped media first, then plain `<img>` sources.
    pub images: Vec<String>,

    /// Video URLs in document order.
    pub videos: Vec<String>,

    /// Embedded link-card previews.
    pub link_previews: Vec<LinkPreview>,
}

/// Everything extracted from one channel page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Channel display name.
    pub title: String,

    /// Canonical channel URL, or empty.
    pub link: String,

    /// Sanitized channel description HTML.
    pub description: String,

    /// Channel avatar URL, or empty.
    pub image_url: String,

    /// Posts in document order.
    pub posts: Vec<PostRecord>,
}
