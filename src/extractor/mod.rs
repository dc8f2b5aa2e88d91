//! Post extraction.
//!
//! One function per field, composed directly in [`extract_post`]. Failures are
//! per field: a missing timestamp, body or reference never drops the post.
//!
//! # Module Structure
//!
//! - `fields`: title, body text, link, id and timestamp
//! - `media`: grouped-media images, inline images, videos
//! - `preview`: embedded link-preview cards
//!
//! # Usage
//!
//! ```rust
//! use tg_preview_feed::{dom, extractor, Options};
//!
//! let html = r#"<div class="tgme_widget_message_wrap">
//!   <div class="tgme_widget_message" data-post="durov/1">
//!     <div class="tgme_widget_message_text">Hello</div>
//!   </div>
//! </div>"#;
//! let doc = dom::parse(html);
//! let posts = extractor::extract_posts(&doc, &Options::default());
//! assert_eq!(posts[0].text, "<p>Hello</p>");
//! assert_eq!(posts[0].link, "https://t.me/s/durov/1");
//! ```

pub mod fields;
pub mod media;
pub mod preview;

pub use fields::{
    extract_created, extract_id, extract_link, extract_text, extract_title, parse_datetime,
    post_id, post_reference,
};
pub use media::{background_image_url, extract_images, extract_videos};
pub use preview::extract_link_previews;

use dom_query::{Document, Selection};

use crate::result::PostRecord;
use crate::selector::POST;
use crate::Options;

/// Every post container in the document, in document order.
///
/// Repeated containers produce repeated records.
#[must_use]
pub fn extract_posts(doc: &Document, options: &Options) -> Vec<PostRecord> {
    doc.select(POST)
        .nodes()
        .iter()
        .map(|node| extract_post(&Selection::from(*node), options))
        .collect()
}

/// Run every field extractor over one post container.
#[must_use]
pub fn extract_post(post: &Selection, options: &Options) -> PostRecord {
    let text = extract_text(post, options);
    let title = extract_title(&text, options);
    let link_previews = if options.include_link_previews {
        extract_link_previews(post, options)
    } else {
        Vec::new()
    };

    let record = PostRecord {
        id: extract_id(post),
        title,
        text,
        link: extract_link(post, options),
        created: extract_created(post),
        images: extract_images(post),
        videos: extract_videos(post),
        link_previews,
    };

    if record.id.is_empty() {
        tracing::warn!("post container has no data-post reference; keeping it with an empty id");
    }
    tracing::debug!(
        id = %record.id,
        link = %record.link,
        images = record.images.len(),
        videos = record.videos.len(),
        "extracted post"
    );

    record
}
