//! # tg-preview-feed
//!
//! Turns the public web preview of a messaging channel into syndication feeds.
//!
//! The library parses the channel page HTML into a [`PageRecord`] holding the
//! channel header and one [`PostRecord`] per post: sanitized body markup, a
//! short title, a stable id, the publication time, media URLs and link-preview
//! cards. The [`feed`] module turns page records into RSS, Atom and JSON Feed
//! documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use tg_preview_feed::extract_page;
//!
//! let html = r#"<html><body>
//!   <div class="tgme_channel_info_header_title">Telegram News</div>
//!   <div class="tgme_widget_message_wrap">
//!     <div class="tgme_widget_message" data-post="telegram/1">
//!       <div class="tgme_widget_message_text">Hello<br/>world</div>
//!       <a class="tgme_widget_message_date"><time datetime="2023-12-15T16:29:00+00:00"></time></a>
//!     </div>
//!   </div>
//! </body></html>"#;
//!
//! let page = extract_page(html)?;
//! assert_eq!(page.title, "Telegram News");
//! assert_eq!(page.posts[0].text, "<p>Hello</p>\n<p>world</p>");
//! assert_eq!(page.posts[0].link, "https://t.me/s/telegram/1");
//! # Ok::<(), tg_preview_feed::Error>(())
//! ```
//!
//! ## Robustness
//!
//! Every field of a post is extracted independently. A missing body, media
//! element or reference leaves that field empty; a missing or malformed
//! timestamp falls back to the current time. Only a page without a channel
//! title is rejected.

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// CSS selectors of the channel page template.
pub mod selector;

/// Compiled regex patterns and fixed markers.
pub mod patterns;

/// Markup sanitizing: emoji unwrap, link attribute stripping, tag allow-list.
pub mod sanitize;

/// Text normalization: safe HTML, paragraphs, truncation.
pub mod text;

/// Per-post field extractors.
pub mod extractor;

/// URL utilities for channel pages, references and short links.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Blocking HTTP fetch of channel pages.
pub mod fetch;

/// Feed model, merging and RSS/Atom/JSON rendering.
pub mod feed;

/// Environment configuration of the command-line tool.
pub mod config;

// Public API - re-exports
pub use error::{Error, FetchError, Result};
pub use extract::{page_description, page_image_url, page_link, page_title};
pub use extractor::extract_posts;
pub use options::Options;
pub use result::{LinkPreview, PageRecord, PostRecord};

/// Extracts a channel page using default options.
///
/// # Errors
///
/// Returns [`Error::MissingTitle`] when the document has no channel title.
pub fn extract_page(html: &str) -> Result<PageRecord> {
    extract_page_with_options(html, &Options::default())
}

/// Extracts a channel page with custom options.
///
/// # Example
///
/// ```rust
/// use tg_preview_feed::{extract_page_with_options, Options};
///
/// let html = r#"<div class="tgme_channel_info_header_title">Mirror</div>
/// <div class="tgme_widget_message_wrap">
///   <div class="tgme_widget_message" data-post="news/7"></div>
/// </div>"#;
/// let options = Options {
///     base_url: "https://mirror.example/s/".to_string(),
///     ..Options::default()
/// };
/// let page = extract_page_with_options(html, &options)?;
/// assert_eq!(page.posts[0].link, "https://mirror.example/s/news/7");
/// # Ok::<(), tg_preview_feed::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingTitle`] when the document has no channel title.
pub fn extract_page_with_options(html: &str, options: &Options) -> Result<PageRecord> {
    extract::extract_page(html, options)
}

/// Extracts a channel page from raw bytes with charset detection.
///
/// The charset comes from a byte-order mark or a `<meta>` declaration and
/// defaults to UTF-8. Invalid sequences become U+FFFD rather than errors.
///
/// # Errors
///
/// Returns [`Error::MissingTitle`] when the document has no channel title.
pub fn extract_page_bytes(html: &[u8]) -> Result<PageRecord> {
    extract_page_bytes_with_options(html, &Options::default())
}

/// Byte input with custom options; see [`extract_page_bytes`].
///
/// # Errors
///
/// Returns [`Error::MissingTitle`] when the document has no channel title.
pub fn extract_page_bytes_with_options(html: &[u8], options: &Options) -> Result<PageRecord> {
    let html_str = encoding::decode_page(html, None);
    extract_page_with_options(&html_str, options)
}
