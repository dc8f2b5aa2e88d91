//! Text, link, identity and date extractors for a single post container.

use chrono::{DateTime, FixedOffset, Utc};
use dom_query::Selection;
use sha2::{Digest, Sha256};

use crate::dom;
use crate::sanitize::TagFilter;
use crate::selector::{POST_DATE, POST_REFERENCE, POST_REFERENCE_ATTR, POST_TEXT};
use crate::text;
use crate::url_utils;
use crate::Options;

/// Raw `data-post` reference of the post (`channel/123`), if present.
#[must_use]
pub fn post_reference(post: &Selection) -> Option<String> {
    dom::get_attribute(&post.select(POST_REFERENCE), POST_REFERENCE_ATTR)
}

/// Lowercase hex SHA-256 of `reference`; always 64 characters.
///
/// # Example
///
/// ```rust
/// use tg_preview_feed::extractor::post_id;
///
/// assert_eq!(
///     post_id(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// ```
#[must_use]
pub fn post_id(reference: &str) -> String {
    hex::encode(Sha256::digest(reference.as_bytes()))
}

/// Id of the post, or empty when it has no reference.
#[must_use]
pub fn extract_id(post: &Selection) -> String {
    post_reference(post).map(|r| post_id(&r)).unwrap_or_default()
}

/// Absolute post URL on the web preview, or empty.
#[must_use]
pub fn extract_link(post: &Selection, options: &Options) -> String {
    post_reference(post)
        .and_then(|r| url_utils::resolve_reference(&r, &options.base_url))
        .unwrap_or_default()
}

/// Sanitized, paragraph-wrapped body HTML, or empty when there is no body.
#[must_use]
pub fn extract_text(post: &Selection, options: &Options) -> String {
    let body = post.select(POST_TEXT);
    if body.is_empty() {
        return String::new();
    }

    let html = text::to_safe_html(&body, TagFilter::AllowList);
    let formatted = text::format_paragraphs(&html);
    url_utils::rewrite_short_links(&formatted, &options.short_link_prefix, &options.base_url)
}

/// Title derived from the formatted body HTML.
#[must_use]
pub fn extract_title(text_html: &str, options: &Options) -> String {
    text::title_from_html(text_html, options.title_max_len)
}

/// Parse an RFC 3339 timestamp strictly, keeping its offset.
pub fn parse_datetime(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
}

/// Publication time of the post.
///
/// A missing or malformed timestamp is logged and replaced by the current
/// time, so every post carries a date.
#[must_use]
pub fn extract_created(post: &Selection) -> DateTime<FixedOffset> {
    let Some(raw) = dom::get_attribute(&post.select(POST_DATE), "datetime") else {
        tracing::warn!("post datetime not found, falling back to now");
        return now();
    };

    match parse_datetime(&raw) {
        Ok(ts) => ts,
        Err(err) => {
            tracing::warn!(datetime = %raw, error = %err, "failed to parse post datetime, falling back to now");
            now()
        }
    }
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}
