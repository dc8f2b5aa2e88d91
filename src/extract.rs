//! Page assembly.
//!
//! Reads the channel header (title, link, description, avatar) through fixed
//! selectors and attaches the posts found by [`crate::extractor`]. No sorting
//! happens here; feeds order items by date themselves.

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::extractor;
use crate::options::Options;
use crate::result::PageRecord;
use crate::sanitize::TagFilter;
use crate::selector::{PAGE_DESCRIPTION, PAGE_IMAGE, PAGE_LINK, PAGE_TITLE};
use crate::text;

/// Main entry point for page extraction.
pub(crate) fn extract_page(html: &str, options: &Options) -> Result<PageRecord> {
    let document = dom::parse(html);
    extract_page_from_document(&document, options)
}

/// Assemble a page record from an already parsed document.
pub(crate) fn extract_page_from_document(document: &Document, options: &Options) -> Result<PageRecord> {
    let title = page_title(document).ok_or(Error::MissingTitle)?;

    let page = PageRecord {
        link: page_link(document),
        description: page_description(document),
        image_url: page_image_url(document),
        posts: extractor::extract_posts(document, options),
        title,
    };

    tracing::debug!(title = %page.title, posts = page.posts.len(), "extracted page");
    Ok(page)
}

/// Channel display name; `None` when the header is missing or blank.
#[must_use]
pub fn page_title(document: &Document) -> Option<String> {
    let title = dom::text_content(&document.select(PAGE_TITLE)).trim().to_string();
    (!title.is_empty()).then_some(title)
}

/// Canonical channel link, or empty.
#[must_use]
pub fn page_link(document: &Document) -> String {
    dom::get_attribute(&document.select(PAGE_LINK), "href").unwrap_or_default()
}

/// Sanitized channel description HTML, or empty.
#[must_use]
pub fn page_description(document: &Document) -> String {
    let description: Selection = document.select(PAGE_DESCRIPTION);
    if description.is_empty() {
        return String::new();
    }
    text::to_safe_html(&description, TagFilter::KeepAll)
}

/// Channel avatar URL, or empty.
#[must_use]
pub fn page_image_url(document: &Document) -> String {
    dom::get_attribute(&document.select(PAGE_IMAGE), "src").unwrap_or_default()
}
