//! Link-preview card extraction.

use dom_query::Selection;

use crate::dom;
use crate::extractor::media::style_image_url;
use crate::result::LinkPreview;
use crate::sanitize::TagFilter;
use crate::selector::{
    PREVIEW, PREVIEW_DESCRIPTION, PREVIEW_IMAGE, PREVIEW_SITE_NAME, PREVIEW_TITLE, PREVIEW_VIDEO,
    POST_VIDEO,
};
use crate::text;
use crate::url_utils;
use crate::Options;

/// Every link-preview card in the post, in document order.
#[must_use]
pub fn extract_link_previews(post: &Selection, options: &Options) -> Vec<LinkPreview> {
    post.select(PREVIEW)
        .nodes()
        .iter()
        .map(|node| extract_link_preview(&Selection::from(*node), options))
        .collect()
}

/// One card.
#[must_use]
pub fn extract_link_preview(card: &Selection, options: &Options) -> LinkPreview {
    let href = dom::get_attribute(card, "href").unwrap_or_default();
    let link = if href.is_empty() {
        href
    } else {
        url_utils::resolve_reference(&href, &options.base_url).unwrap_or(href)
    };

    let description = card.select(PREVIEW_DESCRIPTION);
    let description = if description.is_empty() {
        String::new()
    } else {
        text::to_safe_html(&description, TagFilter::KeepAll)
    };

    LinkPreview {
        link,
        image_url: style_image_url(&card.select(PREVIEW_IMAGE)),
        video_url: preview_video_url(card),
        site_name: trimmed_text(&card.select(PREVIEW_SITE_NAME)),
        title: trimmed_text(&card.select(PREVIEW_TITLE)),
        description,
    }
}

/// The dedicated card video when present, any video in the card otherwise.
fn preview_video_url(card: &Selection) -> String {
    dom::get_attribute(&card.select(PREVIEW_VIDEO), "src")
        .filter(|src| !src.is_empty())
        .or_else(|| dom::get_attribute(&card.select(POST_VIDEO), "src"))
        .unwrap_or_default()
}

fn trimmed_text(sel: &Selection) -> String {
    dom::text_content(sel).trim().to_string()
}
