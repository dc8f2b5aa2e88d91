//! Image and video URL extractors.
//!
//! The page lazy-loads photos as CSS backgrounds, so grouped media URLs come
//! out of a fixed-format inline style rather than an attribute.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{BACKGROUND_IMAGE_PREFIX, BACKGROUND_IMAGE_SUFFIX};
use crate::selector::{POST_IMAGE, POST_PHOTO, POST_VIDEO};

/// URL inside `background-image:url('...')`, or empty when the prefix or the
/// `')` terminator is missing.
///
/// # Example
///
/// ```rust
/// use tg_preview_feed::extractor::background_image_url;
///
/// let style = "width:10px;background-image:url('https://cdn/x.jpg')";
/// assert_eq!(background_image_url(style), "https://cdn/x.jpg");
/// assert_eq!(background_image_url("width:10px"), "");
/// ```
#[must_use]
pub fn background_image_url(style: &str) -> String {
    let Some(start) = style.find(BACKGROUND_IMAGE_PREFIX) else {
        return String::new();
    };
    let rest = &style[start + BACKGROUND_IMAGE_PREFIX.len()..];
    rest.find(BACKGROUND_IMAGE_SUFFIX)
        .map(|end| rest[..end].to_string())
        .unwrap_or_default()
}

/// Background image URL of the first element in `sel`, or empty.
#[must_use]
pub fn style_image_url(sel: &Selection) -> String {
    dom::get_attribute(sel, "style")
        .map(|style| background_image_url(&style))
        .unwrap_or_default()
}

/// Non-empty values of `attr` across every node in `sel`, in document order.
fn attribute_values(sel: &Selection, attr: &str) -> Vec<String> {
    sel.nodes()
        .iter()
        .filter_map(|node| node.attr(attr))
        .map(|value| value.to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Image URLs of a post: grouped media tiles first, then every `<img src>`.
#[must_use]
pub fn extract_images(post: &Selection) -> Vec<String> {
    let mut images: Vec<String> = post
        .select(POST_PHOTO)
        .nodes()
        .iter()
        .map(|node| style_image_url(&Selection::from(*node)))
        .filter(|url| !url.is_empty())
        .collect();

    images.extend(attribute_values(&post.select(POST_IMAGE), "src"));
    images
}

/// Every `<video src>` in the post, in document order.
#[must_use]
pub fn extract_videos(post: &Selection) -> Vec<String> {
    attribute_values(&post.select(POST_VIDEO), "src")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_image_url_edge_cases() {
        assert_eq!(background_image_url(""), "");
        assert_eq!(background_image_url("background-image:url('unterminated"), "");
        assert_eq!(background_image_url("background-image:url('')"), "");
        assert_eq!(
            background_image_url("left:0;background-image:url('https://a/b.jpg');top:0"),
            "https://a/b.jpg"
        );
    }

    #[test]
    fn images_skip_tiles_without_url() {
        let doc = dom::parse(
            r#"<a class="tgme_widget_message_photo_wrap" style="width:1px"></a>
               <a class="tgme_widget_message_photo_wrap" style="background-image:url('https://a/1.jpg')"></a>
               <img src=""><img src="https://a/2.jpg"><img>"#,
        );
        assert_eq!(extract_images(&doc.select("body")), vec!["https://a/1.jpg", "https://a/2.jpg"]);
    }

    #[test]
    fn videos_in_document_order() {
        let doc = dom::parse(r#"<video src="https://a/1.mp4"></video><div><video></video><video src="https://a/2.mp4"></video></div>"#);
        assert_eq!(extract_videos(&doc.select("body")), vec!["https://a/1.mp4", "https://a/2.mp4"]);
    }
}
