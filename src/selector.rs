//! CSS selectors of the channel web-preview page template.
//!
//! The page layout is fixed, so each field is bound to one selector constant
//! here and one extractor function in [`crate::extractor`].

// === Page level ===

/// Channel display name.
pub const PAGE_TITLE: &str = ".tgme_channel_info_header_title";

/// Anchor carrying the canonical channel link.
pub const PAGE_LINK: &str = ".tgme_channel_info_header_username a";

/// Channel description block.
pub const PAGE_DESCRIPTION: &str = ".tgme_channel_info_description";

/// Channel avatar image.
pub const PAGE_IMAGE: &str = ".tgme_page_photo_image img";

// === Post level ===

/// One post container.
pub const POST: &str = ".tgme_widget_message_wrap";

/// Element carrying the `data-post` reference.
pub const POST_REFERENCE: &str = ".tgme_widget_message";

/// Attribute holding the per-post relative path (`channel/123`).
pub const POST_REFERENCE_ATTR: &str = "data-post";

/// Message body.
pub const POST_TEXT: &str = ".tgme_widget_message_text";

/// Timestamp element; its `datetime` attribute is RFC 3339.
pub const POST_DATE: &str = ".tgme_widget_message_date time";

/// Grouped media tile with a `background-image` style.
pub const POST_PHOTO: &str = ".tgme_widget_message_photo_wrap";

/// Plain inline images.
pub const POST_IMAGE: &str = "img";

/// Videos anywhere in the post.
pub const POST_VIDEO: &str = "video";

// === Link previews ===

/// Embedded link-card preview.
pub const PREVIEW: &str = ".tgme_widget_message_link_preview";

/// Card image tile with a `background-image` style.
pub const PREVIEW_IMAGE: &str = ".link_preview_image";

/// Dedicated card video.
pub const PREVIEW_VIDEO: &str = ".link_preview_video_wrap video";

/// Card site name.
pub const PREVIEW_SITE_NAME: &str = ".link_preview_site_name";

/// Card title.
pub const PREVIEW_TITLE: &str = ".link_preview_title";

/// Card description.
pub const PREVIEW_DESCRIPTION: &str = ".link_preview_description";

// === Sanitizer ===

/// Emoji widgets, in both markup forms the page uses.
pub const EMOJI: &str = "i.emoji, tg-emoji";

/// Tags kept by the post-body allow-list.
pub const ALLOWED_TAGS: &[&str] = &["a", "i", "b", "br"];

/// Anchor attributes stripped by the sanitizer.
pub const LINK_TRACKING_ATTRS: &[&str] = &["target", "rel", "onclick"];
