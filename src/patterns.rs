//! Compiled regex patterns for the extraction pipeline.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Any tag, matched textually. Used only on the title path, where a crude
/// strip is the expected output.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG regex"));

/// Zero-width space left behind by the page's text layout.
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Inline style prefix of lazy-loaded images.
pub const BACKGROUND_IMAGE_PREFIX: &str = "background-image:url('";

/// Terminator of [`BACKGROUND_IMAGE_PREFIX`].
pub const BACKGROUND_IMAGE_SUFFIX: &str = "')";
