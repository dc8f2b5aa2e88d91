//! Configuration options for page extraction.
//!
//! The `Options` struct holds the few constants of the channel page template
//! that a caller may want to override (mirrors, tests, other preview hosts).

/// Default web-preview base URL posts are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://t.me/s/";

/// Default short-link prefix rewritten to the web-preview prefix in post bodies.
pub const DEFAULT_SHORT_LINK_PREFIX: &str = "https://t.me/";

/// Default maximum visible length of a post title.
pub const DEFAULT_TITLE_MAX_LEN: usize = 30;

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use tg_preview_feed::Options;
///
/// let options = Options {
///     title_max_len: 50,
///     ..Options::default()
/// };
/// assert!(options.include_link_previews);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL of the web-preview page; the per-post `data-post` reference is
    /// resolved against it.
    ///
    /// Default: `https://t.me/s/`
    pub base_url: String,

    /// Short-link prefix rewritten to `base_url` inside post bodies so that
    /// cross references open the browsable preview instead of the app.
    ///
    /// Default: `https://t.me/`
    pub short_link_prefix: String,

    /// Maximum number of visible characters in a derived post title.
    ///
    /// Default: `30`
    pub title_max_len: usize,

    /// Extract embedded link-preview cards into `PostRecord::link_previews`.
    ///
    /// Default: `true`
    pub include_link_previews: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            short_link_prefix: DEFAULT_SHORT_LINK_PREFIX.to_string(),
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            include_link_previews: true,
        }
    }
}
