//! URL utilities: channel URLs, post link resolution, short-link rewriting.

use url::Url;

/// Normalize a channel name: drop every `@` and space.
///
/// A full channel URL (`https://t.me/durov`, `https://t.me/s/durov?q=1`) is
/// reduced to its last path segment first.
#[must_use]
pub fn normalize_channel(channel: &str) -> String {
    let name = Url::parse(channel.trim())
        .ok()
        .filter(|url| url.has_host())
        .and_then(|url| {
            url.path_segments()?
                .filter(|segment| !segment.is_empty())
                .next_back()
                .map(str::to_string)
        })
        .unwrap_or_else(|| channel.to_string());

    name.chars().filter(|c| *c != '@' && *c != ' ').collect()
}

/// Web-preview URL of a channel, e.g. `@durov` → `https://t.me/s/durov`.
#[must_use]
pub fn channel_url(channel: &str, base_url: &str) -> String {
    format!("{base_url}{}", normalize_channel(channel))
}

/// Resolve a relative post reference (`channel/123`) against the base URL.
///
/// Returns `None` when the base is not a valid URL or the join fails.
#[must_use]
pub fn resolve_reference(reference: &str, base_url: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    base.join(reference).ok().map(String::from)
}

/// Rewrite every `prefix` occurrence to `base_url`.
///
/// Occurrences already spelled as `base_url` are left as they are, so links
/// that point to the web preview are not prefixed twice.
///
/// # Example
///
/// ```rust
/// use tg_preview_feed::url_utils::rewrite_short_links;
///
/// let html = r#"<a href="https://t.me/durov">x</a> https://t.me/s/durov"#;
/// assert_eq!(
///     rewrite_short_links(html, "https://t.me/", "https://t.me/s/"),
///     r#"<a href="https://t.me/s/durov">x</a> https://t.me/s/durov"#,
/// );
/// ```
#[must_use]
pub fn rewrite_short_links(html: &str, prefix: &str, base_url: &str) -> String {
    if prefix.is_empty() {
        return html.to_string();
    }

    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find(prefix) {
        out.push_str(&rest[..pos]);
        out.push_str(base_url);
        let tail = &rest[pos..];
        rest = if tail.starts_with(base_url) {
            &tail[base_url.len()..]
        } else {
            &tail[prefix.len()..]
        };
    }
    out.push_str(rest);
    out
}
