//! Text normalization: safe HTML serialization, paragraph wrapping, and
//! word-boundary truncation.

use dom_query::Selection;

use crate::patterns::{HTML_TAG, ZERO_WIDTH_SPACE};
use crate::sanitize::{self, TagFilter};

/// Ellipsis marker appended by [`shorten_text`].
pub const ELLIPSIS: &str = "...";

/// Sanitize a node and flatten the markup onto one line.
///
/// Newlines are removed, tabs become single spaces, and the result is trimmed.
#[must_use]
pub fn to_safe_html(sel: &Selection, filter: TagFilter) -> String {
    flatten(&sanitize::sanitize(sel, filter))
}

fn flatten(html: &str) -> String {
    html.replace('\n', "").replace('\t', " ").trim().to_string()
}

/// Split markup on line breaks and wrap each non-empty fragment in `<p>`.
///
/// The self-closed `<br/>` form is tried first; `<br>` is the fallback when
/// that produced no split. Fragments are joined with a single newline.
#[must_use]
pub fn format_paragraphs(html: &str) -> String {
    let mut parts: Vec<&str> = html.split("<br/>").collect();
    if parts.len() <= 1 {
        parts = html.split("<br>").collect();
    }

    parts
        .into_iter()
        .map(|part| part.replace(ZERO_WIDTH_SPACE, ""))
        .filter_map(|part| {
            let part = part.trim();
            (!part.is_empty()).then(|| format!("<p>{part}</p>"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate `text` to at most `max_len` characters plus an ellipsis.
///
/// Characters are counted as Unicode scalar values. The cut happens at the
/// last whitespace before the limit when there is one, otherwise exactly at
/// the limit. At least one character is always kept, and text that already
/// fits is returned unchanged.
///
/// # Example
///
/// ```rust
/// use tg_preview_feed::text::shorten_text;
///
/// assert_eq!(shorten_text("abc def", 5), "abc...");
/// assert_eq!(shorten_text("abc def", 7), "abc def");
/// assert_eq!(shorten_text("abcdef", 1), "a...");
/// ```
#[must_use]
pub fn shorten_text(text: &str, max_len: usize) -> String {
    let mut last_space = None;

    for (count, (ix, c)) in text.char_indices().enumerate() {
        if c.is_whitespace() {
            last_space = Some(ix);
        }
        if count < max_len {
            continue;
        }

        let cut = match last_space {
            Some(space) if space > 0 => space,
            _ if ix > 0 => ix,
            // Limit of zero or a leading space: keep the first character.
            _ => text.chars().next().map_or(0, char::len_utf8),
        };
        return format!("{}{ELLIPSIS}", &text[..cut]);
    }

    text.to_string()
}

/// Derive a plain-text title from body HTML.
///
/// Keeps the markup before the first `<br`, removes tags with a textual
/// regex, trims, and shortens to `max_len`.
#[must_use]
pub fn title_from_html(html: &str, max_len: usize) -> String {
    let head = html.find("<br").map_or(html, |ix| &html[..ix]);
    let stripped = HTML_TAG.replace_all(head, "");
    shorten_text(stripped.trim(), max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn shorten_text_cases() {
        let cases = [
            ("", 1, ""),
            ("abcdef", 1, "a..."),
            ("abcdef", 3, "abc..."),
            ("abc def", 5, "abc..."),
            ("abc def", 7, "abc def"),
            ("abc def", 3, "abc..."),
        ];
        for (input, max, expected) in cases {
            assert_eq!(shorten_text(input, max), expected, "shorten_text({input:?}, {max})");
        }
    }

    #[test]
    fn shorten_text_counts_characters_not_bytes() {
        assert_eq!(shorten_text("привет мир", 10), "привет мир");
        assert_eq!(shorten_text("привет мир", 8), "привет...");
        assert_eq!(shorten_text("👍👍👍", 2), "👍👍...");
    }

    #[test]
    fn shorten_text_never_empties_non_empty_input() {
        assert_eq!(shorten_text("abc", 0), "a...");
        assert_eq!(shorten_text(" abcdef", 3), " ab...");
    }

    #[test]
    fn format_paragraphs_single_line() {
        assert_eq!(format_paragraphs("Test text"), "<p>Test text</p>");
    }

    #[test]
    fn format_paragraphs_splits_both_br_forms() {
        assert_eq!(format_paragraphs("a<br/>b"), "<p>a</p>\n<p>b</p>");
        assert_eq!(format_paragraphs("a <br>b<br><br> c"), "<p>a</p>\n<p>b</p>\n<p>c</p>");
    }

    #[test]
    fn format_paragraphs_drops_zero_width_fragments() {
        assert_eq!(format_paragraphs("a<br>\u{200b}<br>b"), "<p>a</p>\n<p>b</p>");
        assert_eq!(format_paragraphs(""), "");
    }

    #[test]
    fn title_from_html_cases() {
        let cases = [
            ("", ""),
            ("<p> Test text </p>", "Test text"),
            ("<p> <a href=\"https://t.me/s/telegram\">telegram</a> 👍 👍</p>", "telegram 👍 👍"),
            (" title <br/>not-title", "title"),
            (" title <br>not-title", "title"),
        ];
        for (input, expected) in cases {
            assert_eq!(title_from_html(input, 30), expected, "title_from_html({input:?})");
        }
    }

    #[test]
    fn title_from_html_truncates() {
        let title = title_from_html("<p>The quick brown fox jumps over the lazy dog</p>", 30);
        assert_eq!(title, "The quick brown fox jumps over...");
    }

    #[test]
    fn to_safe_html_flattens_whitespace() {
        let doc = dom::parse(
            "<div id=\"d\">\n\t<a href=\"https://t.me/s/telegram\" target=\"_blank\" rel=\"noopener\">telegram</a>\n\t<i class=\"emoji\">👍</i>\n\t<tg-emoji>👍</tg-emoji>\n</div>",
        );
        let out = to_safe_html(&doc.select("#d"), TagFilter::KeepAll);
        assert_eq!(out, r#"<a href="https://t.me/s/telegram">telegram</a> 👍 👍"#);
    }
}
