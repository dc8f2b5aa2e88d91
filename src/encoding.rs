//! Character set detection and decoding of fetched page bytes.
//!
//! The charset is taken from, in order: a byte-order mark, the HTTP
//! `Content-Type` header, a `<meta>` declaration in the first kilobyte.
//! UTF-8 is the fallback. Decoding is lossy and never fails.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a `<meta>` charset declaration.
const META_SNIFF_LEN: usize = 1024;

/// `charset=...` inside a header value or a `<meta>` tag.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// A `<meta>` tag that declares a charset, either form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Charset label from a `Content-Type` header value.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Charset label from the first `<meta>` declaration in `head`.
#[must_use]
pub fn charset_from_meta(head: &str) -> Option<&str> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Pick the encoding of a page.
#[must_use]
pub fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(encoding) = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(META_SNIFF_LEN)]);
    charset_from_meta(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to UTF-8, replacing invalid sequences with U+FFFD.
#[must_use]
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, content_type);
    let (decoded, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "page contained invalid byte sequences");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_without_declaration() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>", None), UTF_8);
    }

    #[test]
    fn header_charset_wins_over_meta() {
        let html = br#"<meta charset="utf-8"><body>x</body>"#;
        let encoding = detect_encoding(html, Some("text/html; charset=windows-1251"));
        assert_eq!(encoding.name(), "windows-1251");
    }

    #[test]
    fn header_without_charset_falls_back_to_meta() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html, Some("text/html")).name(), "windows-1252");
    }

    #[test]
    fn bom_wins_over_everything() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\">";
        assert_eq!(detect_encoding(html, Some("text/html; charset=koi8-r")), UTF_8);
    }

    #[test]
    fn unknown_label_is_ignored() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html, Some("text/html; charset=bogus")), UTF_8);
    }

    #[test]
    fn decode_cyrillic_page() {
        // "Привет" in windows-1251
        let html = b"<meta charset=\"windows-1251\"><p>\xCF\xF0\xE8\xE2\xE5\xF2</p>";
        assert!(decode_page(html, None).contains("Привет"));
    }

    #[test]
    fn decode_invalid_utf8_is_lossy() {
        let out = decode_page(b"<p>ok \xFF\xFE still ok</p>", None);
        assert!(out.contains("ok"));
        assert!(out.contains("still ok"));
        assert!(out.contains('\u{FFFD}'));
    }

    #[test]
    fn charset_from_content_type_variants() {
        assert_eq!(charset_from_content_type("text/html; charset=UTF-8"), Some("UTF-8"));
        assert_eq!(charset_from_content_type("text/html;charset=\"koi8-r\""), Some("koi8-r"));
        assert_eq!(charset_from_content_type("text/html"), None);
    }
}
