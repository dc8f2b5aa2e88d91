//! DOM Operations Adapter
//!
//! Small adapter over the `dom_query` crate with the handful of operations the
//! extractors need. Every sanitizing pass works on a re-parsed copy of a
//! subtree (see [`parse_fragment`]), so the page document is never mutated.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse a full HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse an HTML fragment into a standalone document.
///
/// The fragment ends up as the children of `<body>`; use [`body`] to get at
/// it and [`inner_html`] on that selection to serialize it back.
#[must_use]
pub fn parse_fragment(html: &str) -> Document {
    Document::from(format!("<html><head></head><body>{html}</body></html>"))
}

/// The `<body>` of a document.
#[inline]
#[must_use]
pub fn body(doc: &Document) -> Selection<'_> {
    doc.select("body")
}

// === Attribute Operations ===

/// Get an attribute of the first element in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Remove an attribute from every element in the selection.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Whether the first node's tag is one of `tags`.
#[must_use]
pub fn is_one_of(sel: &Selection, tags: &[&str]) -> bool {
    tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Text Content ===

/// Text content of all nodes in the selection and their descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Inner HTML of the first node in the selection.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.first().inner_html()
}

// === Tree Manipulation ===

/// Replace every node in the selection with parsed HTML.
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}

/// Replace every node in the selection with a text node.
pub fn replace_with_text(sel: &Selection, text: &str) {
    replace_with_html(sel, &escape_text(text));
}

/// Escape text so it can be re-parsed as HTML without creating markup.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
