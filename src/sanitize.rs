//! HTML sanitizer for post bodies and descriptions.
//!
//! Three passes, each local and non-overlapping:
//!
//! - **Emoji unwrap**: `<i class="emoji">` and `<tg-emoji>` widgets are
//!   replaced by their visible text.
//! - **Link stripping**: `target`, `rel` and `onclick` are removed from every
//!   anchor; `href` and content are kept.
//! - **Tag allow-list** (post bodies only): every element other than
//!   `a`, `i`, `b`, `br` is replaced by its text content, outermost first.
//!   Text is never dropped.
//!
//! All passes run on a re-parsed copy of the input, never on the page itself,
//! and the whole pipeline is idempotent.

use dom_query::Selection;

use crate::dom;
use crate::selector::{ALLOWED_TAGS, EMOJI, LINK_TRACKING_ATTRS};

/// Whether the tag allow-list runs after emoji unwrap and link stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter {
    /// Keep all markup (channel and link-preview descriptions).
    KeepAll,
    /// Keep only `a`, `i`, `b`, `br` (post bodies).
    AllowList,
}

/// Sanitize the inner HTML of the first node in `sel` and serialize it.
///
/// The page document is untouched.
#[must_use]
pub fn sanitize(sel: &Selection, filter: TagFilter) -> String {
    sanitize_html(&dom::inner_html(sel), filter)
}

/// Sanitize an HTML fragment and serialize it.
#[must_use]
pub fn sanitize_html(html: &str, filter: TagFilter) -> String {
    let copy = dom::parse_fragment(html);
    let root = dom::body(&copy);

    unwrap_emoji(&root);
    strip_link_attributes(&root);
    if filter == TagFilter::AllowList {
        remove_unsafe_tags(&root);
    }

    dom::inner_html(&root).to_string()
}

/// Replace every emoji widget under `root` with its text.
pub fn unwrap_emoji(root: &Selection) {
    // Innermost first, so no replacement touches an already detached node.
    let widgets = root.select(EMOJI);
    for node in widgets.nodes().iter().rev() {
        let widget = Selection::from(*node);
        let text = dom::text_content(&widget);
        dom::replace_with_text(&widget, &text);
    }
}

/// Remove tracking and behaviour attributes from every anchor under `root`.
pub fn strip_link_attributes(root: &Selection) {
    let links = root.select("a");
    for attr in LINK_TRACKING_ATTRS {
        dom::remove_attribute(&links, attr);
    }
}

/// Collapse every element under `root` whose tag is not allow-listed into its
/// text content.
///
/// Outermost elements go first, so allowed tags nested inside a disallowed
/// container are flattened together with it.
pub fn remove_unsafe_tags(root: &Selection) {
    // Each collapse detaches the whole subtree, so look the next one up afresh.
    while let Some(element) = first_unsafe_element(root) {
        let text = dom::text_content(&element);
        if text.is_empty() {
            element.remove();
        } else {
            dom::replace_with_text(&element, &text);
        }
    }
}

/// First element under `root`, in document order, outside the allow-list.
fn first_unsafe_element<'a>(root: &Selection<'a>) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|element| !dom::is_one_of(element, ALLOWED_TAGS))
}
