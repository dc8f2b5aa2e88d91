//! Atom 1.0 rendering.

use super::{xml_escape, Feed, FeedItem};

/// Render Atom 1.0 XML.
pub(super) fn render(feed: &Feed) -> String {
    let title = xml_escape(&feed.title);
    let link = xml_escape(&feed.link);
    let subtitle = xml_escape(&feed.description);
    let updated = feed.updated.to_rfc3339();

    let author = feed
        .author
        .as_ref()
        .map(|name| format!("\n  <author><name>{}</name></author>", xml_escape(name)))
        .unwrap_or_default();
    let logo = feed
        .image_url
        .as_ref()
        .map(|url| format!("\n  <logo>{}</logo>", xml_escape(url)))
        .unwrap_or_default();

    let entries: String = feed.items.iter().map(render_entry).collect::<Vec<_>>().join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>{title}</title>
  <id>{link}</id>
  <link href="{link}" rel="alternate" type="text/html"/>
  <updated>{updated}</updated>
  <subtitle type="html">{subtitle}</subtitle>{author}{logo}
{entries}
</feed>"#
    )
}

/// Entry ids use the post link when there is one, the bare item id otherwise.
fn render_entry(item: &FeedItem) -> String {
    let title = xml_escape(&item.title);
    let link = xml_escape(&item.link);
    let id = if item.link.is_empty() {
        xml_escape(&item.id)
    } else {
        link.clone()
    };
    let content = xml_escape(&item.description);
    let author = xml_escape(&item.author);
    let updated = item.created.to_rfc3339();

    let enclosure = item
        .enclosure
        .as_ref()
        .map(|e| {
            format!(
                "\n    <link href=\"{}\" rel=\"enclosure\" type=\"{}\" length=\"{}\"/>",
                xml_escape(&e.url),
                xml_escape(&e.mime_type),
                e.length
            )
        })
        .unwrap_or_default();

    format!(
        r#"  <entry>
    <title>{title}</title>
    <link href="{link}" rel="alternate" type="text/html"/>
    <id>{id}</id>
    <updated>{updated}</updated>
    <published>{updated}</published>
    <author><name>{author}</name></author>
    <content type="html">{content}</content>{enclosure}
  </entry>"#
    )
}
