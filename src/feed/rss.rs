//! RSS 2.0 rendering.

use super::{xml_escape, Feed, FeedItem};

/// Render RSS 2.0 XML.
pub(super) fn render(feed: &Feed) -> String {
    let title = xml_escape(&feed.title);
    let link = xml_escape(&feed.link);
    let description = xml_escape(&feed.description);
    let pub_date = feed.created.to_rfc2822();
    let last_build = feed.updated.to_rfc2822();

    let mut channel_extra = String::new();
    if let Some(author) = &feed.author {
        channel_extra.push_str(&format!("\n    <managingEditor>{}</managingEditor>", xml_escape(author)));
    }
    if let Some(image) = &feed.image_url {
        channel_extra.push_str(&format!(
            "\n    <image>\n      <url>{}</url>\n      <title>{title}</title>\n      <link>{link}</link>\n    </image>",
            xml_escape(image)
        ));
    }

    let items: String = feed.items.iter().map(render_item).collect::<Vec<_>>().join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>{title}</title>
    <link>{link}</link>
    <description>{description}</description>
    <pubDate>{pub_date}</pubDate>
    <lastBuildDate>{last_build}</lastBuildDate>{channel_extra}
{items}
  </channel>
</rss>"#
    )
}

fn render_item(item: &FeedItem) -> String {
    let title = xml_escape(&item.title);
    let link = xml_escape(&item.link);
    let id = xml_escape(&item.id);
    let description = xml_escape(&item.description);
    let author = xml_escape(&item.author);
    let pub_date = item.created.to_rfc2822();

    let enclosure = item
        .enclosure
        .as_ref()
        .map(|e| {
            format!(
                "\n      <enclosure url=\"{}\" length=\"{}\" type=\"{}\"/>",
                xml_escape(&e.url),
                e.length,
                xml_escape(&e.mime_type)
            )
        })
        .unwrap_or_default();

    format!(
        r#"    <item>
      <title>{title}</title>
      <link>{link}</link>
      <description>{description}</description>
      <author>{author}</author>
      <guid isPermaLink="false">{id}</guid>
      <pubDate>{pub_date}</pubDate>{enclosure}
    </item>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Enclosure;
    use chrono::DateTime;

    fn feed() -> Feed {
        let created = DateTime::parse_from_rfc3339("2023-12-15T16:29:00+00:00").unwrap();
        Feed {
            title: "News & Views".to_string(),
            link: "https://t.me/s/news".to_string(),
            description: "About <b>news</b>".to_string(),
            author: Some("News & Views".to_string()),
            image_url: Some("https://cdn/logo.jpg".to_string()),
            created,
            updated: created,
            items: vec![FeedItem {
                id: "abc".to_string(),
                title: "Hello".to_string(),
                link: "https://t.me/s/news/1".to_string(),
                description: "<p>Hello</p>".to_string(),
                author: "News & Views".to_string(),
                created,
                enclosure: Some(Enclosure {
                    url: "https://cdn/1.jpg".to_string(),
                    length: 0,
                    mime_type: "image/jpeg".to_string(),
                }),
            }],
        }
    }

    #[test]
    fn test_render_rss() {
        let rss = render(&feed());

        assert!(rss.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(rss.contains("<rss version=\"2.0\""));
        assert!(rss.contains("<title>News &amp; Views</title>"));
        assert!(rss.contains("<description>About &lt;b&gt;news&lt;/b&gt;</description>"));
        assert!(rss.contains("<url>https://cdn/logo.jpg</url>"));
        assert!(rss.contains("<description>&lt;p&gt;Hello&lt;/p&gt;</description>"));
        assert!(rss.contains("<guid isPermaLink=\"false\">abc</guid>"));
        assert!(rss.contains("<pubDate>Fri, 15 Dec 2023 16:29:00 +0000</pubDate>"));
        assert!(rss.contains("<enclosure url=\"https://cdn/1.jpg\" length=\"0\" type=\"image/jpeg\"/>"));
    }

    #[test]
    fn test_render_rss_empty() {
        let mut feed = feed();
        feed.items.clear();
        feed.author = None;
        feed.image_url = None;

        let rss = render(&feed);
        assert!(!rss.contains("<item>"));
        assert!(!rss.contains("<image>"));
        assert!(!rss.contains("<managingEditor>"));
    }
}
