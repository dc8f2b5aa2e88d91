use std::fs;
use std::path::Path;

use tg_preview_feed::extract_page;
use tg_preview_feed::feed::{self, Feed, FeedFormat};

const PAGE_HTML: &str = r#"
<html><body>
<div class="tgme_page_photo_image"><img src="https://cdn/logo.jpg"></div>
<div class="tgme_channel_info_header_title">Test &amp; Channel</div>
<div class="tgme_channel_info_header_username"><a href="https://t.me/test">@test</a></div>
<div class="tgme_channel_info_description">Channel <b>about</b> things</div>
<div class="tgme_widget_message_wrap"><div class="tgme_widget_message" data-post="test/1">
  <div class="tgme_widget_message_text">Older post</div>
  <a class="tgme_widget_message_date"><time datetime="2024-01-01T10:00:00+00:00"></time></a>
</div></div>
<div class="tgme_widget_message_wrap"><div class="tgme_widget_message" data-post="test/2">
  <a class="tgme_widget_message_photo_wrap" style="background-image:url('https://cdn/2.jpg')"></a>
  <div class="tgme_widget_message_text">Newer post</div>
  <a class="tgme_widget_message_date"><time datetime="2024-01-02T10:00:00+00:00"></time></a>
</div></div>
</body></html>"#;

fn sample_feed() -> Feed {
    Feed::from_page(&extract_page(PAGE_HTML).expect("extraction failed"))
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn page_to_feed() {
    let feed = sample_feed();

    assert_eq!(feed.title, "Test & Channel");
    assert_eq!(feed.link, "https://t.me/test");
    assert_eq!(feed.image_url.as_deref(), Some("https://cdn/logo.jpg"));

    let titles: Vec<&str> = feed.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Newer post", "Older post"]);
    assert_eq!(feed.items[0].link, "https://t.me/s/test/2");
    assert_eq!(feed.items[0].enclosure.as_ref().map(|e| e.url.as_str()), Some("https://cdn/2.jpg"));
    assert_eq!(feed.items[1].enclosure, None);
}

#[test]
fn rendered_documents() {
    let feed = sample_feed();

    let rss = feed::render(&feed, FeedFormat::Rss).expect("rss");
    assert!(rss.contains("<title>Test &amp; Channel</title>"));
    assert!(rss.contains("<description>&lt;p&gt;Newer post&lt;/p&gt;</description>"));
    assert!(rss.find("Newer post").unwrap() < rss.find("Older post").unwrap());

    let atom = feed::render(&feed, FeedFormat::Atom).expect("atom");
    assert!(atom.contains("<id>https://t.me/s/test/2</id>"));
    assert!(atom.contains("<updated>2024-01-02T10:00:00+00:00</updated>"));

    let json: serde_json::Value =
        serde_json::from_str(&feed::render(&feed, FeedFormat::Json).expect("json")).expect("valid json");
    assert_eq!(json["title"], "Test & Channel");
    assert_eq!(json["items"][0]["content_html"], "<p>Newer post</p>");
    assert_eq!(json["items"][1]["url"], "https://t.me/s/test/1");
}

#[test]
fn merged_feed_interleaves_channels() {
    let other = r#"<div class="tgme_channel_info_header_title">Other</div>
<div class="tgme_channel_info_header_username"><a href="https://t.me/other">@other</a></div>
<div class="tgme_widget_message_wrap"><div class="tgme_widget_message" data-post="other/9">
  <div class="tgme_widget_message_text">Middle post</div>
  <a class="tgme_widget_message_date"><time datetime="2024-01-01T12:00:00+00:00"></time></a>
</div></div>"#;
    let other = Feed::from_page(&extract_page(other).expect("extraction failed"));

    let merged = feed::merge(vec![sample_feed(), other]);
    assert_eq!(merged.description, "Channels: https://t.me/test, https://t.me/other");

    let titles: Vec<&str> = merged.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Newer post", "Middle post", "Older post"]);
    let authors: Vec<&str> = merged.items.iter().map(|i| i.author.as_str()).collect();
    assert_eq!(authors, ["Test & Channel", "Other", "Test & Channel"]);
}

#[test]
fn save_to_dir_writes_requested_formats() {
    let feed = sample_feed();
    let cases: [(&[&str], &[&str]); 5] = [
        (&["rss"], &["rss.xml"]),
        (&["rss", "atom"], &["atom.xml", "rss.xml"]),
        (&["rss", "atom", "json"], &["atom.xml", "feed.json", "rss.xml"]),
        (&["wrong"], &[]),
        (&[], &[]),
    ];

    for (formats, expected) in cases {
        let existing = tempfile::tempdir().expect("tempdir");
        let missing = existing.path().join("new").join("nested");

        for dir in [existing.path(), missing.as_path()] {
            let written = feed::save_to_dir(&feed, dir, formats).expect("save failed");
            assert_eq!(written.len(), expected.len());
            assert!(dir.is_dir());

            assert_eq!(file_names(dir), expected, "formats {formats:?} in {}", dir.display());
        }
    }
}

#[test]
fn saved_rss_matches_render() {
    let feed = sample_feed();
    let dir = tempfile::tempdir().expect("tempdir");

    feed::save_to_dir(&feed, dir.path(), &["rss"]).expect("save failed");
    let saved = fs::read_to_string(dir.path().join("rss.xml")).expect("read rss");
    assert_eq!(saved, feed::render(&feed, FeedFormat::Rss).expect("rss"));
}
