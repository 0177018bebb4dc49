//! RSS 2.0 document assembly and serialization.
//!
//! [`build_feed`] turns extracted items into the channel document;
//! [`render_xml`] serializes it. Both are pure: the refresh cycle builds,
//! the HTTP surface renders, and neither knows about the other.

use crate::models::{Channel, Item, NewsItem, Rss};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::error::Error;

/// Channel metadata for the published feed.
pub const CHANNEL_TITLE: &str = "Hytale News";
pub const CHANNEL_LINK: &str = "https://hytale.com/news";
pub const CHANNEL_DESCRIPTION: &str = "Latest news from Hytale";

/// Assemble an RSS document from channel metadata and extracted items.
///
/// Item order is preserved as given; no filtering happens here, since the
/// extractor has already applied the title gate.
pub fn build_feed(title: &str, link: &str, description: &str, items: Vec<NewsItem>) -> Rss {
    Rss {
        version: "2.0".to_string(),
        channel: Channel {
            title: title.to_string(),
            link: link.to_string(),
            description: description.to_string(),
            items: items
                .into_iter()
                .map(|item| Item {
                    title: item.title,
                    link: item.link,
                    description: item.description,
                    pub_date: item.date,
                })
                .collect(),
        },
    }
}

/// Serialize a feed document to the wire format served on `/feed.xml`:
/// the XML declaration followed by the two-space-indented RSS document.
///
/// Text content is XML-escaped as it is written.
pub fn render_xml(feed: &Rss) -> Result<String, Box<dyn Error>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", feed.version.as_str()));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &feed.channel.title)?;
    write_text_element(&mut writer, "link", &feed.channel.link)?;
    write_text_element(&mut writer, "description", &feed.channel.description)?;

    for item in &feed.channel.items {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        write_text_element(&mut writer, "title", &item.title)?;
        write_text_element(&mut writer, "link", &item.link)?;
        write_text_element(&mut writer, "description", &item.description)?;
        write_text_element(&mut writer, "pubDate", &item.pub_date)?;
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
