use quick_xml::events::Event;
use quick_xml::Reader;

use super::NewsFeedError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub guid: String,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Link,
    Description,
    PubDate,
    Guid,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"description" => Some(Field::Description),
            b"pubDate" => Some(Field::PubDate),
            b"guid" => Some(Field::Guid),
            _ => None,
        }
    }
}

impl RawEntry {
    fn push(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::Description => &mut self.description,
            Field::PubDate => &mut self.pub_date,
            Field::Guid => &mut self.guid,
        };
        slot.push_str(text);
    }
}

/// Reads every `item` element of a feed document, in document order.
/// Only unprefixed direct children of `item` are picked up.
pub fn parse_entries(xml: &str) -> Result<Vec<RawEntry>, NewsFeedError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut current: Option<(RawEntry, usize)> = None;
    let mut field: Option<Field> = None;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                saw_root = true;
                let name = e.name();
                match current.as_ref().map(|(_, item_depth)| *item_depth) {
                    None if name.as_ref() == b"item" => {
                        current = Some((RawEntry::default(), depth));
                    }
                    Some(item_depth) if depth == item_depth + 1 => {
                        field = Field::from_tag(name.as_ref());
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                if let Some(item_depth) = current.as_ref().map(|(_, item_depth)| *item_depth) {
                    if depth == item_depth && e.name().as_ref() == b"item" {
                        if let Some((entry, _)) = current.take() {
                            entries.push(entry);
                        }
                    } else if depth == item_depth + 1 {
                        field = None;
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Empty(_)) => saw_root = true,
            Ok(Event::Text(e)) => {
                if let (Some((entry, _)), Some(f)) = (current.as_mut(), field) {
                    match e.unescape() {
                        Ok(text) => entry.push(f, &text),
                        // Feeds often carry HTML entities XML does not know.
                        Err(_) => entry.push(f, &String::from_utf8_lossy(&e)),
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some((entry, _)), Some(f)) = (current.as_mut(), field) {
                    entry.push(f, &String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(NewsFeedError::Parse(err.to_string())),
        }
    }

    if depth != 0 {
        return Err(NewsFeedError::Parse(
            "document ended with unclosed elements".to_string(),
        ));
    }
    if !saw_root {
        return Err(NewsFeedError::Parse("no root element".to_string()));
    }

    log::debug!("parsed {} feed items", entries.len());
    Ok(entries)
}
