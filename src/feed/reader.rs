// src/feed/reader.rs

use crate::errors::FeedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use tracing::debug;

/// Root element of a multi-listing feed.
pub const CONTAINER_TAG: &str = "propertyList";

/// Tags that are a listing segment on their own.
pub const LISTING_TAGS: [&str; 4] = ["residential", "rental", "land", "rural"];

/// XML 1.0 `Char` production. Rust `char` already excludes surrogates.
fn is_legal_xml_char(c: char) -> bool {
    matches!(c, '\u{9}' | '\u{A}' | '\u{D}')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// Checks every character. With `sanitize` the illegal ones are stripped,
/// otherwise the first one fails the document with its 1-based line and
/// column.
pub fn check_characters(xml: &str, sanitize: bool) -> Result<Cow<'_, str>, FeedError> {
    let mut line = 1;
    let mut column = 0;

    for c in xml.chars() {
        if c == '\n' {
            line += 1;
            column = 0;
            continue;
        }
        column += 1;

        if is_legal_xml_char(c) {
            continue;
        }

        if !sanitize {
            return Err(FeedError::InvalidCharacter {
                code: c as u32,
                line,
                column,
            });
        }

        let cleaned: String = xml.chars().filter(|c| is_legal_xml_char(*c)).collect();
        debug!(
            removed = xml.len() - cleaned.len(),
            "Stripped illegal XML characters"
        );
        return Ok(Cow::Owned(cleaned));
    }

    Ok(Cow::Borrowed(xml))
}

/// One listing-sized element: its tag name and its exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tag: String,
    pub xml: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Container,
    Segment,
}

fn malformed(reader: &Reader<&[u8]>, message: impl std::fmt::Display) -> FeedError {
    FeedError::Malformed {
        position: reader.buffer_position() as usize,
        message: message.to_string(),
    }
}

fn tag_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn resolve_root(name: &str) -> Result<Root, FeedError> {
    if name == CONTAINER_TAG {
        Ok(Root::Container)
    } else if LISTING_TAGS.contains(&name) {
        Ok(Root::Segment)
    } else {
        Err(FeedError::UnrecognizedRoot(name.to_string()))
    }
}

/// Offset of the `<` that opens the tag ending at `tag_end`. Attribute
/// values cannot contain `<`, so the last one before the end is it.
fn tag_start(xml: &str, tag_end: usize) -> usize {
    xml[..tag_end].rfind('<').unwrap_or(0)
}

/// Resolves the document root and cuts out every listing-sized element.
///
/// A `propertyList` root yields each of its direct children, whatever their
/// tag; category is resolved per fragment later. A root that is itself a
/// listing tag yields the whole element as one fragment. Any other root is
/// fatal.
pub fn split_fragments(xml: &str) -> Result<Vec<Fragment>, FeedError> {
    let mut reader = Reader::from_str(xml);
    let mut fragments = Vec::new();

    let mut root: Option<Root> = None;
    let mut depth = 0usize;
    // start offset and tag of the element currently being cut out
    let mut open: Option<(usize, String)> = None;

    loop {
        let event = reader.read_event().map_err(|e| malformed(&reader, e))?;
        let position = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                let name = tag_name(&e);
                if depth == 0 {
                    if root.is_some() {
                        return Err(malformed(&reader, "more than one root element"));
                    }
                    let resolved = resolve_root(&name)?;
                    if resolved == Root::Segment {
                        open = Some((tag_start(xml, position), name));
                    }
                    root = Some(resolved);
                } else if depth == 1 && root == Some(Root::Container) {
                    open = Some((tag_start(xml, position), name));
                }
                depth += 1;
            }
            Event::Empty(e) => {
                let name = tag_name(&e);
                if depth == 0 {
                    if root.is_some() {
                        return Err(malformed(&reader, "more than one root element"));
                    }
                    let resolved = resolve_root(&name)?;
                    if resolved == Root::Segment {
                        fragments.push(Fragment {
                            tag: name,
                            xml: xml[tag_start(xml, position)..position].to_string(),
                        });
                    }
                    root = Some(resolved);
                } else if depth == 1 && root == Some(Root::Container) {
                    fragments.push(Fragment {
                        tag: name,
                        xml: xml[tag_start(xml, position)..position].to_string(),
                    });
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                let closes_fragment = match root {
                    Some(Root::Container) => depth == 1,
                    Some(Root::Segment) => depth == 0,
                    None => false,
                };
                if closes_fragment {
                    if let Some((start, tag)) = open.take() {
                        fragments.push(Fragment {
                            tag,
                            xml: xml[start..position].to_string(),
                        });
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if root.is_none() {
        return Err(FeedError::MissingRoot);
    }

    debug!(fragments = fragments.len(), "Split feed into fragments");
    Ok(fragments)
}
