//! Stringtable XML parsing.
//!
//! A module's `stringtable.xml` holds repeated `Key` elements, nested at any
//! depth under container elements (`Project`, `Package`, ...). Each key
//! carries an identifying attribute and zero or more child elements whose tag
//! name is a language; the presence of such a child, regardless of its text,
//! means the key is translated into that language.
//!
//! Parsing is deliberately forgiving: a module is allowed to ship no
//! stringtable at all, so a missing or malformed file must look exactly like
//! "this module contributes nothing". That contract is expressed as a typed
//! [`ParseOutcome`] instead of an error, so callers can still tell
//! "unparsable" apart from "parsed with zero keys" where it matters.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::language::LanguageTag;

/// Placeholder identifier for keys carrying no usable identifying attribute.
pub const UNKNOWN_KEY_IDENT: &str = "(unknown)";

/// One `Key` element: its identifier and the languages it is translated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    /// Identifying name, from the `name` attribute, falling back to `ID`,
    /// then `id`, then [`UNKNOWN_KEY_IDENT`].
    pub ident: String,
    /// Language tags present as direct children, in document order, deduped.
    pub languages: Vec<LanguageTag>,
}

impl KeyEntry {
    pub fn has_language(&self, tag: &LanguageTag) -> bool {
        self.languages.contains(tag)
    }
}

/// Result of parsing one module's stringtable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The document parsed; it may still contain zero keys.
    Parsed(Vec<KeyEntry>),
    /// The file was missing, unreadable or malformed. No partial result.
    Absent,
}

#[derive(Default)]
struct PendingKey {
    name: Option<String>,
    secondary: Option<String>,
    languages: Vec<LanguageTag>,
}

impl PendingKey {
    fn from_attributes(element: &BytesStart<'_>) -> Self {
        let mut key = Self::default();
        for attr in element.attributes().flatten() {
            let value = match attr.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) => continue,
            };
            match attr.key.as_ref() {
                b"name" => key.name = Some(value),
                b"ID" => key.secondary = Some(value),
                b"id" if key.secondary.is_none() => key.secondary = Some(value),
                _ => {}
            }
        }
        key
    }

    fn push_language(&mut self, element: &BytesStart<'_>) {
        let name = element.name();
        let Ok(raw) = std::str::from_utf8(name.as_ref()) else {
            return;
        };
        if let Some(tag) = LanguageTag::parse(raw) {
            if !self.languages.contains(&tag) {
                self.languages.push(tag);
            }
        }
    }

    fn finish(self) -> KeyEntry {
        let ident = self
            .name
            .or(self.secondary)
            .filter(|ident| !ident.is_empty())
            .unwrap_or_else(|| UNKNOWN_KEY_IDENT.to_string());
        KeyEntry {
            ident,
            languages: self.languages,
        }
    }
}

/// Parse a stringtable document into its keys.
///
/// Any XML error yields [`ParseOutcome::Absent`] with no partial result.
pub fn parse_stringtable(content: &str) -> ParseOutcome {
    let mut reader = Reader::from_str(content);
    // Mismatched closing tags must fail the whole document, not slip through.
    reader.config_mut().check_end_names = true;

    let mut keys: Vec<KeyEntry> = Vec::new();
    let mut current: Option<PendingKey> = None;
    // Element depth below the open Key; 0 means "direct child of the Key".
    let mut depth_in_key = 0usize;
    // Unclosed elements at EOF mean a truncated document, which must not
    // yield a partial result.
    let mut open_depth = 0usize;

    loop {
        match reader.read_event() {
            Err(_) => return ParseOutcome::Absent,
            Ok(Event::Eof) => {
                if open_depth != 0 {
                    return ParseOutcome::Absent;
                }
                break;
            }
            Ok(Event::Start(element)) => {
                open_depth += 1;
                if let Some(pending) = current.as_mut() {
                    if depth_in_key == 0 {
                        pending.push_language(&element);
                    }
                    depth_in_key += 1;
                } else if element.name().as_ref() == b"Key" {
                    current = Some(PendingKey::from_attributes(&element));
                    depth_in_key = 0;
                }
            }
            Ok(Event::Empty(element)) => {
                if let Some(pending) = current.as_mut() {
                    if depth_in_key == 0 {
                        pending.push_language(&element);
                    }
                } else if element.name().as_ref() == b"Key" {
                    keys.push(PendingKey::from_attributes(&element).finish());
                }
            }
            Ok(Event::End(_)) => {
                open_depth = open_depth.saturating_sub(1);
                if current.is_some() {
                    if depth_in_key == 0 {
                        if let Some(pending) = current.take() {
                            keys.push(pending.finish());
                        }
                    } else {
                        depth_in_key -= 1;
                    }
                }
            }
            Ok(_) => {}
        }
    }

    ParseOutcome::Parsed(keys)
}
