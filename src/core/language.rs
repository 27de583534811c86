//! Language tag value type and project-wide language discovery.
//!
//! A language in a stringtable is nothing more than the tag name of a child
//! element under a `Key` (e.g. `<English>`, `<German>`). Rather than passing
//! raw strings around, the tag is modeled as a validated value type so that
//! malformed child elements cannot silently become new "languages".

use std::fmt;

use super::survey::ModuleKeys;

/// A validated language tag, taken from a child element name under a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse a raw element name into a language tag.
    ///
    /// Returns `None` for names that cannot plausibly identify a language:
    /// empty names or names containing anything outside ASCII alphanumerics,
    /// `-` and `_`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collect the universal set of languages appearing anywhere in the project.
///
/// Order is first-seen: by module, then by key, then by child order. Every
/// later stage of a run must consume this order unchanged so that table rows
/// and detail sections line up across the whole report.
pub fn discover_languages(modules: &[ModuleKeys]) -> Vec<LanguageTag> {
    let mut languages: Vec<LanguageTag> = Vec::new();

    for module in modules {
        for key in &module.keys {
            for tag in &key.languages {
                if !languages.contains(tag) {
                    languages.push(tag.clone());
                }
            }
        }
    }

    languages
}
