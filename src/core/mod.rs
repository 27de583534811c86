//! Core scan engine: stringtable parsing, language discovery and
//! completeness aggregation.

pub mod language;
pub mod provider;
pub mod stringtable;
pub mod survey;

pub use language::{LanguageTag, discover_languages};
pub use provider::{FsModuleProvider, ModuleProvider, ModuleSource};
pub use stringtable::{KeyEntry, ParseOutcome, UNKNOWN_KEY_IDENT, parse_stringtable};
pub use survey::{LanguageStats, MissingModule, ModuleKeys, Survey, scan};
