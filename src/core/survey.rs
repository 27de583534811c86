//! Cross-module completeness aggregation.
//!
//! One pass over the parsed modules establishes the universal language set;
//! a second pass tallies, per module and language, how many keys are
//! translated and which ones are not. The result is a [`Survey`], the sole
//! input of the report renderers.

use anyhow::Result;

use super::language::{LanguageTag, discover_languages};
use super::provider::ModuleProvider;
use super::stringtable::{KeyEntry, ParseOutcome, parse_stringtable};

/// A module together with its parsed keys.
#[derive(Debug, Clone)]
pub struct ModuleKeys {
    pub name: String,
    pub keys: Vec<KeyEntry>,
}

/// A module with at least one key missing for some language, and the
/// identifiers of those keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingModule {
    pub module: String,
    pub keys: Vec<String>,
}

/// Per-language tallies across the whole project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub tag: LanguageTag,
    /// Keys translated into this language, summed over all counted modules.
    pub localized: usize,
    /// Completion percent, `round(100 * localized / total_keys)`.
    pub percent: u8,
    /// Modules with missing keys, in module scan order. A fully localized
    /// module does not appear here.
    pub missing: Vec<MissingModule>,
}

impl LanguageStats {
    /// Total number of missing (module, key) entries for this language.
    pub fn missing_entries(&self) -> usize {
        self.missing.iter().map(|m| m.keys.len()).sum()
    }
}

/// Aggregated completeness data for one scan.
#[derive(Debug, Clone)]
pub struct Survey {
    /// Keys summed over all modules that contributed at least one key.
    pub total_keys: usize,
    /// Per-language tallies, in language discovery order.
    pub languages: Vec<LanguageStats>,
    /// Number of module directories visited, counted or not.
    pub modules_visited: usize,
}

/// Completion percent with round-half-up integer arithmetic.
///
/// A project with nothing to translate counts as fully translated, which
/// also keeps the division well-defined.
fn percent_complete(localized: usize, total_keys: usize) -> u8 {
    if total_keys == 0 {
        return 100;
    }
    ((200 * localized as u64 + total_keys as u64) / (2 * total_keys as u64)) as u8
}

/// Parse every module the provider yields, dropping those whose table is
/// absent or malformed.
fn parse_modules(provider: &dyn ModuleProvider) -> Result<(Vec<ModuleKeys>, usize)> {
    let sources = provider.modules()?;
    let visited = sources.len();

    let modules = sources
        .into_iter()
        .filter_map(|source| {
            let content = source.table?;
            match parse_stringtable(&content) {
                ParseOutcome::Parsed(keys) => Some(ModuleKeys {
                    name: source.name,
                    keys,
                }),
                ParseOutcome::Absent => None,
            }
        })
        .collect();

    Ok((modules, visited))
}

/// Run the full scan: enumerate, parse, discover languages, aggregate.
pub fn scan(provider: &dyn ModuleProvider) -> Result<Survey> {
    let (modules, modules_visited) = parse_modules(provider)?;
    let languages = discover_languages(&modules);

    let total_keys: usize = modules.iter().map(|m| m.keys.len()).sum();

    let languages = languages
        .into_iter()
        .map(|tag| {
            let mut localized = 0;
            let mut missing: Vec<MissingModule> = Vec::new();

            for module in &modules {
                // A module with no keys has nothing to report.
                if module.keys.is_empty() {
                    continue;
                }

                let module_localized = module
                    .keys
                    .iter()
                    .filter(|key| key.has_language(&tag))
                    .count();
                localized += module_localized;

                if module_localized < module.keys.len() {
                    missing.push(MissingModule {
                        module: module.name.clone(),
                        keys: module
                            .keys
                            .iter()
                            .filter(|key| !key.has_language(&tag))
                            .map(|key| key.ident.clone())
                            .collect(),
                    });
                }
            }

            LanguageStats {
                percent: percent_complete(localized, total_keys),
                tag,
                localized,
                missing,
            }
        })
        .collect();

    Ok(Survey {
        total_keys,
        languages,
        modules_visited,
    })
}
