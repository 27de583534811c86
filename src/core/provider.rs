//! Module enumeration.
//!
//! The scan does not walk the filesystem directly; it consumes a
//! [`ModuleProvider`], so the aggregator and renderer can be exercised in
//! tests against an in-memory fake. The production implementation lists one
//! directory level under the modules root and reads each module's
//! stringtable, if any.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

/// One module as seen by the scan: its name and, when present and readable,
/// the raw content of its stringtable file.
#[derive(Debug, Clone)]
pub struct ModuleSource {
    pub name: String,
    pub table: Option<String>,
}

/// Source of modules for a scan.
pub trait ModuleProvider {
    /// Enumerate all modules, in the order the scan should visit them.
    ///
    /// Failing to enumerate at all (e.g. the root does not exist) is fatal;
    /// a module without a readable table is not.
    fn modules(&self) -> Result<Vec<ModuleSource>>;
}

/// Filesystem-backed provider: every subdirectory of the modules root is a
/// module. Hidden directories and names matching an ignore pattern are
/// skipped. Names are sorted so repeated scans of an unchanged project
/// produce identical reports.
pub struct FsModuleProvider {
    root: PathBuf,
    table_file: String,
    ignores: Vec<Pattern>,
}

impl FsModuleProvider {
    pub fn new(root: impl Into<PathBuf>, table_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            table_file: table_file.into(),
            ignores: Vec::new(),
        }
    }

    pub fn with_ignores(mut self, ignores: Vec<Pattern>) -> Self {
        self.ignores = ignores;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignores.iter().any(|pattern| pattern.matches(name))
    }
}

impl ModuleProvider for FsModuleProvider {
    fn modules(&self) -> Result<Vec<ModuleSource>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to list modules root: {}", self.root.display()))?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to list modules root: {}", self.root.display()))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if self.is_ignored(&name) {
                continue;
            }
            names.push(name);
        }
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| {
                let table = fs::read_to_string(self.root.join(&name).join(&self.table_file)).ok();
                ModuleSource { name, table }
            })
            .collect())
    }
}
