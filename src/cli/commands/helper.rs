use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};

/// Effective settings for a scan, after merging CLI arguments over the
/// config file over built-in defaults.
pub struct ResolvedSettings {
    pub modules_root: PathBuf,
    pub table_file: String,
    pub config: Config,
    pub config_from_file: bool,
}

pub fn resolve_settings(common: &CommonArgs) -> Result<ResolvedSettings> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;

    let modules_root = common
        .modules_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&loaded.config.modules_root));
    let table_file = common
        .table_file
        .clone()
        .unwrap_or_else(|| loaded.config.table_file.clone());

    if common.verbose {
        let source = if loaded.from_file {
            "config file"
        } else {
            "built-in defaults"
        };
        eprintln!(
            "{} scanning {} (settings from {})",
            "info:".bold().cyan(),
            modules_root.display(),
            source
        );
    }

    Ok(ResolvedSettings {
        modules_root,
        table_file,
        config_from_file: loaded.from_file,
        config: loaded.config,
    })
}
