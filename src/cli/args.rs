//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Locaudit
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `report`: Scan all modules and render the translation status report
//! - `init`: Initialize a locaudit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Report(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Modules root directory (overrides config file)
    #[arg(long, env = "LOCAUDIT_MODULES_ROOT")]
    pub modules_root: Option<PathBuf>,

    /// Stringtable file name looked up in each module (overrides config file)
    #[arg(long)]
    pub table_file: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Emit a markdown document instead of the plain console report
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub args: ReportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation completeness per language across all modules
    Report(ReportCommand),
    /// Initialize a new .locauditrc.json configuration file
    Init,
}
