/// Main entry point for the locaudit CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments.
use std::{fs, path::Path};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary},
    commands::report::report,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Report(cmd)) => report(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
