use anyhow::{Ok, Result};

use super::super::args::ReportCommand;
use super::{CommandResult, CommandSummary, ReportSummary, helper::resolve_settings};

use crate::core::{FsModuleProvider, scan};

pub fn report(cmd: ReportCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let settings = resolve_settings(&args.common)?;

    let provider = FsModuleProvider::new(&settings.modules_root, settings.table_file.as_str())
        .with_ignores(settings.config.ignore_patterns()?);
    let survey = scan(&provider)?;

    Ok(CommandResult {
        summary: CommandSummary::Report(ReportSummary {
            survey,
            markdown: args.markdown,
        }),
    })
}
