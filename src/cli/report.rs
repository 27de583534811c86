//! Command output printing.
//!
//! Separate from core logic so locaudit can be used as a library; all
//! rendering of the survey itself lives in [`crate::report`].

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ReportSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::report::{SUCCESS_MARK, print_plain, render_markdown};

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Report(summary) => print_report(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_report(summary: &ReportSummary, verbose: bool) {
    if summary.markdown {
        print!("{}", render_markdown(&summary.survey));
    } else {
        print_plain(&summary.survey);
    }

    if verbose {
        eprintln!(
            "{} scanned {} module director{}",
            "info:".bold().cyan(),
            summary.survey.modules_visited,
            if summary.survey.modules_visited == 1 {
                "y"
            } else {
                "ies"
            }
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
