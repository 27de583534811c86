//! Report rendering.
//!
//! Rendering is pure string assembly over an already-aggregated
//! [`Survey`]; nothing here performs I/O of its own or can fail at
//! runtime. The markdown document is byte-stable across reruns on an
//! unchanged project, since downstream consumers diff it against a
//! previously published copy.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{LanguageStats, Survey};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Render the full markdown report: title, key total, the per-language
/// summary table, then one collapsible detail block per language that has
/// missing entries.
pub fn render_markdown(survey: &Survey) -> String {
    let mut out = String::new();

    out.push_str("**Translation Status Report**\n\n");
    out.push_str(&format!("_Total number of keys: {}_\n\n", survey.total_keys));

    out.push_str("| Language | Missing Entries | Modules Missing Keys | % Complete |\n");
    out.push_str("|----------|----------------:|--------------------|------------|\n");
    for stats in &survey.languages {
        let missing_count = stats.missing_entries();
        let entry_display = if missing_count > 0 {
            format!("**{} \u{26a0}\u{fe0f}**", missing_count)
        } else {
            "0".to_string()
        };
        let modules = if missing_count > 0 {
            stats
                .missing
                .iter()
                .map(|m| m.module.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "-".to_string()
        };
        out.push_str(&format!(
            "| {} | {} | {} | {}% |\n",
            stats.tag, entry_display, modules, stats.percent
        ));
    }

    for stats in &survey.languages {
        let missing_count = stats.missing_entries();
        if missing_count == 0 {
            continue;
        }
        out.push_str("\n<details>\n");
        out.push_str(&format!(
            "<summary>{} ({} missing)</summary>\n\n",
            stats.tag, missing_count
        ));
        for module in &stats.missing {
            out.push_str(&format!(
                "- **{}**: {}\n",
                module.module,
                module.keys.join(", ")
            ));
        }
        out.push_str("</details>\n");
    }

    out
}

/// Print the plain console report to stdout.
pub fn print_plain(survey: &Survey) {
    print_plain_to(survey, &mut io::stdout().lock());
}

/// Print the plain console report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_plain_to<W: Write>(survey: &Survey, writer: &mut W) {
    let _ = writeln!(writer, "#########################");
    let _ = writeln!(writer, "#  Stringtable  Audit   #");
    let _ = writeln!(writer, "#########################");
    let _ = writeln!(writer);

    let _ = writeln!(writer, "Languages present in the project:");
    let language_list = survey
        .languages
        .iter()
        .map(|stats| stats.tag.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        writer,
        "{}",
        if language_list.is_empty() {
            "(none)".to_string()
        } else {
            language_list
        }
    );
    let _ = writeln!(writer);

    let _ = writeln!(writer, "Total number of keys: {}", survey.total_keys);
    if survey.languages.is_empty() {
        return;
    }
    let _ = writeln!(writer);

    let tag_width = survey
        .languages
        .iter()
        .map(|stats| UnicodeWidthStr::width(stats.tag.as_str()))
        .max()
        .unwrap_or(0);

    for stats in &survey.languages {
        let _ = writeln!(writer, "{}", plain_language_line(survey, stats, tag_width));
    }
}

fn plain_language_line(survey: &Survey, stats: &LanguageStats, tag_width: usize) -> String {
    let padding = tag_width.saturating_sub(UnicodeWidthStr::width(stats.tag.as_str()));
    let counts = format!("{}/{}", stats.localized, survey.total_keys);
    let percent = format!("{}%", stats.percent);
    let percent = if stats.percent == 100 {
        percent.green()
    } else {
        percent.yellow()
    };

    let mut line = format!(
        "{}{:padding$}  {:>7}  {:>4}",
        stats.tag,
        "",
        counts,
        percent,
        padding = padding
    );

    let missing_modules = stats.missing.len();
    if missing_modules > 0 {
        line.push_str(&format!(
            "  ({} missing in {} {})",
            stats.missing_entries(),
            missing_modules,
            if missing_modules == 1 {
                "module"
            } else {
                "modules"
            }
        ));
    }
    line
}
