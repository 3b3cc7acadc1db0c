//! Result formatting and printing for chronicle commands.
//!
//! Separate from command logic so output can be redirected in tests.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CleanSummary, CommandResult, CommandSummary, InitSummary, ReportSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout and its warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_warnings_to(&result.warnings, &mut io::stderr().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Report(summary) => print_report_summary(summary, verbose, writer),
        CommandSummary::Clean(summary) => print_clean_summary(summary, writer),
        CommandSummary::Init(summary) => print_init_summary(summary, writer),
    }
}

pub fn print_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

fn print_report_summary<W: Write>(summary: &ReportSummary, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "Generating reports from {}",
            summary.source_root.display()
        );
        let _ = writeln!(
            writer,
            "Generating reports to {}",
            summary.report_dir.display()
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated story reports for {}: {} {}, {} {}",
            summary.project,
            summary.story_count,
            if summary.story_count == 1 {
                "story"
            } else {
                "stories"
            },
            summary.test_count,
            if summary.test_count == 1 { "test" } else { "tests" }
        )
        .green()
    );
    let _ = writeln!(
        writer,
        "  {} {}",
        "-->".blue(),
        summary.report_dir.display()
    );
}

fn print_clean_summary<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.removed {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Cleared story report history for {}", summary.project).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "No story report history for {}",
            summary.project
        );
    }
}

fn print_init_summary<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
