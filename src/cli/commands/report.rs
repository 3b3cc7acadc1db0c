use anyhow::{Context, Ok, Result};

use super::context::CommandContext;
use super::{CommandResult, CommandSummary, ReportSummary};
use crate::cli::args::ReportCommand;
use crate::reports::{FileStoryReporter, StoryReporter};

pub fn generate(cmd: ReportCommand) -> Result<CommandResult> {
    let common = &cmd.args.common;
    let ctx = CommandContext::new(common)?;

    let source_root = ctx.source_root(common.source_root.as_deref());
    let report_dir = ctx.report_dir(common.output_root.as_deref());

    let mut reporter =
        FileStoryReporter::new(&ctx.project, &ctx.config.story_patterns, &ctx.history_root())?;
    reporter.set_output_directory(&report_dir);

    let data = reporter
        .generate_reports_from(&source_root)
        .context("Error generating aggregate story reports")?;

    let mut warnings = Vec::new();
    if data.story_count == 0 {
        warnings.push(format!(
            "no story result files found in {}",
            source_root.display()
        ));
    }

    Ok(CommandResult {
        summary: CommandSummary::Report(ReportSummary {
            project: ctx.project,
            source_root,
            report_dir,
            story_count: data.story_count,
            test_count: data.test_count,
        }),
        warnings,
    })
}
