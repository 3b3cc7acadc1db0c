use anyhow::{Context, Ok, Result};

use super::context::CommandContext;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::cli::args::CleanCommand;
use crate::reports::{FileStoryReporter, StoryReporter};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let common = &cmd.args.common;
    let ctx = CommandContext::new(common)?;

    let mut reporter =
        FileStoryReporter::new(&ctx.project, &ctx.config.story_patterns, &ctx.history_root())?;
    let had_history = reporter.history_dir().exists();

    reporter
        .clear_history()
        .context("Error clearing story report history")?;

    Ok(CommandResult {
        summary: CommandSummary::Clean(CleanSummary {
            project: ctx.project,
            removed: had_history,
        }),
        warnings: Vec::new(),
    })
}
