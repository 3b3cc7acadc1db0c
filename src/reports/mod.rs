//! Report-generation collaborators.
//!
//! The build-integration commands drive a [`StoryReporter`] through a fixed
//! two-step flow: resolve the project identifier, then either clear history
//! or generate a report into a computed output path. The aggregate/HTML
//! rendering itself lives behind the trait; this crate ships
//! [`FileStoryReporter`], which handles the filesystem plumbing.

mod file_reporter;
mod project;

pub use file_reporter::FileStoryReporter;
pub use project::project_identifier;

use std::path::Path;

use anyhow::Result;

/// Handle describing a completed report generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportData {
    /// Number of story result files collected.
    pub story_count: usize,
    /// Number of tests recorded across the collected stories.
    pub test_count: usize,
}

/// Report-generation collaborator invoked by the build-integration commands.
///
/// An I/O failure during generation fails the whole run; there is no retry
/// and no partial recovery.
pub trait StoryReporter {
    /// Directory the aggregated report is written into.
    fn set_output_directory(&mut self, path: &Path);

    /// Generate reports from the story results found under `source_dir`.
    fn generate_reports_from(&mut self, source_dir: &Path) -> Result<ReportData>;

    /// Delete historical report data for this project. Missing history is
    /// not an error.
    fn clear_history(&mut self) -> Result<()>;
}
