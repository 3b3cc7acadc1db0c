//! Filesystem-backed story reporter.
//!
//! Collects story result files from a source directory into the report
//! output directory, preserving their relative layout, and keeps a copy of
//! each run under a per-project history root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde_json::Value;
use walkdir::WalkDir;

use super::{ReportData, StoryReporter};

pub struct FileStoryReporter {
    project: String,
    patterns: Vec<Pattern>,
    history_root: PathBuf,
    output_directory: Option<PathBuf>,
}

impl FileStoryReporter {
    pub fn new(project: &str, story_patterns: &[String], history_root: &Path) -> Result<Self> {
        let patterns = story_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid story pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            project: project.to_string(),
            patterns,
            history_root: history_root.to_path_buf(),
            output_directory: None,
        })
    }

    /// History directory for this project.
    pub fn history_dir(&self) -> PathBuf {
        self.history_root.join(&self.project)
    }

    fn is_story_file(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    /// Collect story files under `source_dir`, sorted for deterministic
    /// output.
    fn story_files(&self, source_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(source_dir) {
            let entry = entry
                .with_context(|| format!("Cannot read story source: {}", source_dir.display()))?;
            if entry.file_type().is_file() && self.is_story_file(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Directory for the next history run: `run-0001`, `run-0002`, ...
    fn next_run_dir(&self) -> Result<PathBuf> {
        let history = self.history_dir();
        fs::create_dir_all(&history)
            .with_context(|| format!("Failed to create history directory: {}", history.display()))?;

        let existing = fs::read_dir(&history)
            .with_context(|| format!("Failed to read history directory: {}", history.display()))?
            .count();

        Ok(history.join(format!("run-{:04}", existing + 1)))
    }

    fn test_count_in(content: &str) -> usize {
        // A story that does not parse (or has no tests array) still counts
        // as one test in the aggregate.
        match serde_json::from_str::<Value>(content) {
            Ok(doc) => doc
                .get("tests")
                .and_then(Value::as_array)
                .map_or(1, |tests| tests.len()),
            Err(_) => 1,
        }
    }

    fn copy_into(dir: &Path, relative: &Path, content: &str) -> Result<()> {
        let destination = dir.join(relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&destination, content)
            .with_context(|| format!("Failed to write report file: {}", destination.display()))
    }
}

impl StoryReporter for FileStoryReporter {
    fn set_output_directory(&mut self, path: &Path) {
        self.output_directory = Some(path.to_path_buf());
    }

    fn generate_reports_from(&mut self, source_dir: &Path) -> Result<ReportData> {
        let output = self
            .output_directory
            .clone()
            .context("No output directory set for story reports")?;

        if !source_dir.is_dir() {
            bail!(
                "Story source directory not found: {}",
                source_dir.display()
            );
        }

        fs::create_dir_all(&output)
            .with_context(|| format!("Failed to create report directory: {}", output.display()))?;
        let run_dir = self.next_run_dir()?;

        let mut story_count = 0;
        let mut test_count = 0;

        for path in self.story_files(source_dir)? {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read story result: {}", path.display()))?;
            // story_files only yields paths under source_dir
            let relative = path.strip_prefix(source_dir).unwrap_or(&path);

            Self::copy_into(&output, relative, &content)?;
            Self::copy_into(&run_dir, relative, &content)?;

            story_count += 1;
            test_count += Self::test_count_in(&content);
        }

        Ok(ReportData {
            story_count,
            test_count,
        })
    }

    fn clear_history(&mut self) -> Result<()> {
        let dir = self.history_dir();
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to clear report history: {}", dir.display()))?;
        }
        Ok(())
    }
}
