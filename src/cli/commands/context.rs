use std::path::{Path, PathBuf};

use anyhow::{Context, Ok, Result};

use crate::cli::args::CommonArgs;
use crate::config::{Config, REPORT_DIR_NAME, load_config};
use crate::reports::project_identifier;

/// Shared setup for the report commands: working directory, configuration,
/// and the resolved project identifier.
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub project: String,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let project_root =
            std::env::current_dir().context("Failed to resolve working directory")?;
        let loaded = load_config(&project_root)?;
        let config = loaded.config;

        // CLI flag beats config file beats manifest lookup.
        let project = common
            .project
            .clone()
            .or_else(|| config.project_name.clone())
            .unwrap_or_else(|| project_identifier(&project_root));

        Ok(Self {
            project_root,
            config,
            project,
        })
    }

    pub fn history_root(&self) -> PathBuf {
        self.project_root.join(&self.config.history_root)
    }

    pub fn source_root(&self, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => self.project_root.join(path),
            None => self.project_root.join(&self.config.source_root),
        }
    }

    /// The report directory is a fixed subdirectory of the output root.
    pub fn report_dir(&self, override_output: Option<&Path>) -> PathBuf {
        let output_root = match override_output {
            Some(path) => self.project_root.join(path),
            None => self.project_root.join(&self.config.output_root),
        };
        output_root.join(REPORT_DIR_NAME)
    }
}
