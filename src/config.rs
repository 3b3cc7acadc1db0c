use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".chroniclerc.json";

/// Subdirectory of the output root that receives the aggregated report.
pub const REPORT_DIR_NAME: &str = "chronicle";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory where test runs drop story result files.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Root directory for generated report output.
    #[serde(default = "default_output_root")]
    pub output_root: String,
    /// Root directory for historical report data, one subdirectory per project.
    #[serde(default = "default_history_root")]
    pub history_root: String,
    /// Glob patterns selecting story result files inside the source root.
    #[serde(default = "default_story_patterns")]
    pub story_patterns: Vec<String>,
    /// Overrides the project identifier resolved from the manifest.
    #[serde(default)]
    pub project_name: Option<String>,
}

fn default_source_root() -> String {
    "target/chronicle".to_string()
}

fn default_output_root() -> String {
    "target/site".to_string()
}

fn default_history_root() -> String {
    ".chronicle-history".to_string()
}

fn default_story_patterns() -> Vec<String> {
    vec!["*.json".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_root: default_output_root(),
            history_root: default_history_root(),
            story_patterns: default_story_patterns(),
            project_name: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `storyPatterns` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.story_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'storyPatterns': \"{}\"", pattern)
            })?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
