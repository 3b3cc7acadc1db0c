//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! chronicle commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `report`: Generate the aggregated story report
//! - `clean`: Delete historical report data for this project
//! - `init`: Initialize chronicle configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Report(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the report commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing story result files (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Root directory for generated reports (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Project identifier (overrides config file and manifest)
    #[arg(long)]
    pub project: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub args: ReportArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the aggregated story report from collected story results
    Report(ReportCommand),
    /// Delete historical report data for this project
    Clean(CleanCommand),
    /// Initialize a new .chroniclerc.json configuration file
    Init,
}
