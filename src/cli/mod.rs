use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;

pub mod args;
pub mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(command) = args.command else {
        Arguments::command().print_help().ok();
        return Ok(ExitStatus::Success.into());
    };

    let result = match command {
        Command::Report(cmd) => commands::report::generate(cmd)?,
        Command::Clean(cmd) => commands::clean::clean(cmd)?,
        Command::Init => commands::init::init()?,
    };

    report::print(&result, verbose);

    Ok(result.exit_status().into())
}
