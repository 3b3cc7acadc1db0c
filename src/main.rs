use std::process::ExitCode;

use chronicle::cli::ExitStatus;
use clap::Parser;

fn main() -> ExitCode {
    let args = chronicle::cli::Arguments::parse();

    match chronicle::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
