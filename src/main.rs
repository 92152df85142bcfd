//! cherrytree binary entry point

mod cli;

use clap::Parser;
use cli::style::Stylize;
use cli::{Cli, run_build};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_build(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
