mod cli;
mod commands;
mod config;
mod data;
mod error;
mod logging;
mod paths;
mod screens;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::ConsoleConfig;
use crate::error::Result;

fn run(cli: Cli) -> Result<()> {
    let config = ConsoleConfig::load(cli.config.as_deref())?;
    let level = logging::parse_level(cli.log_level.as_deref().unwrap_or(&config.log_level))?;
    logging::init(level, config.log_file.as_deref())?;
    log::info!("Running {:?}", cli.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Screens => commands::list_screens(&mut out)?,
        Command::Show(args) => commands::show(args, &config, &mut out)?,
        Command::Act(args) => commands::act(args, &config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
