mod commands;
mod logging;
mod menu;
mod progress;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use menu::MenuChoice;
use progress::ConsoleReporter;
use renumber_core::{AppConfig, Error, RenumberOptions};
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = renumber_core::config::load_configuration()
        .context("Error loading configuration")?;
    args.options.apply(&mut config);

    let status = match args.command {
        Some(Commands::Run { path }) => {
            run_renumber(&path, &config)?;
            0
        }
        Some(Commands::Prompt) => {
            let path = menu::prompt_path(&mut io::stdin().lock(), &mut io::stdout())?;
            run_renumber(&path, &config)?;
            0
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
            0
        }
        None => run_menu(&config)?,
    };

    Ok(ExitCode::from(status))
}

/// Returns the process exit status for the chosen menu entry.
fn run_menu(config: &AppConfig) -> anyhow::Result<u8> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    let choice = menu::read_choice(&mut stdin, &mut stdout)?;
    match choice {
        Some(MenuChoice::EnterPath) => {
            let path = menu::prompt_path(&mut stdin, &mut stdout)?;
            run_renumber(&path, config)?;
        }
        Some(MenuChoice::OwnDirectory) => {
            let dir = menu::own_directory().context("Unable to locate the program's directory")?;
            run_renumber(&dir, config)?;
        }
        Some(MenuChoice::Exit) => {
            info!("Exit selected");
        }
        None => {
            println!("Invalid choice.");
        }
    }

    Ok(menu::exit_status(choice))
}

/// An invalid directory is reported and treated as a normal finish.
fn run_renumber(path: &Path, config: &AppConfig) -> Result<(), Error> {
    let options = RenumberOptions::from(config);
    match renumber_core::renumber(path, &options, &ConsoleReporter) {
        Ok(_) => Ok(()),
        Err(err @ Error::InvalidDirectory(_)) => {
            println!("{} {}", "Error:".red(), err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
