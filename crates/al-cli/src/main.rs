//! accountlab - account registration and profile CLI
//!
//! # Examples
//!
//! ```bash
//! # Create an account against the configured backend
//! accountlab register --name Ann --email ann@example.com --password secret1
//!
//! # Sign in and print the stored profile
//! accountlab profile --email ann@example.com --password secret1
//!
//! # Whole flow against in-process services
//! accountlab --offline demo --name Ann --email ann@example.com --password secret1
//! ```

mod app;
mod cli;
mod commands;
mod console;
mod error;
mod logger;


use crate::app::Outcome;
use crate::cli::Cli;
use crate::console::Console;

use al_account::AccountSettings;
use al_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let accounts = if cli.offline {
        app::offline_accounts(AccountSettings::from_config(&config))
    } else {
        match app::remote_accounts(&config) {
            Ok(accounts) => accounts,
            Err(e) => {
                error!("{e}");
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let console = Console::default();
    let outcome = app::run(&accounts, cli.command, &console).await;
    console.print();

    match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Failure => ExitCode::FAILURE,
    }
}
