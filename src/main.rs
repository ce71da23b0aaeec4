use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod context;
mod cue;
mod display;
mod error;
mod mpd;
mod reconcile;
mod store;
mod tags;
mod track;

use cli::Cli;
use context::Context;
use error::{Error, Result};

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(cli: &Cli) -> Result<config::Settings> {
    let mut settings = config::Settings::load(cli.config.as_deref())?;
    if let Some(path) = &cli.database {
        settings.database.path = path.clone();
    }
    if cli.no_color {
        settings.ui.color = false;
    }
    settings.validate().map_err(Error::Validation)?;
    Ok(settings)
}

fn run(cli: &Cli) -> Result<Vec<String>> {
    let settings = load_settings(cli)?;
    debug!(database = %settings.database.path.display(), "loaded settings");
    let mut ctx = Context::open(settings)?;
    commands::run(&mut ctx, &cli.command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cueball: {e}");
            ExitCode::FAILURE
        }
    }
}
