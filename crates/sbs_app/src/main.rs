mod cli;
mod settings;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use engine_logging::{engine_error, engine_info};
use sbs_engine::{build_report, write_report, EngineError, ErrorClass, Scraper};

use crate::cli::Args;

const EXIT_FAILURE: u8 = 1;
const EXIT_TIMEOUT: u8 = 2;
const EXIT_CONNECTION: u8 = 3;
const EXIT_RESPONSE: u8 = 4;

fn main() -> ExitCode {
    let args = Args::parse();
    engine_logging::initialize(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = settings::load(args)?;
    let scraper = Scraper::new(&config).context("invalid configuration")?;
    engine_info!("Scraping listing {}", scraper.listing_url());

    let listing = scraper.run_blocking()?;
    let report = build_report(&listing);
    write_report(&report, io::stdout().lock()).context("failed to write report to stdout")?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<EngineError>().and_then(EngineError::class) {
        Some(ErrorClass::Timeout) => EXIT_TIMEOUT,
        Some(ErrorClass::Connection) => EXIT_CONNECTION,
        Some(ErrorClass::Response) => EXIT_RESPONSE,
        None => EXIT_FAILURE,
    }
}
