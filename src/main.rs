// src/main.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;
use prime_range::app;
use prime_range::cli::Args;
use prime_range::config::Config;
use prime_range::error::Result;
use prime_range::logging;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    logging::init(config.log_level);
    log::debug!("starting with {config:?}");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    app::run(&config, stdin, &mut stdout)?;
    Ok(())
}
