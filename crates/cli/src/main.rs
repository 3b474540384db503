use std::{
    io::{stdin, stdout},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use glyphtrim_cli::{Cli, confirm, print_keep_text, report_error, run};
use glyphtrim_core::{Error, probe_engine};
use log::warn;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = probe_engine() {
        return fail(&Error::MissingEngine(format!("{e:#}")));
    }

    let config = cli.config();
    print_keep_text(&config);

    if !cli.yes {
        let confirmed = confirm(
            stdin().lock(),
            stdout(),
            "Subset the font with this configuration?",
        )
        .unwrap_or_else(|e| {
            warn!("Could not read confirmation: {e}");
            false
        });
        if !confirmed {
            println!("Cancelled. Change the keep text with --text and run again.");
            return ExitCode::SUCCESS;
        }
    }

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(error: &Error) -> ExitCode {
    if let Err(e) = report_error(error, stdout()) {
        warn!("Could not print error: {e}");
    }
    ExitCode::FAILURE
}
