//! iEvo SDK - developer toolkit for building agent packages

use std::process::ExitCode;

use clap::Parser;

use ievo_sdk::cli::Cli;
use ievo_sdk::logging;
use ievo_sdk::output::json;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let as_json = cli.json;

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            match json::format_error(&format!("{e:#}"), "ERROR") {
                Ok(obj) if as_json => println!("{obj}"),
                _ => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
