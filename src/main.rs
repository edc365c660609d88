mod bootstrap;
mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(cli.global.verbose) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match commands::run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
