use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::Cli;
use services::output;

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the JSON contract.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match commands::handle_fetch(&cli, &start_dir) {
        Ok(report) => {
            if output::print_report(&report).is_err() {
                std::process::exit(1);
            }
        }
        Err(err) => {
            output::print_error(&err);
            std::process::exit(1);
        }
    }
}
