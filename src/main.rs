use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod error;
mod file;
mod sorter;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .format_timestamp(None)
        .init();
    match app::run(cli)? {
        app::Status::Clean => Ok(ExitCode::SUCCESS),
        app::Status::Changed => Ok(ExitCode::FAILURE),
    }
}
