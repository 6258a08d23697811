use crate::sorter::UnmatchedPolicy;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sort-deps",
    version,
    about = "Sort `name version` dependency entries alphabetically"
)]
pub(crate) struct Cli {
    #[arg(value_name = "FILE", required = true)]
    pub(crate) files: Vec<PathBuf>,

    /// What to do with lines that are not `name version` entries
    #[arg(long, value_enum, value_name = "POLICY")]
    pub(crate) unmatched: Option<UnmatchedPolicy>,

    /// Read configuration from this file instead of ./.sort-deps.toml
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub(crate) log_level: LevelFilter,
}
