use crate::cli::Cli;
use crate::config::Config;
use crate::file::DependencyFile;
use crate::sorter::{DependencySorter, UnmatchedPolicy};
use anyhow::{Context, Result};
use log::{Level, debug, info, log};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Every file was already sorted.
    Clean,
    /// At least one file had to be rewritten.
    Changed,
}

pub(crate) fn run(cli: Cli) -> Result<Status> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };
    let policy = cli.unmatched.unwrap_or(config.unmatched);
    debug!("unmatched line policy: {:?}", policy);

    let sorter = DependencySorter::new(policy)?;
    let mut status = Status::Clean;
    for path in &cli.files {
        if sort_file(&sorter, path)? {
            status = Status::Changed;
        }
    }
    Ok(status)
}

/// Sorts one file in place and reports whether it was rewritten.
fn sort_file(sorter: &DependencySorter, path: &Path) -> Result<bool> {
    debug!("processing {}", path.display());
    let mut file = DependencyFile::open(path)?;
    let content = file.read()?;
    let sorted = sorter
        .sort(&content)
        .with_context(|| format!("failed to sort {}", path.display()))?;

    let level = match sorter.policy() {
        UnmatchedPolicy::Warn => Level::Warn,
        _ => Level::Debug,
    };
    for line in &sorted.dropped {
        log!(
            level,
            "{}:{}: dropping unrecognized line {:?}",
            path.display(),
            line.number,
            line.text
        );
    }

    if !sorted.changed {
        info!("{} is already sorted", path.display());
        return Ok(false);
    }
    file.replace(sorted.content.as_bytes())?;
    println!("Sorting {}", path.display());
    Ok(true)
}
