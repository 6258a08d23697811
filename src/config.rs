use crate::sorter::UnmatchedPolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub(crate) const DEFAULT_CONFIG_FILE: &str = ".sort-deps.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) unmatched: UnmatchedPolicy,
}

impl Config {
    /// Loads an explicitly requested config file, which must exist.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&contents, path)
    }

    /// Loads `.sort-deps.toml` from `dir`, falling back to defaults when the
    /// file is absent.
    pub(crate) fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read config {}", path.display()))
            }
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).with_context(|| format!("invalid config {}", path.display()))
    }
}
