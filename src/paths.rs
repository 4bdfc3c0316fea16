//! Typed paths into the data directory.
//!
//! Centralizing path construction keeps every command reading and writing the
//! same files.
use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the default data directory when `--data-dir` is not given.
pub const HOME_ENV: &str = "TEANOTE_HOME";

/// Convenience wrapper for locating files under the data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the data directory: explicit flag, then `TEANOTE_HOME`, then
    /// the platform data directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::new(path.to_path_buf()));
        }
        if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
            return Ok(Self::new(PathBuf::from(home)));
        }
        let data_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow!("cannot determine data directory; pass --data-dir"))?;
        Ok(Self::new(data_dir.join("tea-note")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `records.json` path.
    pub fn records_path(&self) -> PathBuf {
        self.root.join("records.json")
    }

    /// Return the `config.json` path.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }
}
