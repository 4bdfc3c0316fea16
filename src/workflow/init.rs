//! Workflow init step.
//!
//! Init writes a default `config.json` into the data directory so the
//! suggestion backend and extra brands have an obvious place to live.
use crate::cli::{GlobalArgs, InitArgs};
use crate::config;
use crate::paths::DataPaths;
use anyhow::{anyhow, Context, Result};
use std::fs;

/// Run the init step, writing the config stub.
pub fn run_init(global: &GlobalArgs, args: &InitArgs) -> Result<()> {
    let paths = DataPaths::resolve(global.data_dir.as_deref())?;
    let config_path = global
        .config
        .clone()
        .unwrap_or_else(|| paths.config_path());
    if config_path.is_file() && !args.force {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    fs::create_dir_all(paths.root())
        .with_context(|| format!("create data dir {}", paths.root().display()))?;
    config::write_config(&config_path, &config::default_config())?;
    tracing::info!(path = %config_path.display(), "config written");
    println!("wrote {}", config_path.display());
    Ok(())
}
