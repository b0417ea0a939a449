//! Application context for the Budget CLI.
//!
//! Bundles the parsed CLI arguments with lazily-resolved store path so
//! handlers do not each re-run path resolution.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use budget_core::JsonFileStore;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, DEFAULT_STORE_FILE};

/// Application context shared by all command handlers.
pub struct AppContext<'a> {
    cli: &'a Cli,
    store_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            store_path: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolve the store file path, caching the result.
    ///
    /// Resolution order: `--file` flag (or `BUDGET_FILE` env, handled by
    /// clap), then the config file, then `save_file.json` in the working
    /// directory.
    pub fn store_path(&self) -> anyhow::Result<&PathBuf> {
        self.store_path.get_or_try_init(|| resolve_store_path(self.cli))
    }

    /// Open the store at the resolved path.
    pub fn store(&self) -> anyhow::Result<JsonFileStore> {
        Ok(JsonFileStore::open(self.store_path()?))
    }
}

/// Resolve the store file path from CLI args or config.
fn resolve_store_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref path) = cli.file {
        return Ok(PathBuf::from(path));
    }

    let config_path = default_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.store.path));
    }

    Ok(PathBuf::from(DEFAULT_STORE_FILE))
}
