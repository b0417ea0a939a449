use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Store file used when neither flag, env var, nor config names one.
pub const DEFAULT_STORE_FILE: &str = "save_file.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub store: StoreSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("budget"));
        }
    }
    Ok(home_dir()?.join(".config").join("budget"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory (HOME is not set)"))?;
    if home.trim().is_empty() {
        return Err(anyhow::anyhow!(
            "Cannot determine home directory (HOME is empty)"
        ));
    }
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[store]\npath = \"/tmp/budget.json\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.store.path, "/tmp/budget.json");
    }

    #[test]
    fn test_read_config_missing_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(read_config(&path).is_err());
    }

    #[test]
    fn test_read_config_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "store = ").unwrap();

        assert!(read_config(&path).is_err());
    }
}
