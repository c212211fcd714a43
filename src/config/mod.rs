//! Configuration for dit
//!
//! Built-in defaults can be overridden by a project-local `dit.toml` or,
//! failing that, by `~/.dit/config.toml`. CLI flags override both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "dit.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest document file name, resolved relative to the working
    /// directory unless overridden on the command line.
    pub manifest_file: String,
    pub default_version: String,
    pub project_description: String,
    pub package_description: String,
    pub module_description: String,
    pub file_content: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_file: "Project.dit".to_string(),
            default_version: "1.0".to_string(),
            project_description: "A new project".to_string(),
            package_description: "Description for package".to_string(),
            module_description: "Description for module".to_string(),
            file_content: "File content here".to_string(),
        }
    }
}

/// Returns the path to the dit home directory (~/.dit)
pub fn dit_home() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".dit"))
}

/// Load configuration, preferring `dit.toml` in the working directory over
/// the per-user config file. Missing files fall back to defaults.
pub fn load_config() -> Result<Config> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(&local);
    }
    let global = dit_home()?.join("config.toml");
    if global.exists() {
        return read_config(&global);
    }
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
