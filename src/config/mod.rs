use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UdGuardError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".ud-guard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,

    /// Per-relation span-length thresholds, overriding the built-in table.
    #[serde(default)]
    pub spans: IndexMap<String, usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultConfig {
    /// Treat warnings as failures for the exit code.
    #[serde(default)]
    pub strict: bool,

    /// Path to the fixed-expression lexicon.
    #[serde(default)]
    pub fixed_list: Option<PathBuf>,
}

/// Loads the effective configuration.
///
/// An explicit `path` must exist; without one, a missing `.ud-guard.toml`
/// silently falls back to the defaults. `no_config` skips file loading
/// entirely.
///
/// # Errors
/// `FileRead` for an unreadable explicit path, `TomlParse` for bad TOML.
pub fn load(path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    if let Some(path) = path {
        return load_from_path(path);
    }
    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        return load_from_path(default_path);
    }
    Ok(Config::default())
}

fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| UdGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
