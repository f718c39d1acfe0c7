//! TOML configuration file model and loading
//!
//! The gateway resolves each setting through a priority chain:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! This module owns tier 3: the on-disk file format and its default
//! location. The chain itself lives in the gateway's config resolution.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings read from the TOML config file.
///
/// Every field is optional; absent fields fall through to the next
/// resolution tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Socket address the gateway listens on
    pub bind_addr: Option<String>,
    /// Base URL of the upstream catalog API
    pub upstream_base_url: Option<String>,
    /// Per-call upstream timeout in seconds
    pub upstream_timeout_secs: Option<u64>,
}

/// Default configuration file path for the platform
/// (`~/.config/tunegate/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tunegate").join("config.toml"))
}

/// Load and parse a TOML config file.
///
/// A missing file is not an error at call sites that treat the file as
/// optional; they check existence first or ignore the `Config` error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Load the config file if it exists, an empty config otherwise
pub fn load_optional_config(path: Option<&Path>) -> TomlConfig {
    match path {
        Some(p) if p.exists() => match load_toml_config(p) {
            Ok(config) => {
                tracing::info!("Loaded config file: {}", p.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable config file: {}", e);
                TomlConfig::default()
            }
        },
        _ => TomlConfig::default(),
    }
}
