//! Discovery configuration.
//!
//! A `storydeck.toml` file at the content root adjusts which files the
//! crawler considers. Both knobs are optional — a missing file or a sparse
//! one falls back to the stock defaults.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Extensions recognized after the `.stories.` infix
//! extensions = ["js", "jsx", "ts", "tsx", "mjs", "svelte"]
//!
//! # Directory names whose subtrees are never crawled
//! exclude_dirs = ["node_modules"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config file name looked up in the content root.
pub const CONFIG_FILE: &str = "storydeck.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Crawler knobs, loaded from `storydeck.toml` or defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Extensions recognized after the `.stories.` infix, lowercase.
    pub extensions: Vec<String>,
    /// Directory names whose subtrees are skipped entirely.
    pub exclude_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "svelte"]
                .map(String::from)
                .to_vec(),
            exclude_dirs: vec!["node_modules".to_string()],
        }
    }
}

/// Load config from `<root>/storydeck.toml`, or defaults if it doesn't exist.
pub fn load_config(root: &Path) -> Result<DiscoveryConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(DiscoveryConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}
