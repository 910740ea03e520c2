use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use firstday_week::WeekBasis;

/// Top-level firstday configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirstdayConfig {
    /// Week settings.
    #[serde(default)]
    pub week: WeekToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl FirstdayConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekToml {
    #[serde(default)]
    pub basis: WeekBasis,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub format: Option<String>,
}
