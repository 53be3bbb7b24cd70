#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::catalog::{DEFAULT_CATALOG_PATH, DEFAULT_CATALOG_TIMEOUT_SECS};
use crate::core::rules::RuleSet;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::time::Duration;

/// Fully resolved settings after merging the TOML file and command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_source: String,
    pub catalog_timeout_seconds: u64,
    pub rules: RuleSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: DEFAULT_CATALOG_PATH.to_string(),
            catalog_timeout_seconds: DEFAULT_CATALOG_TIMEOUT_SECS,
            rules: RuleSet::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &toml_config::TomlConfig) -> Self {
        let defaults = Settings::default();
        let catalog = config.catalog.as_ref();
        Self {
            catalog_source: catalog
                .and_then(|c| c.source.clone())
                .unwrap_or(defaults.catalog_source),
            catalog_timeout_seconds: catalog
                .and_then(|c| c.timeout_seconds)
                .unwrap_or(defaults.catalog_timeout_seconds),
            rules: config.rules.clone().unwrap_or(defaults.rules),
        }
    }
}

impl ConfigProvider for Settings {
    fn catalog_source(&self) -> &str {
        &self.catalog_source
    }

    fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_seconds)
    }

    fn rules(&self) -> RuleSet {
        self.rules.clone()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog.source", &self.catalog_source)?;
        validate_range("catalog.timeout_seconds", self.catalog_timeout_seconds, 1, 300)?;
        self.rules.validate()
    }
}
