use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fcl-checker")]
#[command(about = "Checks whether a 40ft container truck can reach a Japanese address")]
pub struct CliConfig {
    /// Addresses to check (blank entries are skipped)
    pub addresses: Vec<String>,

    /// Port catalog: a local .json file or an http(s) URL
    #[arg(long)]
    pub ports: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the results as CSV to this path
    #[arg(long)]
    pub csv: Option<String>,

    /// Seed for the simulated road width of unknown locations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use this road width (m) for unknown locations instead of a random one
    #[arg(long)]
    pub road_width: Option<f64>,

    /// Catalog download timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併 TOML 檔與命令列參數，命令列優先
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Settings::from_toml(&toml)
            }
            None => Settings::default(),
        };

        if let Some(ports) = &self.ports {
            settings.catalog_source = ports.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.catalog_timeout_seconds = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(width) = self.road_width {
            validate_range("road_width", width, 0.0, 100.0)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_args() {
        let cli = CliConfig::parse_from([
            "fcl-checker",
            "祇園",
            "大黒ふ頭",
            "--ports",
            "https://example.com/ports.json",
            "--format",
            "json",
            "--seed",
            "42",
        ]);
        assert_eq!(cli.addresses, vec!["祇園", "大黒ふ頭"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.seed, Some(42));

        let settings = cli.settings().unwrap();
        assert_eq!(settings.catalog_source(), "https://example.com/ports.json");
    }

    #[test]
    fn test_cli_overrides_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nsource = \"from-file.json\"\ntimeout_seconds = 20\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["fcl-checker", "--config", &path, "--timeout-seconds", "3"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.catalog_source, "from-file.json");
        assert_eq!(settings.catalog_timeout_seconds, 3);
    }

    #[test]
    fn test_negative_road_width_is_invalid() {
        let cli = CliConfig::parse_from(["fcl-checker", "--road-width=-1", "x"]);
        assert!(cli.validate().is_err());
    }
}
