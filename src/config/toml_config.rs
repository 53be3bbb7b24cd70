use crate::core::rules::RuleSet;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub rules: Option<RuleSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub source: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORTS_URL})；未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            let source = catalog.source.as_deref().ok_or_else(|| CheckError::MissingConfigError {
                field: "catalog.source".to_string(),
            })?;
            crate::utils::validation::validate_non_empty_string("catalog.source", source)?;
            if let Some(timeout) = catalog.timeout_seconds {
                crate::utils::validation::validate_range("catalog.timeout_seconds", timeout, 1, 300)?;
            }
        }

        if let Some(rules) = &self.rules {
            rules.validate()?;
        }

        Ok(())
    }
}
