use crate::extract::DEFAULT_FILTER_PATTERN;
use crate::normalize::{DEFAULT_PLACEHOLDER, DEFAULT_WILDCARD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Shape token written in place of literal value text.
    pub placeholder: String,
    /// Character kept verbatim inside values.
    pub wildcard: char,
    /// Line pattern; capture group 1 is the raw filter.
    pub filter_pattern: String,
    /// Distinct strings kept per table. Unbounded when unset.
    pub max_entries: Option<usize>,
    pub report: ReportRules,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            wildcard: DEFAULT_WILDCARD,
            filter_pattern: DEFAULT_FILTER_PATTERN.to_string(),
            max_entries: None,
            report: ReportRules::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRules {
    pub count_width: usize,
    pub filter_width: usize,
    pub full_filter_title: String,
    pub component_title: String,
}

impl Default for ReportRules {
    fn default() -> Self {
        Self {
            count_width: 12,
            filter_width: 62,
            full_filter_title: "Full filters".to_string(),
            component_title: "Filter components".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.is_empty() {
            return Err(ConfigError::Invalid {
                key: "placeholder",
                reason: "must not be empty".to_string(),
            });
        }
        if self.placeholder.contains(self.wildcard) {
            return Err(ConfigError::Invalid {
                key: "placeholder",
                reason: format!("must not contain the wildcard '{}'", self.wildcard),
            });
        }
        if self.max_entries == Some(0) {
            return Err(ConfigError::Invalid {
                key: "max_entries",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.report.count_width == 0 || self.report.filter_width == 0 {
            return Err(ConfigError::Invalid {
                key: "report",
                reason: "column widths must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    let config = toml::from_str::<AnalyzerConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })?;
    config.validate()?;
    Ok(config)
}

pub fn default_config() -> &'static AnalyzerConfig {
    static DEFAULT_CONFIG: LazyLock<AnalyzerConfig> = LazyLock::new(AnalyzerConfig::default);
    &DEFAULT_CONFIG
}
