use crate::core::display::{WeightFormat, DEFAULT_DECIMALS, DEFAULT_UNIT};
use crate::core::session::DEFAULT_CONFIRM_MESSAGE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_FILE: &str = "scan-weigh.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub display: DisplayConfig,
    pub confirm: ConfirmConfig,
    pub batch: BatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OnInvalid {
    /// Log the bad line and keep going.
    #[default]
    Skip,
    /// Stop at the first bad line.
    Abort,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub unit: String,
    pub decimals: u32,
    pub output_format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            decimals: DEFAULT_DECIMALS,
            output_format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmConfig {
    pub message: String,
    /// Answer preselected in the terminal prompt.
    pub default_answer: bool,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_CONFIRM_MESSAGE.to_string(),
            default_answer: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub on_invalid: OnInvalid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ScanConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, else the default file if it exists, else defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) if !Path::new(path).exists() => Err(ScanError::ConfigError {
                message: format!("configuration file not found: {}", path),
            }),
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn weight_format(&self) -> WeightFormat {
        WeightFormat::from_provider(self)
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("display.unit", &self.display.unit)?;
        validation::validate_range("display.decimals", self.display.decimals, 0, 6)?;
        validation::validate_non_empty_string("confirm.message", &self.confirm.message)?;
        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }
}

impl ConfigProvider for ScanConfig {
    fn unit(&self) -> &str {
        &self.display.unit
    }

    fn decimals(&self) -> u32 {
        self.display.decimals
    }

    fn confirm_message(&self) -> &str {
        &self.confirm.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ScanConfig::from_toml_str("").unwrap();
        assert_eq!(config.unit(), "Kgs");
        assert_eq!(config.decimals(), 3);
        assert_eq!(config.confirm_message(), "Are you sure?");
        assert_eq!(config.batch.on_invalid, OnInvalid::Skip);
        assert_eq!(config.display.output_format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = ScanConfig::from_toml_str(
            r#"
            [display]
            unit = "kg"

            [batch]
            on_invalid = "abort"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.unit, "kg");
        assert_eq!(config.display.decimals, 3);
        assert_eq!(config.batch.on_invalid, OnInvalid::Abort);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SCAN_WEIGH_TEST_UNIT", "lb");
        let config = ScanConfig::from_toml_str(
            r#"
            [display]
            unit = "${SCAN_WEIGH_TEST_UNIT}"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.unit, "lb");
    }

    #[test]
    fn test_unknown_enum_value_is_a_parse_error() {
        let err = ScanConfig::from_toml_str(
            r#"
            [display]
            output_format = "xml"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_weight_format_follows_display_section() {
        let config = ScanConfig::from_toml_str(
            r#"
            [display]
            unit = "lb"
            decimals = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.weight_format(), WeightFormat::new("lb", 1));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ScanConfig::default();
        config.display.decimals = 9;
        assert!(config.validate().is_err());

        let mut config = ScanConfig::default();
        config.confirm.message = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = ScanConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }
}
