use crate::core::batch::OutputFormat;
use crate::domain::model::{Calculation, OverflowPolicy};
use crate::utils::error::{ArithError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch file: optional `[settings]` and a list of `[[calculations]]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub calculations: Vec<Calculation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub overflow: Option<OverflowPolicy>,
    pub format: Option<OutputFormat>,
    pub output_path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ArithError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// `${VAR}` references are replaced from the environment before parsing.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ArithError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| ArithError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        // Unset variables are left as-is so the parse error names them.
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.settings.overflow.unwrap_or_default()
    }

    pub fn format(&self) -> OutputFormat {
        self.settings.format.unwrap_or_default()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.settings.output_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("calculations", &self.calculations)?;
        if let Some(path) = &self.settings.output_path {
            validation::validate_path("settings.output_path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Operation;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [settings]
            overflow = "checked"
            format = "csv"
            output_path = "out/report.csv"

            [[calculations]]
            operation = "add"
            left = 4
            right = 6

            [[calculations]]
            operation = "multiply"
            left = -3
            right = 4
        "#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.overflow(), OverflowPolicy::Checked);
        assert_eq!(config.format(), OutputFormat::Csv);
        assert_eq!(config.output_path(), Some("out/report.csv"));
        assert_eq!(
            config.calculations,
            vec![
                Calculation::new(Operation::Add, 4, 6),
                Calculation::new(Operation::Multiply, -3, 4),
            ]
        );
    }

    #[test]
    fn test_settings_default() {
        let content = r#"
            [[calculations]]
            operation = "add"
            left = 1
            right = 2
        "#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.overflow(), OverflowPolicy::Wrapping);
        assert_eq!(config.format(), OutputFormat::Text);
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_empty_batch_fails_validation() {
        let config = TomlConfig::from_toml_str("[settings]\noverflow = \"wrapping\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_operation_is_config_error() {
        let content = r#"
            [[calculations]]
            operation = "divide"
            left = 1
            right = 2
        "#;

        let err = TomlConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ArithError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MISSION_ARITH_TEST_POLICY", "saturating");
        let content = r#"
            [settings]
            overflow = "${MISSION_ARITH_TEST_POLICY}"

            [[calculations]]
            operation = "add"
            left = 1
            right = 2
        "#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.overflow(), OverflowPolicy::Saturating);
    }
}
