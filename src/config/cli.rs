use crate::core::batch::OutputFormat;
use crate::domain::model::{Calculation, Operand, Operation, OverflowPolicy};
use crate::utils::error::{ArithError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mission-arith")]
#[command(about = "Add or multiply 64-bit integers, one at a time or from a TOML batch file")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Operation to run: add or multiply
    pub operation: Option<Operation>,

    /// Left operand
    pub left: Option<Operand>,

    /// Right operand
    pub right: Option<Operand>,

    /// Overflow policy: wrapping, checked or saturating
    #[arg(long)]
    pub overflow: Option<OverflowPolicy>,

    /// TOML batch file; replaces the positional calculation
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format: text, json or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn is_batch(&self) -> bool {
        self.config.is_some()
    }

    /// The positional calculation, if all three parts were given.
    pub fn calculation(&self) -> Result<Calculation> {
        let operation = validation::validate_required_field("operation", &self.operation)?;
        let left = validation::validate_required_field("left", &self.left)?;
        let right = validation::validate_required_field("right", &self.right)?;
        Ok(Calculation::new(*operation, *left, *right))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
            if self.operation.is_some() {
                return Err(ArithError::ConfigError {
                    message: "Pass either a calculation or --config, not both".to_string(),
                });
            }
        } else {
            self.calculation()?;
        }

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_calculation() {
        let config =
            CliConfig::try_parse_from(["mission-arith", "multiply", "-3", "4", "--overflow", "checked"])
                .unwrap();

        assert!(config.validate().is_ok());
        assert!(!config.is_batch());
        assert_eq!(
            config.calculation().unwrap(),
            Calculation::new(Operation::Multiply, -3, 4)
        );
        assert_eq!(config.overflow, Some(OverflowPolicy::Checked));
    }

    #[test]
    fn test_missing_operand_fails_validation() {
        let config = CliConfig::try_parse_from(["mission-arith", "add", "4"]).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ArithError::MissingConfigError { field } if field == "right"));
    }

    #[test]
    fn test_batch_mode() {
        let config =
            CliConfig::try_parse_from(["mission-arith", "--config", "batch.toml", "-f", "csv"]).unwrap();
        assert!(config.is_batch());
        assert_eq!(config.format, Some(OutputFormat::Csv));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_calculation_and_config_conflict() {
        let config =
            CliConfig::try_parse_from(["mission-arith", "add", "1", "2", "--config", "batch.toml"])
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_operation_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["mission-arith", "divide", "1", "2"]).is_err());
    }
}
