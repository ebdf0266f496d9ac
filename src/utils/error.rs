use crate::domain::model::{Operand, Operation};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArithError {
    #[error("{operation} overflowed for operands {left} and {right}")]
    Overflow {
        operation: Operation,
        left: Operand,
        right: Operand,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ArithError {
    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArithError::Overflow { .. } => 2,
            ArithError::ConfigError { .. }
            | ArithError::InvalidConfigValueError { .. }
            | ArithError::MissingConfigError { .. } => 1,
            ArithError::IoError(_)
            | ArithError::SerializationError(_)
            | ArithError::CsvError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArithError>;
