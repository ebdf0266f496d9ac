use crate::utils::error::ArithError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed-width signed operand and result type.
pub type Operand = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "multiply" | "mul" | "*" => Ok(Operation::Multiply),
            other => Err(ArithError::InvalidConfigValueError {
                field: "operation".to_string(),
                value: other.to_string(),
                reason: "Supported operations: add, multiply".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Operation {
    type Error = ArithError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What happens when a result does not fit in an [`Operand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OverflowPolicy {
    /// Two's complement wrap-around.
    #[default]
    Wrapping,
    /// Report an overflow error.
    Checked,
    /// Clamp to `Operand::MIN` / `Operand::MAX`.
    Saturating,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Saturating => "saturating",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapping" | "wrap" => Ok(OverflowPolicy::Wrapping),
            "checked" | "trap" => Ok(OverflowPolicy::Checked),
            "saturating" | "saturate" => Ok(OverflowPolicy::Saturating),
            other => Err(ArithError::InvalidConfigValueError {
                field: "overflow".to_string(),
                value: other.to_string(),
                reason: "Supported policies: wrapping, checked, saturating".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OverflowPolicy {
    type Error = ArithError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub left: Operand,
    pub right: Operand,
}

impl Calculation {
    pub fn new(operation: Operation, left: Operand, right: Operand) -> Self {
        Self {
            operation,
            left,
            right,
        }
    }
}

/// Outcome of one calculation in a batch. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub left: Operand,
    pub right: Operand,
    pub result: Option<Operand>,
    pub error: Option<String>,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
