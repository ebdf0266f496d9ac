pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::TomlConfig;
pub use crate::core::arith::{add, multiply};
pub use crate::core::batch::{BatchReport, BatchRunner, OutputFormat};
pub use crate::core::calculator::Calculator;
pub use crate::core::engine::{ArithEngine, RunPlan};
pub use crate::domain::model::{Calculation, Evaluation, Operand, Operation, OverflowPolicy};
pub use crate::domain::ports::Evaluator;
pub use crate::utils::error::{ArithError, Result};
