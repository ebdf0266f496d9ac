pub mod arith;
pub mod batch;
pub mod calculator;
pub mod engine;

pub use crate::domain::model::{Calculation, Evaluation, Operand, Operation, OverflowPolicy};
pub use crate::domain::ports::Evaluator;
pub use crate::utils::error::Result;
