use crate::domain::model::{Operand, Operation};
use crate::utils::error::Result;

pub trait Evaluator: Send + Sync {
    fn evaluate(&self, operation: Operation, left: Operand, right: Operand) -> Result<Operand>;
}
