use crate::core::arith;
use crate::domain::model::{Operand, Operation, OverflowPolicy};
use crate::domain::ports::Evaluator;
use crate::utils::error::{ArithError, Result};

/// Applies an [`OverflowPolicy`] to the arithmetic operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    policy: OverflowPolicy,
}

impl Calculator {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn add(&self, left: Operand, right: Operand) -> Result<Operand> {
        self.evaluate(Operation::Add, left, right)
    }

    pub fn multiply(&self, left: Operand, right: Operand) -> Result<Operand> {
        self.evaluate(Operation::Multiply, left, right)
    }

    fn checked(operation: Operation, left: Operand, right: Operand) -> Option<Operand> {
        match operation {
            Operation::Add => arith::checked_add(left, right),
            Operation::Multiply => arith::checked_multiply(left, right),
        }
    }
}

impl Evaluator for Calculator {
    fn evaluate(&self, operation: Operation, left: Operand, right: Operand) -> Result<Operand> {
        let exact = Self::checked(operation, left, right);
        if exact.is_none() {
            tracing::warn!(
                "{} overflowed for {} and {} (policy: {})",
                operation,
                left,
                right,
                self.policy
            );
        }

        let result = match (self.policy, exact) {
            (_, Some(value)) => value,
            (OverflowPolicy::Wrapping, None) => match operation {
                Operation::Add => arith::add(left, right),
                Operation::Multiply => arith::multiply(left, right),
            },
            (OverflowPolicy::Saturating, None) => match operation {
                Operation::Add => arith::saturating_add(left, right),
                Operation::Multiply => arith::saturating_multiply(left, right),
            },
            (OverflowPolicy::Checked, None) => {
                return Err(ArithError::Overflow {
                    operation,
                    left,
                    right,
                })
            }
        };

        tracing::debug!("{} {} {} = {}", operation, left, right, result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_wrapping() {
        let calc = Calculator::default();
        assert_eq!(calc.policy(), OverflowPolicy::Wrapping);
        assert_eq!(calc.add(Operand::MAX, 1).unwrap(), Operand::MIN);
    }

    #[test]
    fn test_in_range_results_agree_across_policies() {
        for policy in [
            OverflowPolicy::Wrapping,
            OverflowPolicy::Checked,
            OverflowPolicy::Saturating,
        ] {
            let calc = Calculator::new(policy);
            assert_eq!(calc.add(4, 6).unwrap(), 10);
            assert_eq!(calc.multiply(2, 6).unwrap(), 12);
            assert_eq!(calc.add(-5, 5).unwrap(), 0);
            assert_eq!(calc.multiply(-3, 4).unwrap(), -12);
        }
    }

    #[test]
    fn test_checked_policy_reports_overflow() {
        let calc = Calculator::new(OverflowPolicy::Checked);
        let err = calc.multiply(Operand::MAX, 2).unwrap_err();
        match err {
            ArithError::Overflow {
                operation,
                left,
                right,
            } => {
                assert_eq!(operation, Operation::Multiply);
                assert_eq!(left, Operand::MAX);
                assert_eq!(right, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_saturating_policy_clamps() {
        let calc = Calculator::new(OverflowPolicy::Saturating);
        assert_eq!(calc.add(Operand::MAX, 10).unwrap(), Operand::MAX);
        assert_eq!(calc.multiply(Operand::MIN, 2).unwrap(), Operand::MIN);
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        let calc = Calculator::new(OverflowPolicy::Checked);
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || calc.multiply(i, 3).unwrap()))
            .collect();
        let results: Vec<Operand> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![0, 3, 6, 9]);
    }
}
