//! The two arithmetic operations.
//!
//! `add` and `multiply` wrap on overflow in every build profile. The
//! `checked_*` and `saturating_*` variants back the other overflow policies.

use crate::domain::model::Operand;

/// Sum of `a` and `b`, wrapping on overflow.
pub fn add(a: Operand, b: Operand) -> Operand {
    a.wrapping_add(b)
}

/// Product of `a` and `b`, wrapping on overflow.
pub fn multiply(a: Operand, b: Operand) -> Operand {
    a.wrapping_mul(b)
}

pub fn checked_add(a: Operand, b: Operand) -> Option<Operand> {
    a.checked_add(b)
}

pub fn checked_multiply(a: Operand, b: Operand) -> Option<Operand> {
    a.checked_mul(b)
}

pub fn saturating_add(a: Operand, b: Operand) -> Operand {
    a.saturating_add(b)
}

pub fn saturating_multiply(a: Operand, b: Operand) -> Operand {
    a.saturating_mul(b)
}
