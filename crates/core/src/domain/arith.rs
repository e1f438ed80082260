// Arithmetic Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Pair of integer operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

/// Result of truncating integer division: `quo * b + rem == a`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotient {
    pub quo: i64,
    pub rem: i64,
}

impl Operands {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// `a * b`, wrapping on overflow so the operation never fails
    pub fn product(self) -> i64 {
        self.a.wrapping_mul(self.b)
    }

    /// Truncating division of `a` by `b`.
    ///
    /// `i64::MIN / -1` wraps to `(i64::MIN, 0)`, which still satisfies
    /// `quo * b + rem == a` under wrapping arithmetic.
    pub fn quotient(self) -> Result<Quotient> {
        if self.b == 0 {
            return Err(DomainError::DivisionByZero { dividend: self.a });
        }
        Ok(Quotient {
            quo: self.a.wrapping_div(self.b),
            rem: self.a.wrapping_rem(self.b),
        })
    }
}
