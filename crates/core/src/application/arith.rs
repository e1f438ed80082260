// Arith Service - stateless integer arithmetic

use crate::domain::{Operands, Quotient};
use crate::error::Result;
use tracing::debug;

/// Stateless service for the arithmetic methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithService;

impl ArithService {
    pub fn new() -> Self {
        Self
    }

    /// Multiply two integers
    pub fn multiply(&self, operands: Operands) -> i64 {
        debug!(a = operands.a, b = operands.b, "multiply");
        operands.product()
    }

    /// Divide two integers, returning quotient and remainder
    pub fn divide(&self, operands: Operands) -> Result<Quotient> {
        debug!(a = operands.a, b = operands.b, "divide");
        Ok(operands.quotient()?)
    }
}
