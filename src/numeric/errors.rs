// ============================================================================
// Numeric Errors
// Error types for decimal coercion, rounding and chained operations
// ============================================================================

use super::operand::Operand;
use crate::engine::Operation;
use thiserror::Error;

/// Errors that can occur while validating operands or folding an operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VendError {
    /// Operand is not a numeric string, number or decimal value
    #[error("invalid operand at position {position}: expected a numeric string or number, got {value}")]
    InvalidOperand { position: usize, value: Operand },

    /// Value lies beyond the range of `rust_decimal::Decimal`
    #[error("{value} is out of the representable decimal range")]
    OutOfRange { value: String },

    /// Operation was called without any operands
    #[error("no operands supplied to `{operation}`")]
    EmptyOperands { operation: Operation },

    /// Zero divided by zero
    #[error("division by zero")]
    DivisionByZero,

    /// A step produced no number at all (`∞ - ∞`, `0 × ∞`, `∞ / ∞`)
    #[error("`{operation}` produced a result that is not a number")]
    InvalidResult { operation: Operation },

    /// Rounding mode identity outside 0..=8
    #[error("invalid rounding mode identity: {0}")]
    InvalidRoundingMode(u8),

    /// Rounding mode name is not one of the nine known names
    #[error("unknown rounding mode: {0}")]
    UnknownRoundingMode(String),

    /// Operation name is not one of plus, minus, times, dividedBy
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Rounding configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl VendError {
    /// The offending operand, if the error was caused by one.
    pub fn operand(&self) -> Option<&Operand> {
        match self {
            VendError::InvalidOperand { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Result type alias for numeric operations
pub type VendResult<T> = Result<T, VendError>;
