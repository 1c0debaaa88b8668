// ============================================================================
// Numeric Module
// Decimal values, coercion of raw inputs and rounding
// ============================================================================
//
// This module provides:
// - VendNumber: immutable decimal value with falsy-safe coercion
// - Operand: tagged union over the raw inputs the facade accepts
// - RoundingMode: the nine rounding modes and fixed-point formatting
// - VendError: error types for validation and arithmetic
//
// Design principles:
// - Decimals are built from strings, never from binary floating-point bits
// - Magnitudes beyond the decimal range are carried as f64, never zeroed
// - Coercion is permissive; arithmetic returns Result (no panics)
// - Values are never mutated

mod errors;
pub(crate) mod literal;
mod operand;
mod rounding;
mod vend_number;

pub use errors::{VendError, VendResult};
pub use operand::Operand;
pub use rounding::{
    round, round_with_config, round_with_mode, RoundingMode, DEFAULT_DECIMAL_POINTS,
    MAX_DECIMAL_POINTS, ROUNDING_MODES,
};
pub use vend_number::{vn, VendNumber};
