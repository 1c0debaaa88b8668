// ============================================================================
// Vend Number Library
// Precision-safe decimal arithmetic with strict validation and rounding modes
// ============================================================================

//! # Vend Number
//!
//! A thin, precision-safe layer over [`rust_decimal`] for money-like values.
//!
//! ## Features
//!
//! - **Falsy-safe coercion**: absent, `false`, NaN and empty inputs become zero
//! - **Nine rounding modes** with fixed identities 0-8, formatted to exact width
//! - **Variadic chained arithmetic** that fails fast on non-numeric operands
//! - **Aggregation** over dirty collections that skips unusable items
//!
//! ## Example
//!
//! ```rust
//! use vend_number::prelude::*;
//!
//! // Decimal-exact arithmetic, projected back to f64
//! assert_eq!(add([0.1, 0.2]).unwrap(), 0.3);
//! assert_eq!(subtract([1, 2, 3]).unwrap(), -4.0);
//!
//! // Mixed inputs, including existing decimal values
//! assert_eq!(multiply(operands!["1.5", 2, vn(10)]).unwrap(), 30.0);
//!
//! // Invalid operands are errors, never silent zeros
//! assert!(divide(operands![10, "ten"]).is_err());
//!
//! // Display rounding keeps trailing zeros
//! assert_eq!(round(1.005, 2), "1.01");
//! assert_eq!(round_with_mode(-2.55, 1, RoundingMode::HalfCeil), "-2.5");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;
pub mod utils;

/// Build a `Vec<Operand>` from heterogeneous values.
///
/// ```
/// use vend_number::numeric::{vn, Operand};
/// use vend_number::operands;
///
/// let values = operands![1, "2.5", 3.0, vn(4), None::<f64>];
/// assert_eq!(values.len(), 5);
/// assert_eq!(values[4], Operand::Absent);
/// ```
#[macro_export]
macro_rules! operands {
    () => {
        ::std::vec::Vec::<$crate::numeric::Operand>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::numeric::Operand::from($value)),+]
    };
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::RoundingConfig;
    #[cfg(feature = "serde")]
    pub use crate::engine::sum_by_value;
    pub use crate::engine::{
        add, divide, is_finite, multiply, subtract, sum_by, sum_by_with_config, Lookup,
        Operation,
    };
    pub use crate::numeric::{
        round, round_with_config, round_with_mode, vn, Operand, RoundingMode, VendError,
        VendNumber, VendResult, ROUNDING_MODES,
    };
    pub use crate::operands;
}
