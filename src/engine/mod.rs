// ============================================================================
// Engine Module
// Chained arithmetic, aggregation and the finiteness predicate
// ============================================================================

mod aggregate;
mod finite;
mod operation;

#[cfg(feature = "serde")]
pub use aggregate::sum_by_value;
pub use aggregate::{sum_by, sum_by_with_config, Lookup};
pub use finite::is_finite;
pub use operation::{add, divide, execute, multiply, subtract, Operation};
