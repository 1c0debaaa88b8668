// ============================================================================
// Finiteness Predicate
// Permissive, non-failing test for usable finite numbers
// ============================================================================

use crate::numeric::{Operand, VendNumber};

/// Whether `value` denotes a finite number.
///
/// Unlike the operation engine this never fails: absent values, booleans,
/// non-numeric strings and infinities (including `"Infinity"` and literals
/// such as `"1e400"` that overflow `f64`) simply report `false`.
///
/// # Example
/// ```
/// use vend_number::engine::is_finite;
/// use vend_number::numeric::vn;
///
/// assert!(is_finite("123.45"));
/// assert!(is_finite(vn(5)));
/// assert!(!is_finite(f64::INFINITY));
/// assert!(!is_finite(None::<f64>));
/// ```
pub fn is_finite(value: impl Into<Operand>) -> bool {
    match value.into() {
        Operand::Absent | Operand::Bool(_) => false,
        Operand::Number(n) => n.is_finite(),
        Operand::Text(s) => s.parse::<VendNumber>().is_ok_and(|v| v.is_finite()),
        Operand::Decimal(v) => v.is_finite(),
    }
}
