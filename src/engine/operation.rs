// ============================================================================
// Operation Engine
// Strictly validated left-to-right fold of a binary decimal operation
// ============================================================================

use crate::numeric::{Operand, VendError, VendNumber, VendResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named binary decimal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Operation {
    /// Addition
    Plus,
    /// Subtraction (non-commutative)
    Minus,
    /// Multiplication
    Times,
    /// Division (non-commutative)
    DividedBy,
}

impl Operation {
    /// Operation name: `plus`, `minus`, `times` or `dividedBy`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Plus => "plus",
            Operation::Minus => "minus",
            Operation::Times => "times",
            Operation::DividedBy => "dividedBy",
        }
    }

    /// Apply the operation to a pair of decimal values.
    ///
    /// # Errors
    /// - `DivisionByZero` for `0 / 0`
    /// - `InvalidResult` if the step has no numeric result (`∞ - ∞`)
    #[inline]
    pub fn apply(self, lhs: VendNumber, rhs: VendNumber) -> VendResult<VendNumber> {
        match self {
            Operation::Plus => lhs.plus(rhs),
            Operation::Minus => lhs.minus(rhs),
            Operation::Times => lhs.times(rhs),
            Operation::DividedBy => lhs.divided_by(rhs),
        }
    }

    /// Fold `values` left to right and return the decimal result.
    ///
    /// Every operand, the first included, must be numeric; infinities are.
    /// The first bad operand in fold order aborts the fold.
    ///
    /// # Errors
    /// - `EmptyOperands` if `values` is empty
    /// - `InvalidOperand` for the first bad operand
    /// - `DivisionByZero` / `InvalidResult` from a fold step
    pub fn fold(self, values: &[Operand]) -> VendResult<VendNumber> {
        let (first, rest) = values
            .split_first()
            .ok_or(VendError::EmptyOperands { operation: self })?;

        let mut acc = VendNumber::resolve(first, 0).inspect_err(|err| self.reject(err))?;

        for (offset, operand) in rest.iter().enumerate() {
            let rhs = VendNumber::resolve(operand, offset + 1).inspect_err(|err| self.reject(err))?;
            acc = self.apply(acc, rhs).inspect_err(|err| self.reject(err))?;
        }

        Ok(acc)
    }

    /// Fold `values` and project the result to `f64`.
    ///
    /// A zero result is a valid result, and so is an infinite one
    /// (`2.57 / 0` is `+∞`).
    ///
    /// # Errors
    /// See [`Operation::fold`].
    pub fn execute(self, values: &[Operand]) -> VendResult<f64> {
        Ok(self.fold(values)?.to_f64())
    }

    fn reject(self, err: &VendError) {
        tracing::debug!(operation = self.name(), "operation rejected: {}", err);
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = VendError;

    fn from_str(s: &str) -> VendResult<Self> {
        match s {
            "plus" => Ok(Operation::Plus),
            "minus" => Ok(Operation::Minus),
            "times" => Ok(Operation::Times),
            "dividedBy" => Ok(Operation::DividedBy),
            other => Err(VendError::UnknownOperation(other.to_string())),
        }
    }
}

// ============================================================================
// Variadic Entry Points
// ============================================================================

/// Run `operation` over an ordered list of raw inputs.
pub fn execute<I>(operation: Operation, values: I) -> VendResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let operands: Vec<Operand> = values.into_iter().map(Into::into).collect();
    operation.execute(&operands)
}

/// Add a list of values.
///
/// # Example
/// ```
/// use vend_number::engine::add;
/// use vend_number::operands;
///
/// assert_eq!(add([0.1, 0.2]).unwrap(), 0.3);
/// assert_eq!(add(operands![1, "2", 3.5]).unwrap(), 6.5);
/// assert!(add(operands![1, None::<f64>]).is_err());
/// ```
pub fn add<I>(values: I) -> VendResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    execute(Operation::Plus, values)
}

/// Subtract each subsequent value from the first, left to right.
pub fn subtract<I>(values: I) -> VendResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    execute(Operation::Minus, values)
}

/// Multiply a list of values.
pub fn multiply<I>(values: I) -> VendResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    execute(Operation::Times, values)
}

/// Divide the first value by each subsequent value, left to right.
pub fn divide<I>(values: I) -> VendResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    execute(Operation::DividedBy, values)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::vn;
    use crate::operands;

    /// Inputs that must be rejected wherever they appear.
    fn bad_operands() -> Vec<Operand> {
        vec![
            Operand::Absent,
            Operand::from(f64::NAN),
            Operand::from(false),
            Operand::from(true),
            Operand::from(""),
            Operand::from("not a number"),
        ]
    }

    #[test]
    fn test_operation_names() {
        for op in [
            Operation::Plus,
            Operation::Minus,
            Operation::Times,
            Operation::DividedBy,
        ] {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), op.name());
        }
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(VendError::UnknownOperation("modulo".to_string()))
        );
    }

    #[test]
    fn test_add() {
        assert_eq!(add([0.1, 0.2]).unwrap(), 0.3);
        assert_eq!(add([0.01, 0.02]).unwrap(), 0.03);
        assert_eq!(add([2.05652, 0.30848]).unwrap(), 2.365);
        assert_eq!(add([-1, 6]).unwrap(), 5.0);
        assert_eq!(add([-1234, -1234]).unwrap(), -2468.0);
        assert_eq!(add([2.57, 0.0]).unwrap(), 2.57);
        assert_eq!(add([0.0, 2.57]).unwrap(), 2.57);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract([0.1, 0.2]).unwrap(), -0.1);
        assert_eq!(subtract([2.05652, 0.30848]).unwrap(), 1.74804);
        assert_eq!(subtract([-1, -6]).unwrap(), 5.0);
        assert_eq!(subtract([0.0, 2.57]).unwrap(), -2.57);
    }

    #[test]
    fn test_zero_result_is_not_an_error() {
        assert_eq!(subtract([5, 5]).unwrap(), 0.0);
        assert_eq!(subtract([-1234, -1234]).unwrap(), 0.0);
        assert_eq!(multiply([2.57, 0.0]).unwrap(), 0.0);
        assert_eq!(divide([0.0, 2.57]).unwrap(), 0.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply([0.1, 0.2]).unwrap(), 0.02);
        assert_eq!(multiply([0.01, 0.02]).unwrap(), 0.0002);
        assert_eq!(multiply([2.05652, 0.30848]).unwrap(), 0.6343952896);
        assert_eq!(multiply([-1234, -1234]).unwrap(), 1522756.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide([0.1, 0.2]).unwrap(), 0.5);
        assert_eq!(divide([0.01, 0.02]).unwrap(), 0.5);
        assert_eq!(divide([-1234, -1234]).unwrap(), 1.0);
        assert_eq!(divide([3, 2, 1]).unwrap(), 1.5);
        assert_eq!(divide([1, 3]).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide([2.57, 0.0]).unwrap(), f64::INFINITY);
        assert_eq!(divide([-2.57, 0.0]).unwrap(), f64::NEG_INFINITY);
        assert_eq!(divide(["1", "2", "0"]).unwrap(), f64::INFINITY);
        assert_eq!(divide([0, 0]), Err(VendError::DivisionByZero));
        assert_eq!(divide(["0.00", "5", "0"]), Err(VendError::DivisionByZero));
    }

    #[test]
    fn test_fold_is_left_to_right() {
        assert_eq!(subtract([1, 2, 3]).unwrap(), -4.0);
        assert_eq!(subtract([1, 2, 3, 4]).unwrap(), -8.0);
        assert_eq!(subtract(1..=10).unwrap(), -53.0);
        assert_eq!(divide([100, 10, 5]).unwrap(), 2.0);
    }

    #[test]
    fn test_unlimited_arguments() {
        assert_eq!(add(1..=10).unwrap(), 55.0);
        assert_eq!(multiply(1..=10).unwrap(), 3628800.0);
        assert_eq!(add([7]).unwrap(), 7.0);
    }

    #[test]
    fn test_accepts_strings_numbers_and_decimals() {
        assert_eq!(add(["10", "5"]).unwrap(), 15.0);
        assert_eq!(subtract(["-10", "5"]).unwrap(), -15.0);
        assert_eq!(multiply(operands![vn(-10), 5]).unwrap(), -50.0);
        assert_eq!(divide(operands![-10, vn(5)]).unwrap(), -2.0);
        assert_eq!(add(operands!["1e2", 0.5, 1u8]).unwrap(), 101.5);
    }

    #[test]
    fn test_does_not_mutate_inputs() {
        let a = vn(10);
        let operands = vec![Operand::from(a), Operand::from(2)];
        Operation::Plus.execute(&operands).unwrap();
        assert_eq!(operands[0], Operand::Decimal(vn(10)));
        assert_eq!(a, vn(10));
    }

    #[test]
    fn test_rejects_bad_operand_in_any_position() {
        for op in [
            Operation::Plus,
            Operation::Minus,
            Operation::Times,
            Operation::DividedBy,
        ] {
            for bad in bad_operands() {
                let alone = op.execute(std::slice::from_ref(&bad)).unwrap_err();
                assert!(
                    matches!(alone, VendError::InvalidOperand { position: 0, .. }),
                    "{op} alone {bad}"
                );
                assert_eq!(
                    alone.operand().map(ToString::to_string),
                    Some(bad.to_string())
                );

                let first = op.execute(&[bad.clone(), Operand::from(1)]);
                assert!(
                    matches!(first, Err(VendError::InvalidOperand { position: 0, .. })),
                    "{op} first {bad}"
                );

                let later = op.execute(&[Operand::from(4), Operand::from(2), bad.clone()]);
                assert!(
                    matches!(later, Err(VendError::InvalidOperand { position: 2, .. })),
                    "{op} later {bad}"
                );
            }
        }
    }

    #[test]
    fn test_reports_first_bad_operand() {
        let err = add(operands![1, "x", None::<f64>]).unwrap_err();
        assert_eq!(
            err,
            VendError::InvalidOperand {
                position: 1,
                value: Operand::from("x"),
            }
        );
        assert_eq!(err.operand(), Some(&Operand::from("x")));
    }

    #[test]
    fn test_infinite_operands() {
        assert_eq!(add([f64::INFINITY, 1.0]).unwrap(), f64::INFINITY);
        assert_eq!(add([1.0, f64::INFINITY]).unwrap(), f64::INFINITY);
        assert_eq!(subtract(["1", "Infinity"]).unwrap(), f64::NEG_INFINITY);
        assert_eq!(multiply([f64::NEG_INFINITY, -2.0]).unwrap(), f64::INFINITY);
        assert_eq!(divide([5.0, f64::INFINITY]).unwrap(), 0.0);
        assert_eq!(add(["1e400"]).unwrap(), f64::INFINITY);
        assert_eq!(divide(operands![2.57, 0, 10]).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_not_a_number_result_is_an_error() {
        assert_eq!(
            add([f64::INFINITY, f64::NEG_INFINITY]),
            Err(VendError::InvalidResult {
                operation: Operation::Plus
            })
        );
        assert_eq!(
            divide([f64::INFINITY, f64::INFINITY]),
            Err(VendError::InvalidResult {
                operation: Operation::DividedBy
            })
        );
        assert!(multiply(operands![0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_whole_string_must_be_numeric() {
        for junk in ["12abc", "1.5 apples", "0x10", "NaN"] {
            assert_eq!(
                add(operands![1, junk]),
                Err(VendError::InvalidOperand {
                    position: 1,
                    value: Operand::from(junk),
                }),
                "{junk}"
            );
        }
        assert_eq!(add(operands![" 12 ", "1e1"]).unwrap(), 22.0);
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(
            add(Vec::<f64>::new()),
            Err(VendError::EmptyOperands {
                operation: Operation::Plus
            })
        );
    }

    #[test]
    fn test_values_beyond_decimal_range() {
        let max = "79228162514264337593543950335";
        assert_eq!(
            multiply([max, "10"]).unwrap(),
            max.parse::<f64>().unwrap() * 10.0
        );
        assert_eq!(add([f64::MAX, 1.0]).unwrap(), f64::MAX);
        assert_eq!(add([f64::MAX, 0.0]).unwrap(), f64::MAX);
        assert_eq!(divide([f64::MAX, 1.0]).unwrap(), f64::MAX);
        assert_eq!(multiply([1e30, 0.0]).unwrap(), 0.0);
        assert_eq!(subtract([1e30, 1e30]).unwrap(), 0.0);
        assert_eq!(multiply([f64::MAX, 10.0]).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_fold_keeps_exact_decimal() {
        let exact = Operation::Plus
            .fold(&operands!["12345678901234567.1", "0.02"])
            .unwrap();
        assert_eq!(exact.to_string(), "12345678901234567.12");
    }
}
