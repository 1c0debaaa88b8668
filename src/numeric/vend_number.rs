// ============================================================================
// Vend Number
// Immutable decimal value with falsy-safe coercion and checked arithmetic
// ============================================================================

use super::errors::{VendError, VendResult};
use super::literal::Literal;
use super::operand::Operand;
use super::rounding::{self, RoundingMode};
use crate::engine::Operation;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decimal value that is exact within the range of [`rust_decimal::Decimal`].
///
/// Magnitudes beyond that range (about `±7.9e28`) and infinities are carried
/// as `f64` instead, so they are never silently replaced. The value is never
/// mutated: every arithmetic step returns a new value.
///
/// # Example
/// ```
/// use vend_number::numeric::{vn, RoundingMode, VendNumber};
///
/// let price = vn("19.995");
/// assert_eq!(price.to_fixed(2, RoundingMode::HalfUp), "20.00");
///
/// // Falsy and malformed inputs coerce to zero.
/// assert!(VendNumber::new(None::<f64>).is_zero());
/// assert!(vn("not a number").is_zero());
///
/// // Large values do not.
/// assert!(!vn(1e30).is_exact());
/// assert_eq!(vn(1e30).to_string(), "1000000000000000000000000000000");
/// ```
#[derive(Clone, Copy)]
pub struct VendNumber(Repr);

#[derive(Clone, Copy)]
enum Repr {
    Exact(Decimal),
    /// Beyond the decimal range: integral or infinite, never NaN
    Wide(f64),
}

impl VendNumber {
    /// Zero value
    pub const ZERO: Self = Self(Repr::Exact(Decimal::ZERO));

    /// One (1)
    pub const ONE: Self = Self(Repr::Exact(Decimal::ONE));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from any raw input. Never fails.
    ///
    /// Falsy inputs (absent, `false`, NaN, `0`, `""`) yield zero. Other inputs
    /// are rendered to their canonical string and parsed as a decimal, so
    /// `1.005` becomes exactly `1.005`. Input that is not numeric also yields
    /// zero.
    pub fn new(value: impl Into<Operand>) -> Self {
        let operand = value.into();
        if operand.is_falsy() {
            return Self::ZERO;
        }

        Self::resolve(&operand, 0).unwrap_or_else(|err| {
            tracing::trace!("coercing {} to zero: {}", operand, err);
            Self::ZERO
        })
    }

    /// Strictly convert a raw input.
    ///
    /// # Errors
    /// Returns `InvalidOperand` if the input is not numeric.
    pub fn try_from_operand(value: impl Into<Operand>) -> VendResult<Self> {
        Self::resolve(&value.into(), 0)
    }

    /// Wrap an existing decimal.
    #[inline]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(Repr::Exact(value))
    }

    /// Strict conversion used by the operation engine; `position` is reported
    /// back in errors.
    pub(crate) fn resolve(operand: &Operand, position: usize) -> VendResult<Self> {
        let resolved = match operand {
            Operand::Decimal(v) => Some(*v),
            Operand::Number(n) => Self::from_f64(*n),
            Operand::Text(s) => Self::parse_text(s),
            Operand::Absent | Operand::Bool(_) => None,
        };

        resolved.ok_or_else(|| VendError::InvalidOperand {
            position,
            value: operand.clone(),
        })
    }

    /// `None` only for NaN.
    fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        if value.is_infinite() {
            return Some(Self(Repr::Wide(value)));
        }
        Self::parse_text(&value.to_string())
    }

    /// `None` when `text` is not a numeric literal.
    fn parse_text(text: &str) -> Option<Self> {
        let text = text.trim();
        match text {
            "Infinity" | "+Infinity" => return Some(Self(Repr::Wide(f64::INFINITY))),
            "-Infinity" => return Some(Self(Repr::Wide(f64::NEG_INFINITY))),
            _ => {}
        }

        let literal = Literal::parse(text)?;
        let exact = literal
            .to_plain()
            .and_then(|plain| Decimal::from_str(&plain).ok());

        match exact {
            Some(mut value) => {
                if literal.is_negative() {
                    value.set_sign_negative(true);
                }
                Some(Self(Repr::Exact(value)))
            }
            // f64 accepts every literal the lexer does.
            None => text.parse::<f64>().ok().map(|wide| Self(Repr::Wide(wide))),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying decimal, if the value is within the decimal range.
    #[inline]
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match &self.0 {
            Repr::Exact(value) => Some(value),
            Repr::Wide(_) => None,
        }
    }

    /// Consume into the underlying decimal, if the value is within the
    /// decimal range.
    #[inline]
    pub const fn into_decimal(self) -> Option<Decimal> {
        match self.0 {
            Repr::Exact(value) => Some(value),
            Repr::Wide(_) => None,
        }
    }

    /// Check if value is held as an exact decimal.
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self.0, Repr::Exact(_))
    }

    /// Check if value is neither positive nor negative infinity.
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self.0 {
            Repr::Exact(_) => true,
            Repr::Wide(value) => value.is_finite(),
        }
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self.0 {
            Repr::Exact(value) => value.is_zero(),
            Repr::Wide(_) => false,
        }
    }

    /// Check if value carries a negative sign (including `-0`).
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        match self.0 {
            Repr::Exact(value) => value.is_sign_negative(),
            Repr::Wide(value) => value.is_sign_negative(),
        }
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_sign_negative() && !self.is_zero()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_sign_negative() && !self.is_zero()
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        match self.0 {
            Repr::Exact(value) => Self(Repr::Exact(value.abs())),
            Repr::Wide(value) => Self(Repr::Wide(value.abs())),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Addition.
    ///
    /// # Errors
    /// Returns `InvalidResult` for `∞ + -∞`.
    pub fn plus(self, rhs: Self) -> VendResult<Self> {
        self.combine(rhs, Operation::Plus)
    }

    /// Subtraction.
    ///
    /// # Errors
    /// Returns `InvalidResult` for `∞ - ∞`.
    pub fn minus(self, rhs: Self) -> VendResult<Self> {
        self.combine(rhs, Operation::Minus)
    }

    /// Multiplication.
    ///
    /// # Errors
    /// Returns `InvalidResult` for `0 × ∞`.
    pub fn times(self, rhs: Self) -> VendResult<Self> {
        self.combine(rhs, Operation::Times)
    }

    /// Division. Quotients are exact up to 28 significant digits; a non-zero
    /// value divided by zero is infinite.
    ///
    /// # Errors
    /// - `DivisionByZero` for `0 / 0`
    /// - `InvalidResult` for `∞ / ∞`
    pub fn divided_by(self, rhs: Self) -> VendResult<Self> {
        if self.is_zero() && rhs.is_zero() {
            return Err(VendError::DivisionByZero);
        }
        self.combine(rhs, Operation::DividedBy)
    }

    fn combine(self, rhs: Self, operation: Operation) -> VendResult<Self> {
        if let (Repr::Exact(lhs), Repr::Exact(rhs)) = (self.0, rhs.0) {
            let exact = match operation {
                Operation::Plus => lhs.checked_add(rhs),
                Operation::Minus => lhs.checked_sub(rhs),
                Operation::Times => lhs.checked_mul(rhs),
                Operation::DividedBy => lhs.checked_div(rhs),
            };
            if let Some(value) = exact {
                return Ok(Self(Repr::Exact(value)));
            }
        }

        // Left the decimal range (or divided by zero): continue in f64.
        let (lhs, rhs) = (self.to_f64(), rhs.to_f64());
        let result = match operation {
            Operation::Plus => lhs + rhs,
            Operation::Minus => lhs - rhs,
            Operation::Times => lhs * rhs,
            Operation::DividedBy => lhs / rhs,
        };
        Self::from_f64(result).ok_or(VendError::InvalidResult { operation })
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `decimal_points` fractional digits. Values beyond the decimal
    /// range are already integral and come back unchanged.
    pub fn round_dp(self, decimal_points: u32, mode: RoundingMode) -> Self {
        match self.0 {
            Repr::Exact(value) => {
                Self(Repr::Exact(rounding::round_decimal(value, decimal_points, mode)))
            }
            Repr::Wide(_) => self,
        }
    }

    /// Format with exactly `decimal_points` fractional digits.
    ///
    /// The sign survives rounding to zero: `-0.001` rounded down to two
    /// places is `"-0.00"`. Infinities render as `"Infinity"` and
    /// `"-Infinity"`.
    pub fn to_fixed(self, decimal_points: u32, mode: RoundingMode) -> String {
        match self.0 {
            Repr::Exact(value) => rounding::format_fixed(value, decimal_points, mode),
            Repr::Wide(value) if value.is_infinite() => self.to_string(),
            Repr::Wide(value) => {
                let mut out = value.to_string();
                rounding::pad_fraction(&mut out, "", decimal_points);
                out
            }
        }
    }

    /// Project to `f64` through the canonical digit string.
    pub fn to_f64(self) -> f64 {
        match self.0 {
            Repr::Exact(value) if value.is_zero() => {
                if value.is_sign_negative() {
                    -0.0
                } else {
                    0.0
                }
            }
            // Decimal renders plain digits, which always parse.
            Repr::Exact(value) => value.to_string().parse().unwrap_or(f64::NAN),
            Repr::Wide(value) => value,
        }
    }
}

/// Quick constructor: `vn(123)` is the same as `VendNumber::new(123)`.
pub fn vn(value: impl Into<Operand>) -> VendNumber {
    VendNumber::new(value)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for VendNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for VendNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VendNumber {}

impl PartialOrd for VendNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VendNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::Exact(lhs), Repr::Exact(rhs)) => lhs.cmp(&rhs),
            (Repr::Wide(lhs), Repr::Wide(rhs)) => lhs.total_cmp(&rhs),
            // Wide magnitudes lie beyond every exact value.
            (Repr::Wide(lhs), Repr::Exact(_)) => {
                if lhs.is_sign_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Repr::Exact(_), Repr::Wide(rhs)) => {
                if rhs.is_sign_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }
}

impl Hash for VendNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Repr::Exact(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            Repr::Wide(value) => {
                1u8.hash(state);
                value.to_bits().hash(state);
            }
        }
    }
}

impl Neg for VendNumber {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self.0 {
            Repr::Exact(value) => Self(Repr::Exact(-value)),
            Repr::Wide(value) => Self(Repr::Wide(-value)),
        }
    }
}

impl From<Decimal> for VendNumber {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl TryFrom<VendNumber> for Decimal {
    type Error = VendError;

    fn try_from(value: VendNumber) -> VendResult<Self> {
        value.into_decimal().ok_or_else(|| VendError::OutOfRange {
            value: value.to_string(),
        })
    }
}

impl fmt::Debug for VendNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VendNumber({})", self)
    }
}

impl fmt::Display for VendNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Exact(value) => fmt::Display::fmt(&value, f),
            Repr::Wide(value) if value.is_infinite() => {
                f.write_str(if value < 0.0 { "-Infinity" } else { "Infinity" })
            }
            Repr::Wide(value) => write!(f, "{}", value),
        }
    }
}

impl FromStr for VendNumber {
    type Err = VendError;

    /// Strict parse; see [`VendNumber::try_from_operand`].
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "1.5e3" -> 1500
    /// - "-Infinity" -> -∞
    /// - "abc" -> `InvalidOperand`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(&Operand::Text(s.to_string()), 0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for VendNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for VendNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
