// ============================================================================
// Rounding
// The nine rounding modes and fixed-point string formatting
// ============================================================================

use super::errors::{VendError, VendResult};
use super::operand::Operand;
use super::vend_number::VendNumber;
use crate::domain::RoundingConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional digits used when the caller does not choose one.
pub const DEFAULT_DECIMAL_POINTS: u32 = 2;

/// Largest number of fractional digits the decimal type can carry. Wider
/// requests are clamped to it.
pub const MAX_DECIMAL_POINTS: u32 = 28;

/// Directional and tie-breaking rounding policy.
///
/// The integer identities (0-8) are fixed and stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum RoundingMode {
    /// Rounds away from zero
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_UP"))]
    Up = 0,
    /// Rounds towards zero
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_DOWN"))]
    Down = 1,
    /// Rounds towards positive infinity
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_CEIL"))]
    Ceil = 2,
    /// Rounds towards negative infinity
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_FLOOR"))]
    Floor = 3,
    /// Nearest neighbour; ties away from zero
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_HALF_UP"))]
    HalfUp = 4,
    /// Nearest neighbour; ties towards zero
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_HALF_DOWN"))]
    HalfDown = 5,
    /// Nearest neighbour; ties towards the even neighbour
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_HALF_EVEN"))]
    HalfEven = 6,
    /// Nearest neighbour; ties towards positive infinity
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_HALF_CEIL"))]
    HalfCeil = 7,
    /// Nearest neighbour; ties towards negative infinity
    #[cfg_attr(feature = "serde", serde(rename = "ROUND_HALF_FLOOR"))]
    HalfFloor = 8,
}

/// Name to mode lookup, ordered by identity.
pub const ROUNDING_MODES: [(&str, RoundingMode); 9] = [
    ("ROUND_UP", RoundingMode::Up),
    ("ROUND_DOWN", RoundingMode::Down),
    ("ROUND_CEIL", RoundingMode::Ceil),
    ("ROUND_FLOOR", RoundingMode::Floor),
    ("ROUND_HALF_UP", RoundingMode::HalfUp),
    ("ROUND_HALF_DOWN", RoundingMode::HalfDown),
    ("ROUND_HALF_EVEN", RoundingMode::HalfEven),
    ("ROUND_HALF_CEIL", RoundingMode::HalfCeil),
    ("ROUND_HALF_FLOOR", RoundingMode::HalfFloor),
];

impl RoundingMode {
    /// All modes, ordered by identity.
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceil,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfCeil,
        RoundingMode::HalfFloor,
    ];

    /// Fixed integer identity (0-8).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Constant name, e.g. `ROUND_HALF_UP`.
    pub const fn name(self) -> &'static str {
        ROUNDING_MODES[self as usize].0
    }

    /// Whether the mode only decides exact midpoints (the `HALF_*` family).
    pub const fn is_half(self) -> bool {
        matches!(
            self,
            RoundingMode::HalfUp
                | RoundingMode::HalfDown
                | RoundingMode::HalfEven
                | RoundingMode::HalfCeil
                | RoundingMode::HalfFloor
        )
    }

    /// Strategy for a value of the given sign. `HALF_CEIL` and `HALF_FLOOR`
    /// have no sign-independent counterpart.
    fn strategy(self, negative: bool) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceil => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfCeil if negative => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfCeil => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfFloor if negative => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfFloor => RoundingStrategy::MidpointTowardZero,
        }
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = VendError;

    fn try_from(id: u8) -> VendResult<Self> {
        RoundingMode::ALL
            .get(id as usize)
            .copied()
            .ok_or(VendError::InvalidRoundingMode(id))
    }
}

impl From<RoundingMode> for u8 {
    fn from(mode: RoundingMode) -> Self {
        mode.id()
    }
}

impl FromStr for RoundingMode {
    type Err = VendError;

    /// Parse a constant name; case-insensitive, `ROUND_` prefix optional.
    fn from_str(s: &str) -> VendResult<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let wanted = if upper.starts_with("ROUND_") {
            upper
        } else {
            format!("ROUND_{}", upper)
        };

        ROUNDING_MODES
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, mode)| *mode)
            .ok_or_else(|| VendError::UnknownRoundingMode(s.to_string()))
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Rounding and Formatting
// ============================================================================

#[inline]
pub(crate) fn clamp_decimal_points(decimal_points: u32) -> u32 {
    decimal_points.min(MAX_DECIMAL_POINTS)
}

pub(crate) fn round_decimal(value: Decimal, decimal_points: u32, mode: RoundingMode) -> Decimal {
    value.round_dp_with_strategy(
        clamp_decimal_points(decimal_points),
        mode.strategy(value.is_sign_negative()),
    )
}

/// Round and render with exactly `decimal_points` fractional digits
/// (at most [`MAX_DECIMAL_POINTS`]).
pub(crate) fn format_fixed(value: Decimal, decimal_points: u32, mode: RoundingMode) -> String {
    let rounded = round_decimal(value, decimal_points, mode).abs().to_string();
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut out = String::with_capacity(int_part.len() + MAX_DECIMAL_POINTS as usize + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(int_part);
    pad_fraction(&mut out, frac_part, decimal_points);
    out
}

/// Append `.` and `frac_part` zero-padded to the clamped width.
pub(crate) fn pad_fraction(out: &mut String, frac_part: &str, decimal_points: u32) {
    let width = clamp_decimal_points(decimal_points) as usize;
    if width > 0 {
        out.push('.');
        out.push_str(frac_part);
        out.extend(std::iter::repeat_n('0', width.saturating_sub(frac_part.len())));
    }
}

/// Round `value` half-up to `decimal_points` fractional digits.
///
/// Returns a string because trailing zeros and the sign of zero matter for
/// display. Non-numeric input is coerced to zero first.
///
/// # Example
/// ```
/// use vend_number::numeric::round;
///
/// assert_eq!(round(1.005, 2), "1.01");
/// assert_eq!(round(1, 3), "1.000");
/// assert_eq!(round("junk", 2), "0.00");
/// ```
pub fn round(value: impl Into<Operand>, decimal_points: u32) -> String {
    round_with_mode(value, decimal_points, RoundingMode::HalfUp)
}

/// Round `value` to `decimal_points` fractional digits with `mode`.
pub fn round_with_mode(
    value: impl Into<Operand>,
    decimal_points: u32,
    mode: RoundingMode,
) -> String {
    VendNumber::new(value).to_fixed(decimal_points, mode)
}

/// Round `value` with the decimal points and mode of `config`.
pub fn round_with_config(value: impl Into<Operand>, config: &RoundingConfig) -> String {
    round_with_mode(value, config.decimal_points, config.mode)
}

// ============================================================================
// Tests
// ============================================================================
