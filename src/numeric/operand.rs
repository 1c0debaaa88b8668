// ============================================================================
// Operand
// Tagged union over the raw inputs accepted at the API boundary
// ============================================================================

use super::vend_number::VendNumber;
use rust_decimal::Decimal;
use std::fmt;

/// A raw input handed to the facade.
///
/// Every public operation accepts `impl Into<Operand>`, so callers pass
/// numbers, strings, booleans, options and decimals directly. The variant is
/// resolved once by [`VendNumber::new`] (permissive) or
/// [`VendNumber::try_from_operand`] (strict).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// No value (`None`, JSON `null`)
    #[default]
    Absent,
    /// A boolean; never numeric
    Bool(bool),
    /// A binary floating-point number
    Number(f64),
    /// A string that may hold a numeric literal
    Text(String),
    /// An already constructed decimal value
    Decimal(VendNumber),
}

impl Operand {
    /// Falsy inputs coerce straight to zero: absent, `false`, NaN, `±0` and `""`.
    pub fn is_falsy(&self) -> bool {
        match self {
            Operand::Absent => true,
            Operand::Bool(b) => !b,
            Operand::Number(n) => n.is_nan() || *n == 0.0,
            Operand::Text(s) => s.is_empty(),
            Operand::Decimal(_) => false,
        }
    }

    /// Returns the decimal value if this operand already is one.
    pub fn as_decimal(&self) -> Option<&VendNumber> {
        match self {
            Operand::Decimal(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Absent => write!(f, "<absent>"),
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Text(s) => write!(f, "{:?}", s),
            Operand::Decimal(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<f32> for Operand {
    /// Widened through the `f32` shortest representation, so `0.1f32`
    /// becomes `0.1` rather than `0.100000001490116...`.
    fn from(value: f32) -> Self {
        Operand::Number(value.to_string().parse().unwrap_or(f64::NAN))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Decimal(VendNumber::from_decimal(Decimal::from(value)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_ref {
    ($($t:ty),*) => {
        $(
            impl From<&$t> for Operand {
                fn from(value: &$t) -> Self {
                    Operand::from(*value)
                }
            }
        )*
    };
}

impl_from_ref!(f32, f64, bool, Decimal, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Decimal(VendNumber::from_decimal(value))
    }
}

impl From<VendNumber> for Operand {
    fn from(value: VendNumber) -> Self {
        Operand::Decimal(value)
    }
}

impl From<&VendNumber> for Operand {
    fn from(value: &VendNumber) -> Self {
        Operand::Decimal(*value)
    }
}

impl From<&Operand> for Operand {
    fn from(value: &Operand) -> Self {
        value.clone()
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Absent, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<&serde_json::Value> for Operand {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Operand::Absent,
            Value::Bool(b) => Operand::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| Operand::Text(n.to_string()), Operand::Number),
            Value::String(s) => Operand::Text(s.clone()),
            // Containers never lex as numbers; keep their JSON for diagnostics.
            other => Operand::Text(other.to_string()),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Operand {
    fn from(value: serde_json::Value) -> Self {
        Operand::from(&value)
    }
}
