// ============================================================================
// Rounding Configuration
// Precision and rounding policy shared by display and aggregation helpers
// ============================================================================

pub use crate::numeric::MAX_DECIMAL_POINTS;
use crate::numeric::{RoundingMode, VendError, VendResult, DEFAULT_DECIMAL_POINTS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How results are rounded for display.
///
/// Rounding clamps wider requests to [`MAX_DECIMAL_POINTS`]; deserialized
/// configurations are validated and reject them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedRoundingConfig"))]
pub struct RoundingConfig {
    /// Number of fractional digits in formatted output
    pub decimal_points: u32,

    /// Directional / tie-breaking policy
    pub mode: RoundingMode,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            decimal_points: DEFAULT_DECIMAL_POINTS,
            mode: RoundingMode::HalfUp,
        }
    }
}

impl RoundingConfig {
    /// Create a new configuration
    pub fn new(decimal_points: u32, mode: RoundingMode) -> Self {
        Self {
            decimal_points,
            mode,
        }
    }

    /// Builder method: Set number of fractional digits
    pub fn with_decimal_points(mut self, decimal_points: u32) -> Self {
        self.decimal_points = decimal_points;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VendResult<()> {
        if self.decimal_points > MAX_DECIMAL_POINTS {
            return Err(VendError::InvalidConfig(format!(
                "decimal points must be at most {}, got {}",
                MAX_DECIMAL_POINTS, self.decimal_points
            )));
        }
        Ok(())
    }
}

/// Wire form of [`RoundingConfig`], validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default)]
struct UncheckedRoundingConfig {
    decimal_points: u32,
    mode: RoundingMode,
}

#[cfg(feature = "serde")]
impl Default for UncheckedRoundingConfig {
    fn default() -> Self {
        let RoundingConfig {
            decimal_points,
            mode,
        } = RoundingConfig::default();
        Self {
            decimal_points,
            mode,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedRoundingConfig> for RoundingConfig {
    type Error = VendError;

    fn try_from(raw: UncheckedRoundingConfig) -> VendResult<Self> {
        let config = Self::new(raw.decimal_points, raw.mode);
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl RoundingConfig {
    /// Currency display: two places, ties away from zero
    pub fn currency() -> Self {
        Self::default()
    }

    /// Banker's rounding: two places, ties to the even neighbour
    pub fn bankers() -> Self {
        Self::new(2, RoundingMode::HalfEven)
    }

    /// Truncation towards zero at `decimal_points` places
    pub fn truncating(decimal_points: u32) -> Self {
        Self::new(decimal_points, RoundingMode::Down)
    }
}
