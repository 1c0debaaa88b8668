// ============================================================================
// Domain Module
// Configuration value objects
// ============================================================================

pub mod config;

pub use config::{RoundingConfig, MAX_DECIMAL_POINTS};
