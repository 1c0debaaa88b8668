// ============================================================================
// Utilities Module
// Logging setup for binaries and demos embedding the library
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
