// ============================================================================
// Logging
// fmt subscriber driven by RUST_LOG
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; `default_filter` (e.g. `"vend_number=debug"`)
/// applies when it is unset or invalid. Returns an error instead of panicking
/// if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let _ = init_tracing("vend_number=trace");
        assert!(init_tracing("vend_number=trace").is_err());
    }
}
