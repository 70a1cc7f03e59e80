//! Logging initialization for hosts embedding the diff engine.
//!
//! Comparison and rendering are silent by default; the engine only emits
//! trace-level events at the fallback boundaries. Hosts that want to see
//! them call [`init`] once at startup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development.
    Development,
    /// Compact output routed through the test writer so cargo captures it.
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber for the selected profile.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("attest=debug")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::fmt()
                .compact()
                .with_test_writer()
                .with_env_filter(EnvFilter::new("attest=trace"))
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }
}
