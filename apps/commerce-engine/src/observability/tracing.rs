//! Console tracing initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Initialize a console subscriber with env-filter support.
///
/// `RUST_LOG` overrides `default_filter`. Call once per process, typically
/// from the host binary or a test harness.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_reports_error() {
        // First call may fail if another test installed a subscriber; the
        // second call must fail because this one did.
        let _ = init_tracing("info");
        assert!(init_tracing("debug").is_err());
    }
}
