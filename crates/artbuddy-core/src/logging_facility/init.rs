use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Where log output goes and how much of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, `artbuddy=debug`
    Development,
    /// JSON lines, `artbuddy=info`
    Production,
    /// Installs nothing; tests use [`init_test_capture`](super::init_test_capture) instead
    Test,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "artbuddy=debug",
            Profile::Production | Profile::Test => "artbuddy=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has any effect. `RUST_LOG` overrides the profile's
/// default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            // Tests install their own subscriber through init_test_capture
            Profile::Test => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(Profile::Development.default_directive(), "artbuddy=debug");
        assert_eq!(Profile::Production.default_directive(), "artbuddy=info");
    }
}
