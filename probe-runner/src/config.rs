//! Runner configuration
//!
//! The probe is deliberately not configurable from the outside: the target
//! and the delay are built-in constants. They are still carried in a
//! [`Config`] so startup can validate them and tests can point the poller
//! somewhere else.

use std::time::Duration;

/// URL probed by the runner
pub const TARGET_URL: &str = "http://localhost:5000/";

/// Minimum gap between the end of one cycle and the start of the next
pub const CYCLE_DELAY: Duration = Duration::from_millis(10);

/// Runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL every poll cycle requests (e.g., "http://localhost:5000/")
    pub target_url: String,

    /// Delay between a completed cycle and the next request
    pub cycle_delay: Duration,
}

impl Config {
    /// Creates a configuration for an arbitrary target and delay
    pub fn new(target_url: impl Into<String>, cycle_delay: Duration) -> Self {
        Self {
            target_url: target_url.into(),
            cycle_delay,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.target_url.is_empty() {
            anyhow::bail!("target_url cannot be empty");
        }

        // Plain HTTP only, the probe never negotiates TLS
        if !self.target_url.starts_with("http://") {
            anyhow::bail!("target_url must start with http://");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(TARGET_URL, CYCLE_DELAY)
    }
}
