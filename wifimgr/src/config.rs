//! Timing and retry policy configuration.

use std::time::Duration;

use crate::constants::{retries, timeouts};

/// Timeouts and retry limits for the connection state machine.
///
/// Defaults suit a small device polling every few tens of milliseconds.
/// Override them for slow access points or to shrink timings in tests:
///
/// ```
/// use std::time::Duration;
/// use wifimgr::TimeoutConfig;
///
/// let config = TimeoutConfig::new()
///     .with_connection_timeout(Duration::from_secs(20))
///     .with_reconnect_interval(Duration::from_secs(60));
/// assert_eq!(config.connection_timeout, Duration::from_secs(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// How long a single association attempt may run before a retry.
    pub connection_timeout: Duration,
    /// How long a scan may stay pending before it is aborted.
    pub scan_timeout: Duration,
    /// Idle time after which an unintentional disconnect retries automatically.
    pub reconnect_interval: Duration,
    /// Consecutive attempts for one target before giving up.
    pub max_attempts: u32,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection_timeout: timeouts::connection_timeout(),
            scan_timeout: timeouts::scan_timeout(),
            reconnect_interval: timeouts::reconnect_interval(),
            max_attempts: retries::MAX_CONNECTION_ATTEMPTS,
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn with_scan_timeout(mut self, timeout: Duration) -> Self {
        self.scan_timeout = timeout;
        self
    }

    pub fn with_reconnect_interval(mut self, interval: Duration) -> Self {
        self.reconnect_interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}
