//! Fixed limits, default timings, and the persisted key scheme.

/// Saved-network capacity.
pub mod capacity {
    /// Maximum number of remembered networks.
    pub const MAX_SAVED: usize = 5;
}

/// Retry count constants.
pub mod retries {
    /// Maximum consecutive association attempts for a single target.
    pub const MAX_CONNECTION_ATTEMPTS: u32 = 3;
}

/// Default timeout and interval constants (in milliseconds).
pub mod timeouts {
    use std::time::Duration;

    pub const CONNECTION_TIMEOUT_MS: u64 = 10_000;
    pub const SCAN_TIMEOUT_MS: u64 = 8_000;
    pub const RECONNECT_INTERVAL_MS: u64 = 30_000;

    pub fn connection_timeout() -> Duration {
        Duration::from_millis(CONNECTION_TIMEOUT_MS)
    }

    pub fn scan_timeout() -> Duration {
        Duration::from_millis(SCAN_TIMEOUT_MS)
    }

    pub fn reconnect_interval() -> Duration {
        Duration::from_millis(RECONNECT_INTERVAL_MS)
    }
}

/// Keys used in the settings namespace.
///
/// The store writes a count under [`NUM_NETWORKS`](keys::NUM_NETWORKS) and
/// per-index ssid/password/priority triples below it.
pub mod keys {
    pub const NUM_NETWORKS: &str = "numNetworks";

    pub fn ssid(index: usize) -> String {
        format!("ssid{index}")
    }

    pub fn password(index: usize) -> String {
        format!("pass{index}")
    }

    pub fn priority(index: usize) -> String {
        format!("prio{index}")
    }
}

/// Signal strength thresholds (dBm) for bar display.
pub mod signal {
    pub const BAR_1_MAX: i32 = -80;
    pub const BAR_2_MAX: i32 = -70;
    pub const BAR_3_MAX: i32 = -60;
}
