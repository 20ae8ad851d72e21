//! Radio driver capability boundary.

use crate::models::Security;

/// Result of polling an in-flight scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// The scan has not finished yet.
    Pending,
    /// The scan finished with this many visible networks.
    Done(usize),
}

/// One raw scan entry as reported by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEntry {
    pub ssid: String,
    /// Signal strength on a dBm-like scale.
    pub signal: i32,
    pub security: Security,
}

/// Operations the manager requires from a wireless driver.
///
/// Every request is fire-and-forget: `begin_connect` and `start_scan`
/// return immediately, and completion is observed through `is_associated`
/// and `scan_status` on subsequent polls. Implementations must not block.
///
/// Driver-level errors are not propagated; the manager reacts only to
/// observable status (associated or not, scan count or pending).
pub trait Radio {
    /// Puts the radio in station mode and powers it up.
    fn set_station_mode(&mut self);

    /// Enables or disables modem power saving.
    fn set_power_save(&mut self, on: bool);

    /// Powers the radio down entirely.
    fn power_off(&mut self);

    /// Drops the current association, if any.
    fn disconnect(&mut self);

    /// Begins associating with an access point.
    fn begin_connect(&mut self, ssid: &str, password: &str);

    /// Begins an asynchronous scan.
    fn start_scan(&mut self);

    /// Polls the in-flight scan.
    fn scan_status(&self) -> ScanStatus;

    /// Reads one entry of a completed scan.
    fn scan_entry(&self, index: usize) -> Option<ScanEntry>;

    /// Discards buffered scan results.
    fn discard_scan(&mut self);

    /// Whether the radio currently holds an association.
    fn is_associated(&self) -> bool;

    /// SSID of the current association, if any.
    fn current_ssid(&self) -> Option<String>;

    /// Signal strength of the current association (dBm).
    fn signal_strength(&self) -> i32;

    /// Local address assigned to the interface, if any.
    fn local_address(&self) -> Option<String>;
}
