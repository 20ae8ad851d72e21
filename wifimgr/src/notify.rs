//! Status and scan-result observer channels.

use crate::models::{NetworkRecord, WifiState};

/// Status observer: receives `(state, message)` on every notable transition.
pub type StatusCallback = Box<dyn FnMut(WifiState, &str)>;

/// Scan observer: receives the full ranked list of a completed scan.
pub type ScanCallback = Box<dyn FnMut(&[NetworkRecord])>;

/// Fire-and-forget delivery to two optional, independent observers.
///
/// Callbacks run synchronously inside `poll()` or the triggering call —
/// there is no notification thread, so they must not block.
#[derive(Default)]
pub(crate) struct Notifier {
    status: Option<StatusCallback>,
    scan: Option<ScanCallback>,
}

impl Notifier {
    pub fn set_status(&mut self, callback: StatusCallback) {
        self.status = Some(callback);
    }

    pub fn set_scan(&mut self, callback: ScanCallback) {
        self.scan = Some(callback);
    }

    pub fn status(&mut self, state: WifiState, message: &str) {
        log::debug!("{state}: {message}");
        if let Some(cb) = self.status.as_mut() {
            cb(state, message);
        }
    }

    pub fn scan_done(&mut self, results: &[NetworkRecord]) {
        if let Some(cb) = self.scan.as_mut() {
            cb(results);
        }
    }
}
