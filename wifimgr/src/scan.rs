//! Asynchronous scan coordination.

use std::time::{Duration, Instant};

use log::debug;

use crate::models::NetworkRecord;
use crate::radio::{Radio, ScanStatus};
use crate::settings::SettingsStore;
use crate::store::NetworkStore;
use crate::utils::sort_by_rank;

/// Outcome of one scan poll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanPoll {
    /// No scan in flight.
    Idle,
    /// Scan still running, deadline not reached.
    Pending,
    /// Scan finished; ranked results are ready.
    Complete(usize),
    /// Scan exceeded its deadline and was aborted.
    TimedOut,
}

/// Drives one asynchronous radio scan to completion or timeout and keeps
/// the ranked result list of the most recent scan.
///
/// Results are derived, not owned: each completed scan rebuilds the list
/// wholesale, merging live driver entries with saved-network metadata.
pub(crate) struct ScanCoordinator {
    in_progress: bool,
    started: Option<Instant>,
    results: Vec<NetworkRecord>,
}

impl ScanCoordinator {
    pub fn new() -> Self {
        Self {
            in_progress: false,
            started: None,
            results: Vec::new(),
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.in_progress
    }

    pub fn results(&self) -> &[NetworkRecord] {
        &self.results
    }

    /// Clears prior results and issues a non-blocking scan request.
    pub fn start<R: Radio>(&mut self, radio: &mut R) {
        self.results.clear();
        self.in_progress = true;
        self.started = Some(Instant::now());
        radio.discard_scan();
        radio.start_scan();
    }

    /// Advances an in-flight scan.
    ///
    /// On completion, merges each driver entry with saved-record metadata
    /// (`saved`, inherited `priority`, default 0) and marks the entry
    /// matching the current association as `connected`, then ranks the
    /// list. A scan pending past `timeout` is aborted; the driver is told
    /// to discard its results. Timeout is a normal termination path.
    pub fn poll<R: Radio, S: SettingsStore>(
        &mut self,
        radio: &mut R,
        store: &NetworkStore<S>,
        timeout: Duration,
    ) -> ScanPoll {
        if !self.in_progress {
            return ScanPoll::Idle;
        }

        match radio.scan_status() {
            ScanStatus::Done(count) => {
                self.results.clear();
                let associated = radio.is_associated();
                let current = radio.current_ssid();
                for i in 0..count {
                    let Some(entry) = radio.scan_entry(i) else {
                        continue;
                    };
                    let saved_at = store.find(&entry.ssid);
                    self.results.push(NetworkRecord {
                        connected: associated
                            && current.as_deref() == Some(entry.ssid.as_str()),
                        priority: saved_at
                            .map(|at| store.networks()[at].priority)
                            .unwrap_or(0),
                        saved: saved_at.is_some(),
                        password: String::new(),
                        ssid: entry.ssid,
                        signal: entry.signal,
                        security: entry.security,
                    });
                }
                sort_by_rank(&mut self.results);
                self.in_progress = false;
                self.started = None;
                debug!("scan complete: {} networks", self.results.len());
                ScanPoll::Complete(self.results.len())
            }
            ScanStatus::Pending => {
                let elapsed = self.started.map(|t| t.elapsed()).unwrap_or_default();
                if elapsed > timeout {
                    radio.discard_scan();
                    self.in_progress = false;
                    self.started = None;
                    debug!("scan aborted after {elapsed:?}");
                    ScanPoll::TimedOut
                } else {
                    ScanPoll::Pending
                }
            }
        }
    }
}
