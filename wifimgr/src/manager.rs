//! Connection state machine and public facade.

use std::time::Instant;

use log::debug;

use crate::Result;
use crate::config::TimeoutConfig;
use crate::models::{NetworkRecord, WifiError, WifiState};
use crate::notify::{Notifier, ScanCallback, StatusCallback};
use crate::radio::Radio;
use crate::scan::{ScanCoordinator, ScanPoll};
use crate::settings::SettingsStore;
use crate::store::NetworkStore;

/// Polled Wi-Fi connection lifecycle manager.
///
/// Owns the radio handle and the persisted network list for its lifetime.
/// An external driver calls [`poll`](WifiManager::poll) at a regular
/// cadence (tens of milliseconds); every public operation returns without
/// blocking. All state lives on one logical thread — there is no internal
/// locking and no notification thread.
pub struct WifiManager<R: Radio, S: SettingsStore> {
    radio: R,
    store: NetworkStore<S>,
    scanner: ScanCoordinator,
    notifier: Notifier,
    config: TimeoutConfig,
    state: WifiState,
    enabled: bool,
    initialized: bool,
    manual_disconnect: bool,
    target_ssid: String,
    target_password: String,
    last_attempt: Instant,
    attempts: u32,
}

impl<R: Radio, S: SettingsStore> WifiManager<R, S> {
    /// Creates a manager with default timings (10 s connect, 8 s scan,
    /// 30 s reconnect interval, 3 attempts).
    pub fn new(radio: R, settings: S) -> Self {
        Self::with_config(radio, settings, TimeoutConfig::default())
    }

    /// Creates a manager with a custom timing policy.
    pub fn with_config(radio: R, settings: S, config: TimeoutConfig) -> Self {
        Self {
            radio,
            store: NetworkStore::new(settings),
            scanner: ScanCoordinator::new(),
            notifier: Notifier::default(),
            config,
            state: WifiState::Disabled,
            enabled: false,
            initialized: false,
            manual_disconnect: false,
            target_ssid: String::new(),
            target_password: String::new(),
            last_attempt: Instant::now(),
            attempts: 0,
        }
    }

    /// Arms the radio (station mode, power saving on), loads the saved
    /// networks, and enters `Disconnected`. Automatic reconnection starts
    /// one reconnect interval later.
    pub fn begin(&mut self) {
        self.radio.set_station_mode();
        self.radio.set_power_save(true);
        self.store.load();
        self.state = WifiState::Disconnected;
        self.enabled = true;
        self.initialized = true;
        self.last_attempt = Instant::now();
        self.notifier.status(self.state, "WiFi initialized");
    }

    pub fn set_status_callback(&mut self, callback: StatusCallback) {
        self.notifier.set_status(callback);
    }

    pub fn set_scan_callback(&mut self, callback: ScanCallback) {
        self.notifier.set_scan(callback);
    }

    /// Enables or disables the manager. Disabling forces a manual
    /// disconnect and powers the radio down; re-enabling arms the radio
    /// and immediately seeks the best saved network.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.radio.set_station_mode();
            self.state = WifiState::Disconnected;
            let _ = self.connect_to_best_network();
        } else {
            self.disconnect(true);
            self.radio.power_off();
            self.state = WifiState::Disabled;
            self.notifier.status(self.state, "WiFi disabled");
        }
    }

    /// Starts a connection attempt to the given network.
    ///
    /// Clears the manual-disconnect flag, resets the attempt counter, and
    /// issues a disconnect-then-associate request to the radio. With
    /// `save` the credential is also remembered in the network store.
    /// Rejected while disabled or while a scan is in progress.
    pub fn connect(
        &mut self,
        ssid: &str,
        password: &str,
        save: bool,
        priority: i32,
    ) -> Result<()> {
        if !self.enabled {
            return Err(WifiError::Disabled);
        }
        if self.scanner.is_scanning() {
            return Err(WifiError::ScanInProgress);
        }
        self.state = WifiState::Connecting;
        self.target_ssid = ssid.to_string();
        self.target_password = password.to_string();
        self.last_attempt = Instant::now();
        self.attempts = 1;
        self.manual_disconnect = false;
        self.radio.disconnect();
        self.radio.begin_connect(ssid, password);
        let message = format!("Connecting to {ssid}");
        self.notifier.status(self.state, &message);
        if save {
            self.store.add(ssid, password, priority);
        }
        Ok(())
    }

    /// Attempts the highest-ranked saved network.
    ///
    /// Any saved network is eligible regardless of prior failures; there
    /// is no per-network cool-down, only the global attempt counter that
    /// resets per call.
    pub fn connect_to_best_network(&mut self) -> Result<()> {
        if !self.enabled {
            return Err(WifiError::Disabled);
        }
        if self.store.is_empty() {
            return Err(WifiError::NoSavedNetworks);
        }
        let best = self.store.networks()[0].clone();
        self.connect(&best.ssid, &best.password, false, best.priority)
    }

    /// Tears down the association unconditionally and records whether the
    /// disconnect was user-initiated. A manual disconnect suppresses
    /// automatic reconnection until the next `connect` call.
    pub fn disconnect(&mut self, manual: bool) {
        self.radio.disconnect();
        self.state = WifiState::Disconnected;
        self.manual_disconnect = manual;
        self.notifier.status(self.state, "Disconnected");
    }

    /// Kicks off an asynchronous scan.
    ///
    /// Rejected while disabled, while another scan runs, or while a
    /// connection attempt is in flight — scanning and connecting are
    /// mutually exclusive.
    pub fn start_scan(&mut self) -> Result<()> {
        if !self.enabled {
            return Err(WifiError::Disabled);
        }
        if self.scanner.is_scanning() {
            return Err(WifiError::ScanInProgress);
        }
        if self.state == WifiState::Connecting {
            return Err(WifiError::ConnectInProgress);
        }
        self.state = WifiState::Scanning;
        self.scanner.start(&mut self.radio);
        self.notifier.status(self.state, "Scanning networks...");
        Ok(())
    }

    /// Advances whichever state is active. Non-blocking; does nothing
    /// while disabled.
    pub fn poll(&mut self) {
        if !self.enabled {
            return;
        }
        match self.state {
            WifiState::Scanning => self.poll_scanning(),
            WifiState::Connecting => self.poll_connecting(),
            WifiState::Connected => self.poll_connected(),
            WifiState::Disconnected => self.poll_disconnected(),
            WifiState::Disabled => {}
        }
    }

    fn poll_scanning(&mut self) {
        let outcome =
            self.scanner
                .poll(&mut self.radio, &self.store, self.config.scan_timeout);
        match outcome {
            ScanPoll::Complete(count) => {
                self.settle_after_scan();
                let message = format!("Scan complete: {count} networks found");
                self.notifier.status(self.state, &message);
                self.notifier.scan_done(self.scanner.results());
            }
            ScanPoll::TimedOut => {
                self.settle_after_scan();
                self.notifier.status(self.state, "Scan timed out");
            }
            ScanPoll::Pending | ScanPoll::Idle => {}
        }
    }

    fn settle_after_scan(&mut self) {
        self.state = if self.radio.is_associated() {
            WifiState::Connected
        } else {
            WifiState::Disconnected
        };
    }

    fn poll_connecting(&mut self) {
        if self.radio.is_associated() {
            self.state = WifiState::Connected;
            self.attempts = 0;
            let message = format!("Connected to {}", self.target_ssid);
            self.notifier.status(self.state, &message);
        } else if self.last_attempt.elapsed() > self.config.connection_timeout {
            if self.attempts < self.config.max_attempts {
                self.last_attempt = Instant::now();
                self.attempts += 1;
                self.radio
                    .begin_connect(&self.target_ssid, &self.target_password);
                let message = format!(
                    "Retrying connection ({}/{})",
                    self.attempts, self.config.max_attempts
                );
                self.notifier.status(self.state, &message);
            } else {
                // Terminal for this attempt, not for the component: the
                // reconnect-interval timer takes over from Disconnected.
                self.state = WifiState::Disconnected;
                let message = format!("Connection failed to {}", self.target_ssid);
                self.notifier.status(self.state, &message);
            }
        }
    }

    fn poll_connected(&mut self) {
        if !self.radio.is_associated() {
            debug!("association to '{}' lost", self.target_ssid);
            self.state = WifiState::Disconnected;
            if !self.manual_disconnect {
                let _ = self.connect_to_best_network();
            }
        }
    }

    fn poll_disconnected(&mut self) {
        if !self.manual_disconnect
            && self.last_attempt.elapsed() > self.config.reconnect_interval
        {
            let _ = self.connect_to_best_network();
        }
    }

    /// Remembers a network. Never fails; at capacity the lowest-ranked
    /// saved record is evicted first.
    pub fn add_network(&mut self, ssid: &str, password: &str, priority: i32) {
        self.store.add(ssid, password, priority);
    }

    /// Forgets a saved network.
    pub fn remove_network(&mut self, ssid: &str) -> Result<()> {
        self.store.remove(ssid)
    }

    /// Re-prioritizes a saved network.
    pub fn set_priority(&mut self, ssid: &str, priority: i32) -> Result<()> {
        self.store.set_priority(ssid, priority)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_connected(&self) -> bool {
        self.radio.is_associated()
    }

    pub fn current_ssid(&self) -> Option<String> {
        self.radio.current_ssid()
    }

    /// Signal strength of the current association (dBm).
    pub fn signal_strength(&self) -> i32 {
        self.radio.signal_strength()
    }

    pub fn local_address(&self) -> Option<String> {
        self.radio.local_address()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanner.is_scanning()
    }

    /// Ranked results of the most recent completed scan.
    pub fn scan_results(&self) -> &[NetworkRecord] {
        self.scanner.results()
    }

    /// Saved networks in connection-attempt order (best first).
    pub fn saved_networks(&self) -> &[NetworkRecord] {
        self.store.networks()
    }

    pub fn state(&self) -> WifiState {
        self.state
    }

    pub fn state_as_text(&self) -> &'static str {
        self.state.as_str()
    }

    /// The timing policy in effect.
    pub fn timeout_config(&self) -> &TimeoutConfig {
        &self.config
    }

    /// Read access to the underlying settings store.
    pub fn settings(&self) -> &S {
        self.store.settings()
    }
}

impl<R: Radio, S: SettingsStore> Drop for WifiManager<R, S> {
    fn drop(&mut self) {
        if self.enabled {
            self.disconnect(true);
        }
    }
}
