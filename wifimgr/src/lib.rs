//! Polled Wi-Fi connection lifecycle management for small devices.
//!
//! This crate owns the network-connection lifecycle of a device
//! application: establishing, maintaining, retrying, and scanning wireless
//! connections, and persisting a bounded, prioritized list of known
//! networks. It renders no UI and drives no hardware itself — the radio
//! and the persistence engine sit behind the [`Radio`] and
//! [`SettingsStore`] capability traits, so the state machine is fully
//! testable with fakes.
//!
//! # Control flow
//!
//! An external driver calls the non-blocking [`WifiManager::poll`] at a
//! regular cadence (tens of milliseconds). Each call advances whichever of
//! scanning / connecting / connected / disconnected is active, consulting
//! the radio for the latest hardware status. User-initiated operations
//! (`connect`, `disconnect`, `start_scan`, `add_network`, ...) mutate
//! state and return immediately.
//!
//! # Example
//!
//! ```no_run
//! use wifimgr::{MemoryStore, WifiManager};
//! # use wifimgr::{Radio, ScanEntry, ScanStatus};
//! # struct NullRadio;
//! # impl Radio for NullRadio {
//! #     fn set_station_mode(&mut self) {}
//! #     fn set_power_save(&mut self, _on: bool) {}
//! #     fn power_off(&mut self) {}
//! #     fn disconnect(&mut self) {}
//! #     fn begin_connect(&mut self, _ssid: &str, _password: &str) {}
//! #     fn start_scan(&mut self) {}
//! #     fn scan_status(&self) -> ScanStatus { ScanStatus::Pending }
//! #     fn scan_entry(&self, _index: usize) -> Option<ScanEntry> { None }
//! #     fn discard_scan(&mut self) {}
//! #     fn is_associated(&self) -> bool { false }
//! #     fn current_ssid(&self) -> Option<String> { None }
//! #     fn signal_strength(&self) -> i32 { 0 }
//! #     fn local_address(&self) -> Option<String> { None }
//! # }
//! let mut wifi = WifiManager::new(NullRadio, MemoryStore::new());
//! wifi.set_status_callback(Box::new(|state, message| {
//!     println!("[{state}] {message}");
//! }));
//! wifi.begin();
//! wifi.connect("MyNetwork", "password123", true, 0)?;
//!
//! loop {
//!     wifi.poll();
//!     // sleep a few tens of milliseconds between polls
//! #     break;
//! }
//! # Ok::<(), wifimgr::WifiError>(())
//! ```
//!
//! # Error Handling
//!
//! Rejected operations (disabled, scan already running, ssid not found)
//! return `Err(WifiError)` and change no state. Transient connection
//! failures, the attempt-cap exhaustion, and scan timeouts are *status
//! messages* delivered through the callback channels, never errors:
//! the manager retires to `Disconnected` and its reconnect timer keeps
//! working without caller intervention.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. To see log
//! output, install a logging implementation such as `env_logger`.

// Internal implementation modules
mod notify;
mod scan;
mod utils;

// Public API modules
pub mod config;
pub mod constants;
pub mod manager;
pub mod models;
pub mod radio;
pub mod settings;
pub mod store;

// Re-exported public API
pub use config::TimeoutConfig;
pub use manager::WifiManager;
pub use models::{NetworkRecord, Security, WifiError, WifiState};
pub use notify::{ScanCallback, StatusCallback};
pub use radio::{Radio, ScanEntry, ScanStatus};
pub use settings::{MemoryStore, SettingsStore};
pub use store::NetworkStore;
pub use utils::bars_from_rssi;

/// A specialized `Result` type for manager operations.
pub type Result<T> = std::result::Result<T, WifiError>;
