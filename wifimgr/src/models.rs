use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Connection lifecycle states.
///
/// `Disabled` is entered only by an explicit disable and is terminal until
/// the manager is re-enabled. All other transitions happen inside
/// [`poll`](crate::WifiManager::poll) or the public mutating calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiState {
    /// Radio powered down; no automatic transitions.
    Disabled,
    /// No association; automatic reconnection may kick in.
    Disconnected,
    /// A single connection attempt is in flight.
    Connecting,
    /// Associated with an access point.
    Connected,
    /// An asynchronous scan is running.
    Scanning,
}

impl WifiState {
    /// Human-readable state name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Scanning => "Scanning",
        }
    }
}

impl Display for WifiState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encryption kind reported by the radio driver.
///
/// Opaque to the manager: it is carried through scan results for display
/// and never influences connection logic. Use `Security::from(code)` to
/// convert from the raw auth-mode codes drivers report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Security {
    Open,
    Wep,
    Wpa,
    Wpa2,
    Wpa3,
    /// Unknown auth-mode code not mapped to a specific variant.
    Other(u8),
}

impl Security {
    /// Whether joining this network requires a credential.
    pub fn secured(&self) -> bool {
        !matches!(self, Security::Open)
    }
}

impl From<u8> for Security {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Open,
            1 => Self::Wep,
            2 => Self::Wpa,
            3 => Self::Wpa2,
            4 => Self::Wpa3,
            v => Self::Other(v),
        }
    }
}

impl Display for Security {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Wep => write!(f, "WEP"),
            Self::Wpa => write!(f, "WPA"),
            Self::Wpa2 => write!(f, "WPA2"),
            Self::Wpa3 => write!(f, "WPA3"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// One remembered or observed network.
///
/// Saved records are owned by the network store and persisted across
/// restarts. Scan records are rebuilt wholesale at every scan completion,
/// merged against saved metadata, and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    /// Network identifier, unique among saved records.
    pub ssid: String,
    /// Credential; empty for open networks.
    pub password: String,
    /// Last-observed signal strength on a dBm-like scale.
    pub signal: i32,
    /// Encryption kind, as last reported by the radio.
    pub security: Security,
    /// Whether this record is present in the network store.
    pub saved: bool,
    /// Whether this is the currently associated network.
    pub connected: bool,
    /// Preference used for eviction and connection order; higher wins.
    pub priority: i32,
}

impl NetworkRecord {
    /// Builds a stored credential entry with no live radio data.
    pub(crate) fn saved_entry(ssid: String, password: String, priority: i32) -> Self {
        Self {
            ssid,
            password,
            signal: 0,
            security: Security::Open,
            saved: true,
            connected: false,
            priority,
        }
    }

    /// Ranking key: priority first, stronger signal breaks ties.
    pub(crate) fn rank(&self) -> (i32, i32) {
        (self.priority, self.signal)
    }
}

/// Rejection reasons for manager operations.
///
/// Every variant is a *rejected operation* in the sense of the error model:
/// the call changes no state and produces no status notification. Transient
/// connection failures and scan timeouts are reported through the status
/// channel instead and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WifiError {
    /// The manager is disabled; enable it first.
    #[error("Wi-Fi is disabled")]
    Disabled,

    /// A scan is already in progress.
    #[error("scan already in progress")]
    ScanInProgress,

    /// A connection attempt is in flight; scanning is excluded.
    #[error("connection attempt in progress")]
    ConnectInProgress,

    /// No saved network matches the given ssid.
    #[error("network not found")]
    NotFound,

    /// The network store is empty; nothing to connect to.
    #[error("no saved networks")]
    NoSavedNetworks,
}
