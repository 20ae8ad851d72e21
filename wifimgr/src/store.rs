//! Bounded, priority-ordered saved-network list.

use log::{debug, warn};

use crate::Result;
use crate::constants::{capacity, keys};
use crate::models::{NetworkRecord, WifiError};
use crate::settings::SettingsStore;
use crate::utils::sort_by_rank;

/// Remembered networks, kept sorted best-first by (priority, signal) and
/// mirrored to the settings store after every mutation, so persisted state
/// never lags the in-memory list by more than one operation.
pub struct NetworkStore<S: SettingsStore> {
    settings: S,
    networks: Vec<NetworkRecord>,
}

impl<S: SettingsStore> NetworkStore<S> {
    pub fn new(settings: S) -> Self {
        Self {
            settings,
            networks: Vec::new(),
        }
    }

    /// Rebuilds the in-memory list from the settings store.
    ///
    /// Reads at most [`capacity::MAX_SAVED`] entries; slots with an empty
    /// ssid are skipped. No radio activity.
    pub fn load(&mut self) {
        self.networks.clear();
        let count = self.settings.get_i32(keys::NUM_NETWORKS, 0).max(0) as usize;
        for i in 0..count.min(capacity::MAX_SAVED) {
            let ssid = self.settings.get_string(&keys::ssid(i), "");
            if ssid.is_empty() {
                warn!("skipping saved network slot {i}: empty ssid");
                continue;
            }
            let password = self.settings.get_string(&keys::password(i), "");
            let priority = self.settings.get_i32(&keys::priority(i), 0);
            self.networks
                .push(NetworkRecord::saved_entry(ssid, password, priority));
        }
        sort_by_rank(&mut self.networks);
        debug!("loaded {} saved networks", self.networks.len());
    }

    /// Writes the count and per-index triples back under the key scheme.
    pub fn save(&mut self) {
        self.settings
            .put_i32(keys::NUM_NETWORKS, self.networks.len() as i32);
        for (i, net) in self.networks.iter().enumerate() {
            self.settings.put_string(&keys::ssid(i), &net.ssid);
            self.settings.put_string(&keys::password(i), &net.password);
            self.settings.put_i32(&keys::priority(i), net.priority);
        }
    }

    /// Remembers a network, updating password and priority in place when
    /// the ssid already exists. At capacity the lowest-ranked record is
    /// evicted. Local-only; never fails.
    pub fn add(&mut self, ssid: &str, password: &str, priority: i32) {
        if let Some(i) = self.find(ssid) {
            self.networks[i].password = password.to_string();
            self.networks[i].priority = priority;
        } else {
            self.networks
                .push(NetworkRecord::saved_entry(ssid.into(), password.into(), priority));
        }
        sort_by_rank(&mut self.networks);
        while self.networks.len() > capacity::MAX_SAVED {
            if let Some(evicted) = self.networks.pop() {
                debug!(
                    "evicted '{}' (priority {}) to stay within capacity",
                    evicted.ssid, evicted.priority
                );
            }
        }
        self.save();
    }

    /// Forgets a network by exact ssid match.
    pub fn remove(&mut self, ssid: &str) -> Result<()> {
        let i = self.find(ssid).ok_or(WifiError::NotFound)?;
        self.networks.remove(i);
        sort_by_rank(&mut self.networks);
        self.save();
        Ok(())
    }

    /// Re-prioritizes a saved network and re-sorts the list.
    pub fn set_priority(&mut self, ssid: &str, priority: i32) -> Result<()> {
        let i = self.find(ssid).ok_or(WifiError::NotFound)?;
        self.networks[i].priority = priority;
        sort_by_rank(&mut self.networks);
        self.save();
        Ok(())
    }

    /// Position of `ssid` in the current ordering, if saved. Non-mutating.
    pub fn find(&self, ssid: &str) -> Option<usize> {
        self.networks.iter().position(|n| n.ssid == ssid)
    }

    /// Saved networks in connection-attempt order (best first).
    pub fn networks(&self) -> &[NetworkRecord] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Read access to the underlying settings store.
    pub fn settings(&self) -> &S {
        &self.settings
    }
}
