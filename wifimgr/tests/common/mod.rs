//! Shared fakes for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use wifimgr::{Radio, ScanEntry, ScanStatus, Security, StatusCallback, WifiState};

/// Scripted radio driver.
///
/// Clones share state, so a test keeps one handle to steer the fake and
/// inspect requests while the manager owns another.
#[derive(Clone, Default)]
pub struct FakeRadio {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    station_mode: bool,
    powered_off: bool,
    power_save: bool,
    auto_associate: bool,
    associated: bool,
    current: Option<String>,
    rssi: i32,
    address: Option<String>,
    scan_complete: bool,
    scan_entries: Vec<ScanEntry>,
    connect_requests: Vec<(String, String)>,
    discards: usize,
}

impl FakeRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// When on, any `begin_connect` associates immediately.
    pub fn set_auto_associate(&self, on: bool) {
        self.inner.borrow_mut().auto_associate = on;
    }

    /// Forces an association, as if the link came up out of band.
    pub fn associate(&self, ssid: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.associated = true;
        inner.current = Some(ssid.to_string());
    }

    /// Simulates losing the link.
    pub fn drop_link(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.associated = false;
        inner.current = None;
    }

    pub fn set_link_details(&self, rssi: i32, address: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.rssi = rssi;
        inner.address = Some(address.to_string());
    }

    /// Marks the in-flight scan as complete with these entries.
    pub fn finish_scan(&self, entries: Vec<ScanEntry>) {
        let mut inner = self.inner.borrow_mut();
        inner.scan_entries = entries;
        inner.scan_complete = true;
    }

    pub fn connect_requests(&self) -> Vec<(String, String)> {
        self.inner.borrow().connect_requests.clone()
    }

    pub fn discards(&self) -> usize {
        self.inner.borrow().discards
    }

    pub fn in_station_mode(&self) -> bool {
        self.inner.borrow().station_mode
    }

    pub fn power_save_enabled(&self) -> bool {
        self.inner.borrow().power_save
    }

    pub fn is_powered_off(&self) -> bool {
        self.inner.borrow().powered_off
    }
}

impl Radio for FakeRadio {
    fn set_station_mode(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.station_mode = true;
        inner.powered_off = false;
    }

    fn set_power_save(&mut self, on: bool) {
        self.inner.borrow_mut().power_save = on;
    }

    fn power_off(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.powered_off = true;
        inner.station_mode = false;
        inner.associated = false;
        inner.current = None;
    }

    fn disconnect(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.associated = false;
        inner.current = None;
    }

    fn begin_connect(&mut self, ssid: &str, password: &str) {
        let mut inner = self.inner.borrow_mut();
        inner
            .connect_requests
            .push((ssid.to_string(), password.to_string()));
        if inner.auto_associate {
            inner.associated = true;
            inner.current = Some(ssid.to_string());
        }
    }

    fn start_scan(&mut self) {
        self.inner.borrow_mut().scan_complete = false;
    }

    fn scan_status(&self) -> ScanStatus {
        let inner = self.inner.borrow();
        if inner.scan_complete {
            ScanStatus::Done(inner.scan_entries.len())
        } else {
            ScanStatus::Pending
        }
    }

    fn scan_entry(&self, index: usize) -> Option<ScanEntry> {
        self.inner.borrow().scan_entries.get(index).cloned()
    }

    fn discard_scan(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.discards += 1;
        inner.scan_complete = false;
        inner.scan_entries.clear();
    }

    fn is_associated(&self) -> bool {
        self.inner.borrow().associated
    }

    fn current_ssid(&self) -> Option<String> {
        self.inner.borrow().current.clone()
    }

    fn signal_strength(&self) -> i32 {
        self.inner.borrow().rssi
    }

    fn local_address(&self) -> Option<String> {
        self.inner.borrow().address.clone()
    }
}

/// Captures everything sent over the status channel.
#[derive(Clone, Default)]
pub struct StatusLog {
    entries: Rc<RefCell<Vec<(WifiState, String)>>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> StatusCallback {
        let sink = Rc::clone(&self.entries);
        Box::new(move |state, message| {
            sink.borrow_mut().push((state, message.to_string()));
        })
    }

    pub fn last(&self) -> Option<(WifiState, String)> {
        self.entries.borrow().last().cloned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.borrow().iter().any(|(_, m)| m == needle)
    }
}

pub fn entry(ssid: &str, signal: i32, security: Security) -> ScanEntry {
    ScanEntry {
        ssid: ssid.to_string(),
        signal,
        security,
    }
}
