//! Namespaced key-value persistence boundary.

use std::collections::HashMap;

/// Minimal key-value contract the network store persists through.
///
/// Writes are assumed to succeed or fail silently at the engine level;
/// reads fall back to the supplied default. The on-disk format behind the
/// keys is the engine's business.
pub trait SettingsStore {
    fn get_i32(&self, key: &str, default: i32) -> i32;
    fn get_string(&self, key: &str, default: &str) -> String;
    fn put_i32(&mut self, key: &str, value: i32);
    fn put_string(&mut self, key: &str, value: &str);
}

/// Volatile in-memory settings store.
///
/// Useful on hosts without flash-backed preferences and as a deterministic
/// stand-in for tests. Contents are lost when the value is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ints: HashMap<String, i32>,
    strings: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.ints.get(key).copied().unwrap_or(default)
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn put_i32(&mut self, key: &str, value: i32) {
        self.ints.insert(key.to_string(), value);
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }
}
