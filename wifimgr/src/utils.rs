//! Helpers for ranking and signal display.

use crate::constants::signal;
use crate::models::NetworkRecord;

/// Sorts records best-first: priority descending, stronger signal on ties.
pub(crate) fn sort_by_rank(networks: &mut [NetworkRecord]) {
    networks.sort_by(|a, b| b.rank().cmp(&a.rank()));
}

/// Converts a dBm signal reading to a visual bar representation.
///
/// - below -80 dBm: `▂___` (1 bar)
/// - -80 to -71:    `▂▄__` (2 bars)
/// - -70 to -61:    `▂▄▆_` (3 bars)
/// - -60 and up:    `▂▄▆█` (4 bars)
pub fn bars_from_rssi(rssi: i32) -> &'static str {
    if rssi < signal::BAR_1_MAX {
        "▂___"
    } else if rssi < signal::BAR_2_MAX {
        "▂▄__"
    } else if rssi < signal::BAR_3_MAX {
        "▂▄▆_"
    } else {
        "▂▄▆█"
    }
}
