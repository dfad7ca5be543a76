// ── Status domain types ──

use std::net::IpAddr;

use serde::Serialize;

use hotspotctl_api::{HotspotConfig, InterfaceCounters, LogEntry};

use super::mac::MacAddress;

/// A device associated to the access point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub mac: MacAddress,
    pub hostname: Option<String>,
    /// Missing while the station is still obtaining a lease.
    pub ip: Option<IpAddr>,
    pub signal_dbm: Option<i32>,
}

/// One point-in-time view reported by the daemon, converted to domain
/// form. `logs` covers the daemon-defined window since the previous
/// poll (the buffer may overlap between cycles).
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub is_running: bool,
    pub uptime_secs: u64,
    pub config: Option<HotspotConfig>,
    pub stations: Vec<Station>,
    pub logs: Vec<LogEntry>,
    pub wifi: InterfaceCounters,
    pub internet: InterfaceCounters,
}
