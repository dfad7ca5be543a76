// Wire types for the daemon's JSON API.
//
// Field names mirror the daemon's camelCase bodies exactly. The
// configuration document round-trips: what `/api/start` accepts is what
// `/api/status` and `/api/last-config` report back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Configuration enums ─────────────────────────────────────────────

/// WPA protocol generation, carried on the wire as `"1"` / `"2"` / `"3"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WpaVersion {
    #[serde(rename = "1")]
    Wpa1,
    #[default]
    #[serde(rename = "2")]
    Wpa2,
    #[serde(rename = "3")]
    Wpa3,
}

impl fmt::Display for WpaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Wpa1 => "1",
            Self::Wpa2 => "2",
            Self::Wpa3 => "3",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error)]
#[error("unrecognized WPA version: {0} (expected \"1\", \"2\" or \"3\")")]
pub struct ParseWpaVersionError(String);

impl FromStr for WpaVersion {
    type Err = ParseWpaVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Wpa1),
            "2" => Ok(Self::Wpa2),
            "3" => Ok(Self::Wpa3),
            other => Err(ParseWpaVersionError(other.to_owned())),
        }
    }
}

/// Radio frequency band, carried on the wire as `"2.4"` / `"5"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreqBand {
    #[default]
    #[serde(rename = "2.4")]
    Band24,
    #[serde(rename = "5")]
    Band5,
}

impl fmt::Display for FreqBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Band24 => "2.4",
            Self::Band5 => "5",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error)]
#[error("unrecognized frequency band: {0} (expected \"2.4\" or \"5\")")]
pub struct ParseFreqBandError(String);

impl FromStr for FreqBand {
    type Err = ParseFreqBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.4" => Ok(Self::Band24),
            "5" => Ok(Self::Band5),
            other => Err(ParseFreqBandError(other.to_owned())),
        }
    }
}

// ── Configuration document ──────────────────────────────────────────

/// Full access-point configuration as submitted to `/api/start`.
///
/// Blank strings mean "daemon default" for the free-text fields; the
/// form layer fills the documented defaults in before submission.
/// `internet_interface` is omitted from the body entirely when
/// `no_internet` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotConfig {
    /// A stopped daemon reports `config: {}`, so nothing is required.
    #[serde(default)]
    pub wifi_interface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_interface: Option<String>,
    #[serde(default)]
    pub ssid: String,
    /// Empty means an open network.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub wpa_version: WpaVersion,
    /// The password is a raw 64-hex-digit pre-shared key, not a passphrase.
    #[serde(default)]
    pub psk: bool,
    #[serde(default)]
    pub freq_band: FreqBand,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dhcp_dns: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub dhcp_start: String,
    #[serde(default)]
    pub dhcp_end: String,
    #[serde(default)]
    pub lease_time: String,
    #[serde(default)]
    pub max_stations: String,
    #[serde(default)]
    pub ieee80211n: bool,
    #[serde(default)]
    pub ieee80211ac: bool,
    #[serde(default)]
    pub ieee80211ax: bool,
    #[serde(default)]
    pub ht_capab: String,
    #[serde(default)]
    pub vht_capab: String,
    #[serde(default)]
    pub he_capab: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub isolate: bool,
    #[serde(default)]
    pub mac_filter: bool,
    #[serde(default)]
    pub mac_filter_accept: String,
    #[serde(default)]
    pub hosts_file: String,
    #[serde(default)]
    pub no_internet: bool,
    #[serde(default)]
    pub no_dns: bool,
    #[serde(default)]
    pub no_dnsmasq: bool,
}

// ── Status payloads ─────────────────────────────────────────────────

/// Raw log line from the daemon's hostapd capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
}

/// Cumulative byte counters for one network interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCounters {
    #[serde(default)]
    pub tx_bytes: u64,
    #[serde(default)]
    pub rx_bytes: u64,
}

/// Station row as reported under `clients` in `/api/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireStation {
    pub mac: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    /// Signal strength in dBm.
    #[serde(default)]
    pub signal: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    pub is_running: bool,
    #[serde(default)]
    pub uptime: u64,
    #[serde(default)]
    pub config: Option<HotspotConfig>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// Everything `/api/status` reports in one cycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: StatusBody,
    #[serde(default)]
    pub client_count: u32,
    #[serde(default)]
    pub clients: Vec<WireStation>,
    #[serde(default)]
    pub wifi_stats: InterfaceCounters,
    #[serde(default)]
    pub internet_stats: InterfaceCounters,
}

// ── Interface listing ───────────────────────────────────────────────

/// One network interface as reported by `/api/interfaces`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceEntry {
    pub name: String,
    #[serde(default, rename = "isWireless")]
    pub is_wireless: bool,
    #[serde(default, rename = "supportsAP")]
    pub supports_ap: bool,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "isup")]
    pub is_up: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterfacesResponse {
    #[serde(default)]
    pub interfaces: Vec<InterfaceEntry>,
}

// ── Start / stop envelopes ──────────────────────────────────────────

/// Rejection detail payload: the daemon sends a bare string or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Details {
    One(String),
    Many(Vec<String>),
}

impl Details {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartResponse {
    pub success: bool,
    /// Older daemon builds report a single `pid`; newer ones `hostapd_pid`.
    #[serde(default, alias = "pid")]
    pub hostapd_pid: Option<u32>,
    #[serde(default)]
    pub dnsmasq_pid: Option<u32>,
    #[serde(default)]
    pub config_file: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<Details>,
}

/// Process identifiers recorded from a successful start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartReceipt {
    pub hostapd_pid: Option<u32>,
    pub dnsmasq_pid: Option<u32>,
    pub config_file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StopResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LastConfigResponse {
    #[serde(default)]
    pub config: Option<HotspotConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HostapdConfigResponse {
    #[serde(default)]
    pub config: Option<String>,
}
