// ── Configuration form ──
//
// Typed holder for the operator-editable fields. `capture` produces the
// exact document submitted to the daemon, with blank fields resolved to
// their documented defaults; `restore` applies a daemon-reported
// document back onto the form (band before channel, since channel
// membership depends on the band).

use thiserror::Error;

use hotspotctl_api::{FreqBand, HotspotConfig, WpaVersion};

use crate::channels::ChannelPlan;

pub const DEFAULT_GATEWAY: &str = "192.168.12.1";
pub const DEFAULT_DHCP_DNS: &str = "8.8.8.8,8.8.4.4";
pub const DEFAULT_DRIVER: &str = "nl80211";
pub const DEFAULT_DHCP_START: &str = "192.168.12.10";
pub const DEFAULT_DHCP_END: &str = "192.168.12.100";
pub const DEFAULT_LEASE_TIME: &str = "12h";

/// Pre-flight configuration failure. All discovered problems are
/// reported together; any one of them aborts a start before the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("password must be at least 8 characters (or supply a raw PSK)")]
    WeakPassword,

    #[error("PSK mode requires exactly 64 hexadecimal characters")]
    InvalidPsk,

    #[error("802.11ac requires the 5 GHz frequency band")]
    BandMismatch,
}

/// Validate a captured configuration. Runs entirely locally.
pub fn validate(config: &HotspotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.ssid.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "ssid" });
    }

    if !config.password.is_empty() && config.password.len() < 8 && !config.psk {
        errors.push(ValidationError::WeakPassword);
    }

    if config.psk
        && (config.password.len() != 64
            || !config.password.chars().all(|c| c.is_ascii_hexdigit()))
    {
        errors.push(ValidationError::InvalidPsk);
    }

    if config.ieee80211ac && config.freq_band != FreqBand::Band5 {
        errors.push(ValidationError::BandMismatch);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// The operator-editable configuration fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigForm {
    pub wifi_interface: String,
    pub internet_interface: String,
    pub ssid: String,
    pub password: String,
    pub wpa_version: WpaVersion,
    pub psk: bool,
    channels: ChannelPlan,
    pub country: String,
    pub gateway: String,
    pub dhcp_dns: String,
    pub driver: String,
    pub dhcp_start: String,
    pub dhcp_end: String,
    pub lease_time: String,
    pub max_stations: String,
    pub ieee80211n: bool,
    pub ieee80211ac: bool,
    pub ieee80211ax: bool,
    pub ht_capab: String,
    pub vht_capab: String,
    pub he_capab: String,
    pub hidden: bool,
    pub isolate: bool,
    pub mac_filter: bool,
    pub mac_filter_accept: String,
    pub hosts_file: String,
    pub no_internet: bool,
    pub no_dns: bool,
    pub no_dnsmasq: bool,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigForm {
    pub fn new() -> Self {
        Self {
            wifi_interface: "wlan0".to_owned(),
            internet_interface: "eth0".to_owned(),
            ssid: String::new(),
            password: String::new(),
            wpa_version: WpaVersion::default(),
            psk: false,
            channels: ChannelPlan::new(),
            country: String::new(),
            gateway: String::new(),
            dhcp_dns: String::new(),
            driver: String::new(),
            dhcp_start: String::new(),
            dhcp_end: String::new(),
            lease_time: String::new(),
            max_stations: String::new(),
            ieee80211n: false,
            ieee80211ac: false,
            ieee80211ax: false,
            ht_capab: String::new(),
            vht_capab: String::new(),
            he_capab: String::new(),
            hidden: false,
            isolate: false,
            mac_filter: false,
            mac_filter_accept: String::new(),
            hosts_file: String::new(),
            no_internet: false,
            no_dns: false,
            no_dnsmasq: false,
        }
    }

    pub fn band(&self) -> FreqBand {
        self.channels.band()
    }

    pub fn channel(&self) -> &str {
        self.channels.selected()
    }

    /// Switch bands, preserving the channel when still valid.
    pub fn select_band(&mut self, band: FreqBand) {
        self.channels.select_band(band);
    }

    /// Select a channel in the current band. `false` leaves the
    /// selection unchanged.
    pub fn select_channel(&mut self, value: &str) -> bool {
        self.channels.select_channel(value)
    }

    /// Read all current field values into a submission document,
    /// resolving blanks to their defaults.
    ///
    /// 802.11ac and 802.11ax both imply 802.11n, so n is forced on here
    /// rather than trusting the individual toggles to agree.
    pub fn capture(&self) -> HotspotConfig {
        let ieee80211n = self.ieee80211n || self.ieee80211ac || self.ieee80211ax;

        HotspotConfig {
            wifi_interface: self.wifi_interface.clone(),
            internet_interface: (!self.no_internet).then(|| self.internet_interface.clone()),
            ssid: self.ssid.clone(),
            password: self.password.clone(),
            wpa_version: self.wpa_version,
            psk: self.psk,
            freq_band: self.channels.band(),
            channel: self.channels.selected().to_owned(),
            country: self.country.to_uppercase(),
            gateway: or_default(&self.gateway, DEFAULT_GATEWAY),
            dhcp_dns: or_default(&self.dhcp_dns, DEFAULT_DHCP_DNS),
            driver: or_default(&self.driver, DEFAULT_DRIVER),
            dhcp_start: or_default(&self.dhcp_start, DEFAULT_DHCP_START),
            dhcp_end: or_default(&self.dhcp_end, DEFAULT_DHCP_END),
            lease_time: or_default(&self.lease_time, DEFAULT_LEASE_TIME),
            max_stations: self.max_stations.clone(),
            ieee80211n,
            ieee80211ac: self.ieee80211ac,
            ieee80211ax: self.ieee80211ax,
            ht_capab: self.ht_capab.clone(),
            vht_capab: self.vht_capab.clone(),
            he_capab: self.he_capab.clone(),
            hidden: self.hidden,
            isolate: self.isolate,
            mac_filter: self.mac_filter,
            mac_filter_accept: self.mac_filter_accept.clone(),
            hosts_file: self.hosts_file.clone(),
            no_internet: self.no_internet,
            no_dns: self.no_dns,
            no_dnsmasq: self.no_dnsmasq,
        }
    }

    /// Apply a previously obtained configuration onto the form.
    ///
    /// Band is applied before channel; a channel outside the resulting
    /// set leaves the current selection in place. Text fields only
    /// overwrite when the incoming value is non-empty, so a sparse
    /// document never blanks out existing entries.
    pub fn restore(&mut self, config: &HotspotConfig) {
        self.channels.select_band(config.freq_band);
        if !config.channel.is_empty() {
            let _ = self.channels.select_channel(&config.channel);
        }

        set_if_present(&mut self.wifi_interface, &config.wifi_interface);
        if let Some(ref iface) = config.internet_interface {
            set_if_present(&mut self.internet_interface, iface);
        }
        set_if_present(&mut self.ssid, &config.ssid);
        set_if_present(&mut self.password, &config.password);
        self.wpa_version = config.wpa_version;
        self.psk = config.psk;

        set_if_present(&mut self.country, &config.country);
        set_if_present(&mut self.gateway, &config.gateway);
        set_if_present(&mut self.dhcp_dns, &config.dhcp_dns);
        set_if_present(&mut self.driver, &config.driver);
        set_if_present(&mut self.dhcp_start, &config.dhcp_start);
        set_if_present(&mut self.dhcp_end, &config.dhcp_end);
        set_if_present(&mut self.lease_time, &config.lease_time);
        set_if_present(&mut self.max_stations, &config.max_stations);
        set_if_present(&mut self.ht_capab, &config.ht_capab);
        set_if_present(&mut self.vht_capab, &config.vht_capab);
        set_if_present(&mut self.he_capab, &config.he_capab);
        set_if_present(&mut self.mac_filter_accept, &config.mac_filter_accept);
        set_if_present(&mut self.hosts_file, &config.hosts_file);

        self.ieee80211n = config.ieee80211n;
        self.ieee80211ac = config.ieee80211ac;
        self.ieee80211ax = config.ieee80211ax;
        self.hidden = config.hidden;
        self.isolate = config.isolate;
        self.mac_filter = config.mac_filter;
        self.no_internet = config.no_internet;
        self.no_dns = config.no_dns;
        self.no_dnsmasq = config.no_dnsmasq;
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

fn set_if_present(slot: &mut String, value: &str) {
    if !value.is_empty() {
        *slot = value.to_owned();
    }
}
