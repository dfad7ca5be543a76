// ── Interface catalog ──

use tracing::debug;

use hotspotctl_api::{DaemonClient, InterfaceEntry};

use crate::error::CoreError;

/// Daemon-host interfaces split by role: AP-capable wireless first,
/// then wired uplink candidates.
#[derive(Debug, Clone, Default)]
pub struct InterfaceCatalog {
    pub wireless: Vec<InterfaceEntry>,
    pub wired: Vec<InterfaceEntry>,
}

impl InterfaceCatalog {
    /// Partition raw daemon entries into roles.
    ///
    /// When either side comes back empty a placeholder (`wlan0` /
    /// `eth0`) is substituted, so a host with no qualifying interfaces
    /// still produces a usable catalog instead of failing.
    pub fn from_entries(entries: Vec<InterfaceEntry>) -> Self {
        let mut wireless = Vec::new();
        let mut wired = Vec::new();

        for entry in entries {
            if (entry.is_wireless || entry.kind == "wifi") && entry.supports_ap {
                wireless.push(entry);
            } else if entry.kind == "ethernet" {
                wired.push(entry);
            }
            // Other interface kinds (loopback, tunnels) are dropped.
        }

        if wireless.is_empty() {
            wireless.push(placeholder("wlan0", true));
        }
        if wired.is_empty() {
            wired.push(placeholder("eth0", false));
        }

        Self { wireless, wired }
    }
}

fn placeholder(name: &str, wireless: bool) -> InterfaceEntry {
    InterfaceEntry {
        name: name.to_owned(),
        is_wireless: wireless,
        supports_ap: wireless,
        kind: if wireless { "wifi" } else { "ethernet" }.to_owned(),
        is_up: false,
    }
}

/// Fetch and partition the daemon host's interfaces.
pub async fn load_interfaces(client: &DaemonClient) -> Result<InterfaceCatalog, CoreError> {
    let entries = client.interfaces().await?;
    debug!(count = entries.len(), "loaded interfaces");
    Ok(InterfaceCatalog::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, wireless: bool, supports_ap: bool, kind: &str) -> InterfaceEntry {
        InterfaceEntry {
            name: name.to_owned(),
            is_wireless: wireless,
            supports_ap,
            kind: kind.to_owned(),
            is_up: true,
        }
    }

    #[test]
    fn partitions_by_role() {
        let catalog = InterfaceCatalog::from_entries(vec![
            entry("eth0", false, false, "ethernet"),
            entry("wlan0", true, true, "wifi"),
            entry("wlan1", true, false, "wifi"),
        ]);

        assert_eq!(catalog.wireless.len(), 1);
        assert_eq!(catalog.wireless[0].name, "wlan0");
        assert_eq!(catalog.wired.len(), 1);
        assert_eq!(catalog.wired[0].name, "eth0");
    }

    #[test]
    fn empty_listing_falls_back_to_placeholders() {
        let catalog = InterfaceCatalog::from_entries(Vec::new());
        assert_eq!(catalog.wireless[0].name, "wlan0");
        assert_eq!(catalog.wired[0].name, "eth0");
    }

    #[test]
    fn non_ap_wireless_falls_back_but_keeps_wired() {
        let catalog = InterfaceCatalog::from_entries(vec![
            entry("wlan0", true, false, "wifi"),
            entry("enp1s0", false, false, "ethernet"),
        ]);
        assert_eq!(catalog.wireless[0].name, "wlan0");
        assert!(!catalog.wireless[0].is_up, "placeholder expected");
        assert_eq!(catalog.wired[0].name, "enp1s0");
    }
}
