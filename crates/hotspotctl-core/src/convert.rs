// ── Wire-to-domain conversions ──

use hotspotctl_api::{StatusResponse, WireStation};

use crate::model::{MacAddress, Station, StatusSnapshot};

impl From<WireStation> for Station {
    fn from(wire: WireStation) -> Self {
        Self {
            mac: MacAddress::new(&wire.mac),
            hostname: wire.hostname.filter(|h| !h.is_empty()),
            ip: wire.ip.and_then(|ip| ip.parse().ok()),
            signal_dbm: wire.signal,
        }
    }
}

impl From<StatusResponse> for StatusSnapshot {
    fn from(resp: StatusResponse) -> Self {
        Self {
            is_running: resp.status.is_running,
            uptime_secs: resp.status.uptime,
            config: resp.status.config,
            stations: resp.clients.into_iter().map(Station::from).collect(),
            logs: resp.status.logs,
            wifi: resp.wifi_stats,
            internet: resp.internet_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_from_wire_normalizes_and_parses() {
        let station = Station::from(WireStation {
            mac: "AA:BB:CC:11:22:33".into(),
            hostname: Some(String::new()),
            ip: Some("192.168.12.40".into()),
            signal: Some(-61),
        });

        assert_eq!(station.mac.as_str(), "aa:bb:cc:11:22:33");
        assert_eq!(station.hostname, None);
        assert_eq!(station.ip, Some("192.168.12.40".parse().expect("ip")));
        assert_eq!(station.signal_dbm, Some(-61));
    }

    #[test]
    fn station_tolerates_unparseable_ip() {
        let station = Station::from(WireStation {
            mac: "aa:bb:cc:11:22:33".into(),
            hostname: Some("phone".into()),
            ip: Some("<incomplete>".into()),
            signal: None,
        });

        assert_eq!(station.ip, None);
        assert_eq!(station.hostname.as_deref(), Some("phone"));
    }
}
