//! One-shot status command.

use serde::Serialize;
use tabled::Tabled;

use hotspotctl_core::{CoreError, DaemonClient, InterfaceCounters, Station, StatusSnapshot};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct StatusReport {
    running: bool,
    uptime_secs: u64,
    ssid: Option<String>,
    station_count: usize,
    stations: Vec<Station>,
    wifi: InterfaceCounters,
    internet: InterfaceCounters,
}

#[derive(Tabled)]
pub(crate) struct StationRow {
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Signal")]
    signal: String,
}

impl From<&Station> for StationRow {
    fn from(s: &Station) -> Self {
        Self {
            hostname: s
                .hostname
                .clone()
                .unwrap_or_else(|| "Unknown Device".into()),
            ip: s
                .ip
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| "Obtaining IP...".into()),
            mac: s.mac.to_string(),
            signal: s
                .signal_dbm
                .map(|dbm| format!("{dbm} dBm"))
                .unwrap_or_default(),
        }
    }
}

fn detail(report: &StatusReport) -> String {
    let mut lines = vec![format!(
        "State:     {}",
        if report.running { "Active" } else { "Inactive" }
    )];

    if report.running {
        lines.push(format!("Uptime:    {}", output::fmt_uptime(report.uptime_secs)));
        if let Some(ref ssid) = report.ssid {
            lines.push(format!("SSID:      {ssid}"));
        }
        lines.push(format!("Stations:  {}", report.station_count));
        lines.push(format!(
            "Wifi:      tx {} / rx {}",
            output::fmt_bytes(report.wifi.tx_bytes),
            output::fmt_bytes(report.wifi.rx_bytes)
        ));
        lines.push(format!(
            "Internet:  tx {} / rx {}",
            output::fmt_bytes(report.internet.tx_bytes),
            output::fmt_bytes(report.internet.rx_bytes)
        ));
        let total = report.wifi.tx_bytes
            + report.wifi.rx_bytes
            + report.internet.tx_bytes
            + report.internet.rx_bytes;
        lines.push(format!("Total:     {}", output::fmt_bytes(total)));
    }

    lines.join("\n")
}

pub async fn handle(client: &DaemonClient, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = StatusSnapshot::from(client.status().await.map_err(CoreError::from)?);

    let report = StatusReport {
        running: snapshot.is_running,
        uptime_secs: snapshot.uptime_secs,
        ssid: snapshot.config.as_ref().map(|c| c.ssid.clone()),
        station_count: snapshot.stations.len(),
        stations: snapshot.stations,
        wifi: snapshot.wifi,
        internet: snapshot.internet,
    };

    let out = output::render_single(&global.output, &report, detail, |r| {
        if r.running { "active" } else { "inactive" }.to_owned()
    });
    output::print_output(&out, global.quiet);

    if matches!(global.output, OutputFormat::Table) && !report.stations.is_empty() {
        let table = output::render_list(
            &OutputFormat::Table,
            &report.stations,
            |s| StationRow::from(s),
            |s| s.mac.to_string(),
        );
        output::print_output(&table, global.quiet);
    }

    Ok(())
}
