//! Daemon-persisted configuration commands: the last submitted config
//! and the raw hostapd.conf the daemon applied.

use hotspotctl_core::{CoreError, DaemonClient, HotspotConfig, WpaVersion, preview};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn config_detail(config: &HotspotConfig) -> String {
    let mut standard = Vec::new();
    if config.ieee80211ax {
        standard.push("WiFi 6 (802.11ax)");
    }
    if config.ieee80211ac {
        standard.push("WiFi 5 (802.11ac)");
    }
    if config.ieee80211n {
        standard.push("WiFi 4 (802.11n)");
    }
    let standard = if standard.is_empty() {
        "Legacy".to_owned()
    } else {
        standard.join(", ")
    };

    let security = if config.password.is_empty() {
        "Open"
    } else {
        match config.wpa_version {
            WpaVersion::Wpa3 => "WPA3 (SAE)",
            WpaVersion::Wpa2 => "WPA2",
            WpaVersion::Wpa1 => "WPA",
        }
    };

    let interfaces = match config.internet_interface {
        Some(ref inet) => format!("{} -> {}", config.wifi_interface, inet),
        None => format!("{} (no internet sharing)", config.wifi_interface),
    };

    [
        format!("SSID:       {}", config.ssid),
        format!("Standard:   {standard}"),
        format!("Band:       {} GHz", config.freq_band),
        format!("Channel:    {}", config.channel),
        format!("Security:   {security}"),
        format!("Interfaces: {interfaces}"),
        format!("Equivalent: {}", preview::render(config)),
    ]
    .join("\n")
}

pub async fn last_config(client: &DaemonClient, global: &GlobalOpts) -> Result<(), CliError> {
    match client.last_config().await.map_err(CoreError::from)? {
        Some(config) => {
            let out = output::render_single(&global.output, &config, config_detail, |c| {
                c.ssid.clone()
            });
            output::print_output(&out, global.quiet);
        }
        None => output::print_output("No saved configuration found.", global.quiet),
    }
    Ok(())
}

pub async fn hostapd_config(client: &DaemonClient, global: &GlobalOpts) -> Result<(), CliError> {
    match client.hostapd_config().await.map_err(CoreError::from)? {
        Some(text) => output::print_output(text.trim_end(), global.quiet),
        None => output::print_output(
            "No configuration file found. Start the hotspot first.",
            global.quiet,
        ),
    }
    Ok(())
}
