//! Shared helpers for command handlers.

use std::io::IsTerminal;

use dialoguer::Confirm;

use hotspotctl_core::{ConfigForm, FreqBand, WpaVersion};

use crate::cli::ApOpts;
use crate::error::CliError;

/// Ask for confirmation unless `--yes` was given. Non-interactive
/// sessions must pass `--yes` explicitly rather than hang on a prompt.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, CliError> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "confirmation".into(),
            reason: "refusing to prompt in a non-interactive session; pass --yes".into(),
        });
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::Validation {
            field: "confirmation".into(),
            reason: e.to_string(),
        })
}

/// Apply configuration flags onto a form (possibly pre-populated from
/// the daemon's last config). Band is applied before channel so the
/// channel is checked against the right set.
pub fn apply_flags(form: &mut ConfigForm, opts: &ApOpts) -> Result<(), CliError> {
    let band: FreqBand = opts.band.parse::<FreqBand>().map_err(|e| CliError::Validation {
        field: "band".into(),
        reason: e.to_string(),
    })?;
    form.select_band(band);

    if let Some(ref channel) = opts.channel {
        if !form.select_channel(channel) {
            return Err(CliError::Validation {
                field: "channel".into(),
                reason: format!("{channel} is not a valid channel on the {band} GHz band"),
            });
        }
    }

    let wpa: WpaVersion = opts.wpa.parse::<WpaVersion>().map_err(|e| CliError::Validation {
        field: "wpa".into(),
        reason: e.to_string(),
    })?;
    form.wpa_version = wpa;

    form.wifi_interface = opts.wifi_interface.clone();
    form.internet_interface = opts.internet_interface.clone();

    set_opt(&mut form.ssid, &opts.ssid);
    set_opt(&mut form.password, &opts.password);
    set_opt(&mut form.country, &opts.country);
    set_opt(&mut form.gateway, &opts.gateway);
    set_opt(&mut form.dhcp_dns, &opts.dhcp_dns);
    set_opt(&mut form.driver, &opts.driver);
    set_opt(&mut form.dhcp_start, &opts.dhcp_start);
    set_opt(&mut form.dhcp_end, &opts.dhcp_end);
    set_opt(&mut form.lease_time, &opts.lease_time);
    set_opt(&mut form.max_stations, &opts.max_stations);
    set_opt(&mut form.ht_capab, &opts.ht_capab);
    set_opt(&mut form.vht_capab, &opts.vht_capab);
    set_opt(&mut form.he_capab, &opts.he_capab);
    set_opt(&mut form.mac_filter_accept, &opts.mac_filter_accept);
    set_opt(&mut form.hosts_file, &opts.hosts_file);

    // Toggles only switch on, so they compose with --last.
    form.psk |= opts.psk;
    form.ieee80211n |= opts.ieee80211n;
    form.ieee80211ac |= opts.ieee80211ac;
    form.ieee80211ax |= opts.ieee80211ax;
    form.hidden |= opts.hidden;
    form.isolate |= opts.isolate;
    form.mac_filter |= opts.mac_filter;
    form.no_internet |= opts.no_internet;
    form.no_dns |= opts.no_dns;
    form.no_dnsmasq |= opts.no_dnsmasq;

    Ok(())
}

fn set_opt(slot: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}
