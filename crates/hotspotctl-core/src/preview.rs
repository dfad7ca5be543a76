// ── Command preview ──
//
// Renders the `create_ap` invocation equivalent to a configuration, for
// operator inspection. Pure and deterministic: identical input yields an
// identical string, so previews are regression-testable artifacts.
//
// Flag groups emit in a fixed order: interface/radio, authentication,
// MAC filtering, capabilities, country, driver, DHCP, dnsmasq toggles,
// then the positional tail. A flag is omitted whenever its backing
// value is empty, false, or the documented default.

use hotspotctl_api::{FreqBand, HotspotConfig, WpaVersion};

use crate::channels;
use crate::form::{
    DEFAULT_DHCP_DNS, DEFAULT_DHCP_END, DEFAULT_DHCP_START, DEFAULT_DRIVER, DEFAULT_GATEWAY,
    DEFAULT_LEASE_TIME,
};

fn flag(args: &mut Vec<String>, name: &str) {
    args.push(name.to_owned());
}

fn pair(args: &mut Vec<String>, name: &str, value: &str) {
    args.push(name.to_owned());
    args.push(value.to_owned());
}

pub fn render(config: &HotspotConfig) -> String {
    let mut args: Vec<String> = vec!["create_ap".to_owned()];

    // Interface and radio behaviour
    if config.no_internet {
        flag(&mut args, "-n");
    }
    if config.freq_band == FreqBand::Band5 {
        pair(&mut args, "--freq-band", "5");
    }
    if !config.channel.is_empty() && config.channel != channels::default_channel(config.freq_band)
    {
        pair(&mut args, "-c", &config.channel);
    }
    if config.hidden {
        flag(&mut args, "--hidden");
    }
    if config.isolate {
        flag(&mut args, "--isolate-clients");
    }

    // Authentication
    if !config.password.is_empty() && config.wpa_version != WpaVersion::Wpa2 {
        pair(&mut args, "-w", &config.wpa_version.to_string());
    }
    if config.psk {
        flag(&mut args, "--psk");
    }

    // MAC filtering
    if config.mac_filter {
        flag(&mut args, "--mac-filter");
    }
    if !config.mac_filter_accept.is_empty() {
        pair(&mut args, "--mac-filter-accept", &config.mac_filter_accept);
    }

    // Capabilities
    if config.ieee80211n {
        flag(&mut args, "--ieee80211n");
    }
    if config.ieee80211ac {
        flag(&mut args, "--ieee80211ac");
    }
    if config.ieee80211ax {
        flag(&mut args, "--ieee80211ax");
    }
    if !config.ht_capab.is_empty() {
        pair(&mut args, "--ht_capab", &config.ht_capab);
    }
    if !config.vht_capab.is_empty() {
        pair(&mut args, "--vht_capab", &config.vht_capab);
    }
    if !config.he_capab.is_empty() {
        pair(&mut args, "--he_capab", &config.he_capab);
    }

    // Regulatory domain and driver
    if !config.country.is_empty() {
        pair(&mut args, "--country", &config.country);
    }
    if !config.driver.is_empty() && config.driver != DEFAULT_DRIVER {
        pair(&mut args, "--driver", &config.driver);
    }

    // DHCP and addressing
    if !config.gateway.is_empty() && config.gateway != DEFAULT_GATEWAY {
        pair(&mut args, "-g", &config.gateway);
    }
    if !config.dhcp_dns.is_empty() && config.dhcp_dns != DEFAULT_DHCP_DNS {
        pair(&mut args, "--dhcp-dns", &config.dhcp_dns);
    }
    if !config.dhcp_start.is_empty() && config.dhcp_start != DEFAULT_DHCP_START {
        pair(&mut args, "--dhcp-start", &config.dhcp_start);
    }
    if !config.dhcp_end.is_empty() && config.dhcp_end != DEFAULT_DHCP_END {
        pair(&mut args, "--dhcp-end", &config.dhcp_end);
    }
    if !config.lease_time.is_empty() && config.lease_time != DEFAULT_LEASE_TIME {
        pair(&mut args, "--lease-time", &config.lease_time);
    }
    if !config.max_stations.is_empty() {
        pair(&mut args, "--max-stations", &config.max_stations);
    }
    if !config.hosts_file.is_empty() {
        pair(&mut args, "--hosts-file", &config.hosts_file);
    }

    // dnsmasq behaviour
    if config.no_dns {
        flag(&mut args, "--no-dns");
    }
    if config.no_dnsmasq {
        flag(&mut args, "--no-dnsmasq");
    }

    // Positional tail: wifi interface, internet interface, ssid,
    // passphrase (open networks omit the passphrase).
    args.push(config.wifi_interface.clone());
    if !config.no_internet {
        if let Some(ref iface) = config.internet_interface {
            args.push(iface.clone());
        }
    }
    args.push(config.ssid.clone());
    if !config.password.is_empty() {
        args.push(config.password.clone());
    }

    args.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::ConfigForm;

    #[test]
    fn defaults_render_to_bare_invocation() {
        let mut form = ConfigForm::new();
        form.ssid = "HomeNet".into();
        form.password = "secret123".into();

        assert_eq!(render(&form.capture()), "create_ap wlan0 eth0 HomeNet secret123");
    }

    #[test]
    fn open_network_omits_passphrase() {
        let mut form = ConfigForm::new();
        form.ssid = "CoffeeShop".into();

        assert_eq!(render(&form.capture()), "create_ap wlan0 eth0 CoffeeShop");
    }

    #[test]
    fn offline_mode_drops_internet_interface() {
        let mut form = ConfigForm::new();
        form.ssid = "Kiosk".into();
        form.password = "kioskpass99".into();
        form.no_internet = true;

        assert_eq!(render(&form.capture()), "create_ap -n wlan0 Kiosk kioskpass99");
    }

    #[test]
    fn full_five_ghz_configuration() {
        let mut form = ConfigForm::new();
        form.wifi_interface = "wlan1".into();
        form.ssid = "Lab5G".into();
        form.password = "0123456789abcdef".into();
        form.wpa_version = WpaVersion::Wpa3;
        form.select_band(FreqBand::Band5);
        assert!(form.select_channel("149"));
        form.ieee80211n = true;
        form.ieee80211ac = true;
        form.ht_capab = "[HT40+]".into();
        form.country = "de".into();
        form.gateway = "10.1.0.1".into();
        form.hidden = true;

        assert_eq!(
            render(&form.capture()),
            "create_ap --freq-band 5 -c 149 --hidden -w 3 --ieee80211n --ieee80211ac \
             --ht_capab [HT40+] --country DE -g 10.1.0.1 wlan1 eth0 Lab5G 0123456789abcdef"
        );
    }

    #[test]
    fn filtering_and_dnsmasq_toggles() {
        let mut form = ConfigForm::new();
        form.ssid = "Filtered".into();
        form.password = "filteredpass".into();
        form.mac_filter = true;
        form.mac_filter_accept = "/etc/hostapd.accept".into();
        form.no_dns = true;
        form.no_dnsmasq = true;

        assert_eq!(
            render(&form.capture()),
            "create_ap --mac-filter --mac-filter-accept /etc/hostapd.accept \
             --no-dns --no-dnsmasq wlan0 eth0 Filtered filteredpass"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut form = ConfigForm::new();
        form.ssid = "Stable".into();
        form.password = "stablepass".into();
        form.select_band(FreqBand::Band5);
        let config = form.capture();

        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn default_channel_is_omitted_per_band() {
        let mut form = ConfigForm::new();
        form.ssid = "N".into();
        form.select_band(FreqBand::Band5);
        // 36 is the 5 GHz default, so no -c flag.
        let rendered = render(&form.capture());
        assert!(!rendered.contains("-c "), "unexpected channel flag: {rendered}");
        assert!(rendered.contains("--freq-band 5"));
    }
}
