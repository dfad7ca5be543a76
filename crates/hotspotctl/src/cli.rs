//! Clap derive structures for the `hotspotctl` CLI.
//!
//! Defines the command tree, global flags, and the access-point
//! configuration flag group shared by `start` and `preview`.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hotspotctl -- drive a wifi hotspot daemon from the command line
#[derive(Debug, Parser)]
#[command(
    name = "hotspotctl",
    version,
    about = "Manage a wifi hotspot daemon from the command line",
    long_about = "A CLI for a remote create_ap/hostapd control daemon.\n\n\
        Starts and stops access-point sessions, watches connected stations\n\
        and traffic live, and previews the equivalent create_ap invocation.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Daemon profile to use
    #[arg(long, short = 'p', env = "HOTSPOT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Daemon URL (overrides profile)
    #[arg(long, short = 'u', env = "HOTSPOT_URL", global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOTSPOT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "HOTSPOT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Seconds between status polls while watching
    #[arg(long, env = "HOTSPOT_POLL_INTERVAL", global = true)]
    pub poll_interval: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

// ── Command tree ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the daemon's current status
    Status,

    /// Attach to the daemon and stream status updates and station events
    Watch,

    /// Start the hotspot with the given configuration
    Start(StartArgs),

    /// Stop the running hotspot
    Stop,

    /// List the daemon host's network interfaces
    Interfaces,

    /// Print the equivalent create_ap invocation without starting
    Preview(PreviewArgs),

    /// Fetch the last configuration the daemon persisted
    LastConfig,

    /// Fetch the raw hostapd configuration applied by the daemon
    HostapdConfig,

    /// Manage local daemon profiles
    Config(ConfigCmdArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Access-point configuration flags ─────────────────────────────────

/// Flags mirroring every operator-settable configuration field.
#[derive(Debug, Args)]
pub struct ApOpts {
    /// Broadcast network name
    #[arg(long)]
    pub ssid: Option<String>,

    /// WPA passphrase (omit for an open network)
    #[arg(long)]
    pub password: Option<String>,

    /// The password is a raw 64-hex-digit pre-shared key
    #[arg(long)]
    pub psk: bool,

    /// WPA version (1, 2 or 3)
    #[arg(long, default_value = "2")]
    pub wpa: String,

    /// Frequency band (2.4 or 5)
    #[arg(long, default_value = "2.4")]
    pub band: String,

    /// Channel within the selected band
    #[arg(long)]
    pub channel: Option<String>,

    /// Wireless interface running the access point
    #[arg(long, default_value = "wlan0")]
    pub wifi_interface: String,

    /// Interface providing the internet uplink
    #[arg(long, default_value = "eth0")]
    pub internet_interface: String,

    /// Two-letter country code (regulatory domain)
    #[arg(long)]
    pub country: Option<String>,

    /// Gateway address for the AP subnet
    #[arg(long)]
    pub gateway: Option<String>,

    /// DNS servers handed out by DHCP (comma separated)
    #[arg(long)]
    pub dhcp_dns: Option<String>,

    /// hostapd driver
    #[arg(long)]
    pub driver: Option<String>,

    /// First DHCP pool address
    #[arg(long)]
    pub dhcp_start: Option<String>,

    /// Last DHCP pool address
    #[arg(long)]
    pub dhcp_end: Option<String>,

    /// DHCP lease time (e.g. 12h)
    #[arg(long)]
    pub lease_time: Option<String>,

    /// Maximum number of associated stations
    #[arg(long)]
    pub max_stations: Option<String>,

    /// Enable 802.11n
    #[arg(long = "80211n")]
    pub ieee80211n: bool,

    /// Enable 802.11ac (5 GHz only; implies 802.11n)
    #[arg(long = "80211ac")]
    pub ieee80211ac: bool,

    /// Enable 802.11ax (implies 802.11n)
    #[arg(long = "80211ax")]
    pub ieee80211ax: bool,

    /// hostapd ht_capab string
    #[arg(long)]
    pub ht_capab: Option<String>,

    /// hostapd vht_capab string
    #[arg(long)]
    pub vht_capab: Option<String>,

    /// hostapd he_capab string
    #[arg(long)]
    pub he_capab: Option<String>,

    /// Do not broadcast the SSID
    #[arg(long)]
    pub hidden: bool,

    /// Isolate stations from each other
    #[arg(long)]
    pub isolate: bool,

    /// Enable MAC address filtering
    #[arg(long)]
    pub mac_filter: bool,

    /// Accept-list file for MAC filtering
    #[arg(long)]
    pub mac_filter_accept: Option<String>,

    /// Extra hosts file served to stations
    #[arg(long)]
    pub hosts_file: Option<String>,

    /// Run without internet sharing
    #[arg(long)]
    pub no_internet: bool,

    /// Disable the DNS server
    #[arg(long)]
    pub no_dns: bool,

    /// Do not run dnsmasq at all
    #[arg(long)]
    pub no_dnsmasq: bool,

    /// Start from the daemon's persisted last configuration, with any
    /// other flags applied on top
    #[arg(long)]
    pub last: bool,
}

#[derive(Debug, Args)]
pub struct StartArgs {
    #[command(flatten)]
    pub ap: ApOpts,

    /// Keep running after a successful start and stream status updates
    #[arg(long)]
    pub watch: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub ap: ApOpts,
}

// ── Config subcommand ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigCmdArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a starter config file with a default profile
    Init {
        /// Daemon URL for the default profile
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        url: String,
    },

    /// List configured profiles
    List,

    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
