//! CLI-owned configuration: TOML profiles plus resolution into the
//! endpoint and poller settings the core consumes.
//!
//! Core never sees these types -- it receives a pre-built client and
//! `PollerSettings`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use hotspotctl_core::PollerSettings;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub const DEFAULT_DAEMON_URL: &str = "http://127.0.0.1:5000";

// ── TOML config structs ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Profile used when --profile is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named daemon profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Seconds between status polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,

    /// Recently-emitted window for station event deduplication.
    #[serde(default = "default_dedup_window")]
    pub dedup_window: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            poll_interval: default_poll_interval(),
            dedup_window: default_dedup_window(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_poll_interval() -> u64 {
    2
}
fn default_dedup_window() -> usize {
    5
}

/// A named daemon profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Daemon base URL (e.g. "http://pi.lan:5000").
    pub url: String,

    #[serde(default)]
    pub timeout: Option<u64>,

    #[serde(default)]
    pub poll_interval: Option<u64>,
}

// ── Loading ──────────────────────────────────────────────────────────

pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "hotspotctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("hotspotctl.toml"))
}

pub fn load() -> Result<Settings, CliError> {
    Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("HOTSPOTCTL_").split("__"))
        .extract()
        .map_err(|e| CliError::Config(e.to_string()))
}

// ── Resolution ───────────────────────────────────────────────────────

/// Fully resolved connection parameters for one invocation.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub url: Url,
    pub timeout: Duration,
    pub poller: PollerSettings,
}

/// Resolve endpoint and poller settings from the config file, profile
/// selection, and CLI flag overrides. Without any configuration the
/// daemon is assumed local on its default port.
pub fn resolve(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let settings = load()?;

    let profile_name = global
        .profile
        .clone()
        .or_else(|| settings.default_profile.clone());

    let profile = match (&global.profile, &profile_name) {
        // An explicitly requested profile must exist.
        (Some(name), _) => {
            Some(settings.profiles.get(name).ok_or_else(|| CliError::Validation {
                field: "profile".into(),
                reason: format!("unknown profile '{name}' (see: hotspotctl config list)"),
            })?)
        }
        // A configured default profile may be absent.
        (None, Some(name)) => settings.profiles.get(name),
        (None, None) => None,
    };

    let url_str = global
        .url
        .clone()
        .or_else(|| profile.map(|p| p.url.clone()))
        .unwrap_or_else(|| DEFAULT_DAEMON_URL.to_owned());

    let url: Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let timeout = global
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .unwrap_or(settings.defaults.timeout);

    // tokio::time::interval panics on a zero period.
    let poll_interval = global
        .poll_interval
        .or_else(|| profile.and_then(|p| p.poll_interval))
        .unwrap_or(settings.defaults.poll_interval)
        .max(1);

    Ok(Resolved {
        url,
        timeout: Duration::from_secs(timeout),
        poller: PollerSettings {
            poll_interval: Duration::from_secs(poll_interval),
            dedup_window: settings.defaults.dedup_window,
        },
    })
}
