//! Local profile management over the TOML config file.

use std::fs;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{ConfigCmdArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Profile, Settings};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct ProfileInfo {
    name: String,
    url: String,
    default: bool,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Default")]
    default: String,
}

impl From<&ProfileInfo> for ProfileRow {
    fn from(p: &ProfileInfo) -> Self {
        Self {
            name: p.name.clone(),
            url: p.url.clone(),
            default: if p.default { "*" } else { "" }.to_owned(),
        }
    }
}

pub fn handle(args: ConfigCmdArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { url } => init(&url, global),
        ConfigCommand::List => list(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

fn init(url: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path();
    if path.exists() {
        return Err(CliError::Validation {
            field: "config".into(),
            reason: format!("{} already exists", path.display()),
        });
    }

    let mut settings = Settings::default();
    settings.default_profile = Some("default".into());
    settings.profiles.insert(
        "default".into(),
        Profile {
            url: url.to_owned(),
            timeout: None,
            poll_interval: None,
        },
    );

    let text = toml::to_string_pretty(&settings).map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, text)?;

    output::print_output(&format!("Wrote {}", path.display()), global.quiet);
    Ok(())
}

fn list(global: &GlobalOpts) -> Result<(), CliError> {
    let settings = config::load()?;
    let default = settings.default_profile.clone().unwrap_or_default();

    let mut profiles: Vec<ProfileInfo> = settings
        .profiles
        .iter()
        .map(|(name, profile)| ProfileInfo {
            name: name.clone(),
            url: profile.url.clone(),
            default: *name == default,
        })
        .collect();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));

    if profiles.is_empty() {
        output::print_output(
            "No profiles configured. Create one with: hotspotctl config init",
            global.quiet,
        );
        return Ok(());
    }

    let out = output::render_list(&global.output, &profiles, |p| ProfileRow::from(p), |p| {
        p.name.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let resolved = config::resolve(global)?;
    let lines = [
        format!("url:           {}", resolved.url),
        format!("timeout:       {}s", resolved.timeout.as_secs()),
        format!(
            "poll interval: {}s",
            resolved.poller.poll_interval.as_secs()
        ),
        format!("dedup window:  {}", resolved.poller.dedup_window),
    ];
    output::print_output(&lines.join("\n"), global.quiet);
    Ok(())
}
