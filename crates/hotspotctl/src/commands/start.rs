//! Start and preview handlers.

use hotspotctl_core::{ConfigForm, CoreError, DaemonClient, SessionController, preview};

use crate::cli::{ApOpts, GlobalOpts, PreviewArgs, StartArgs};
use crate::config::Resolved;
use crate::error::CliError;
use crate::output;

use super::{util, watch};

/// Build a form from flags, optionally seeded from the daemon's
/// persisted last configuration.
async fn build_form(
    client: &DaemonClient,
    opts: &ApOpts,
    quiet: bool,
) -> Result<ConfigForm, CliError> {
    let mut form = ConfigForm::new();

    if opts.last {
        match client.last_config().await.map_err(CoreError::from)? {
            Some(last) => form.restore(&last),
            None => output::print_output("No saved configuration found.", quiet),
        }
    }

    util::apply_flags(&mut form, opts)?;
    Ok(form)
}

pub async fn handle(
    client: DaemonClient,
    resolved: &Resolved,
    args: StartArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let form = build_form(&client, &args.ap, global.quiet).await?;
    let config = form.capture();

    let controller = SessionController::new(client, resolved.poller.clone());
    let receipt = controller.start(config.clone()).await?;

    if !global.quiet {
        println!("Hotspot started: {}", config.ssid);
        if let Some(pid) = receipt.hostapd_pid {
            println!("  hostapd PID: {pid}");
        }
        if let Some(pid) = receipt.dnsmasq_pid {
            println!("  dnsmasq PID: {pid}");
        }
        if let Some(ref file) = receipt.config_file {
            println!("  config file: {file}");
        }
        println!("  equivalent: {}", preview::render(&config));
    }

    if args.watch {
        watch::run_loop(&controller, global).await;
    }

    controller.shutdown().await;
    Ok(())
}

pub async fn preview(
    client: &DaemonClient,
    args: PreviewArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let form = build_form(client, &args.ap, global.quiet).await?;
    output::print_output(&preview::render(&form.capture()), global.quiet);
    Ok(())
}
