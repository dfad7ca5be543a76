//! Live watch loop: streams reconciled status lines and station events
//! until Ctrl-C or the session ends.

use owo_colors::OwoColorize;

use hotspotctl_core::{
    DaemonClient, LifecycleKind, SessionController, SessionEvent, SessionState, StatusView,
};

use crate::cli::GlobalOpts;
use crate::config::Resolved;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: DaemonClient,
    resolved: &Resolved,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let controller = SessionController::new(client, resolved.poller.clone());

    if !controller.attach().await? {
        output::print_output("Daemon reports no active session.", global.quiet);
        return Ok(());
    }

    run_loop(&controller, global).await;
    controller.shutdown().await;
    Ok(())
}

/// Stream updates from an attached controller. Returns on Ctrl-C or
/// when the session leaves the Active state.
pub async fn run_loop(controller: &SessionController, global: &GlobalOpts) {
    let color = output::should_color(&global.color);
    let mut state_rx = controller.state();
    let mut status_rx = controller.status();
    let mut events = controller.events();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,

            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let line = status_rx.borrow().as_ref().map(status_line);
                if let Some(line) = line {
                    output::print_output(&line, global.quiet);
                }
            }

            event = events.recv() => {
                match event {
                    Ok(ref ev) => output::print_output(&event_line(ev, color), global.quiet),
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(_) => break,
                }
            }

            changed = state_rx.changed() => {
                if changed.is_err() || *state_rx.borrow() == SessionState::Inactive {
                    break;
                }
            }
        }
    }
}

fn status_line(view: &StatusView) -> String {
    format!(
        "uptime {} | stations {} | wifi tx {} rx {} | total {}",
        output::fmt_uptime(view.uptime_secs),
        view.station_count,
        output::fmt_rate(view.rates.wifi_tx),
        output::fmt_rate(view.rates.wifi_rx),
        output::fmt_bytes(view.total_bytes()),
    )
}

fn event_line(event: &SessionEvent, color: bool) -> String {
    match event {
        SessionEvent::Lifecycle(ev) => {
            let text = match ev.kind {
                LifecycleKind::Connected => format!("station {} connected", ev.mac),
                LifecycleKind::Disconnected => format!("station {} disconnected", ev.mac),
                LifecycleKind::Authenticated => {
                    format!("station {} completed WPA handshake", ev.mac)
                }
            };
            if color {
                match ev.kind {
                    LifecycleKind::Connected => text.green().to_string(),
                    LifecycleKind::Disconnected => text.yellow().to_string(),
                    LifecycleKind::Authenticated => text.cyan().to_string(),
                }
            } else {
                text
            }
        }
        SessionEvent::UnexpectedTermination => {
            let text = "hotspot stopped unexpectedly".to_owned();
            if color { text.red().to_string() } else { text }
        }
        SessionEvent::PollDegraded { message } => {
            format!("status poll failed: {message} (retrying)")
        }
    }
}
