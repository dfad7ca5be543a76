//! Stop handler.
//!
//! Stopping tears the session down for every connected station, so it
//! asks first (unless `--yes`) and reattaches before issuing the stop
//! so the state machine guards apply.

use hotspotctl_core::{DaemonClient, SessionController};

use crate::cli::GlobalOpts;
use crate::config::Resolved;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    client: DaemonClient,
    resolved: &Resolved,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !util::confirm("Stop the running hotspot?", global.yes)? {
        output::print_output("Aborted.", global.quiet);
        return Ok(());
    }

    let controller = SessionController::new(client, resolved.poller.clone());
    if !controller.attach().await? {
        return Err(CliError::NotActive);
    }

    controller.stop().await?;
    output::print_output("Hotspot stopped.", global.quiet);
    Ok(())
}
