//! Command handlers.

pub mod config_cmd;
pub mod daemon_cfg;
pub mod interfaces;
pub mod start;
pub mod status;
pub mod stop;
pub mod util;
pub mod watch;

use hotspotctl_core::DaemonClient;

use crate::cli::{Command, GlobalOpts};
use crate::config::Resolved;
use crate::error::CliError;

pub async fn dispatch(
    command: Command,
    client: DaemonClient,
    resolved: Resolved,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Status => status::handle(&client, global).await,
        Command::Watch => watch::handle(client, &resolved, global).await,
        Command::Start(args) => start::handle(client, &resolved, args, global).await,
        Command::Stop => stop::handle(client, &resolved, global).await,
        Command::Interfaces => interfaces::handle(&client, global).await,
        Command::Preview(args) => start::preview(&client, args, global).await,
        Command::LastConfig => daemon_cfg::last_config(&client, global).await,
        Command::HostapdConfig => daemon_cfg::hostapd_config(&client, global).await,
        Command::Config(_) | Command::Completions(_) => unreachable!("handled before dispatch"),
    }
}
