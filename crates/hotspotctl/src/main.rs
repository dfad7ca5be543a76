mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotspotctl_core::{DaemonClient, TransportConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Profile management never talks to a daemon.
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "hotspotctl", &mut std::io::stdout());
            Ok(())
        }

        // Everything else resolves a daemon endpoint first (though
        // `preview` only uses the wire for --last).
        cmd => {
            let resolved = config::resolve(&cli.global)?;
            let transport = TransportConfig {
                timeout: resolved.timeout,
            };
            let client = DaemonClient::new(resolved.url.clone(), &transport)
                .map_err(hotspotctl_core::CoreError::from)?;

            tracing::debug!(url = %resolved.url, "dispatching command");
            commands::dispatch(cmd, client, resolved, &cli.global).await
        }
    }
}
