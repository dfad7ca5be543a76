//! Interface listing command.

use tabled::Tabled;

use hotspotctl_core::{DaemonClient, InterfaceEntry, load_interfaces};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "State")]
    state: String,
}

impl From<&InterfaceEntry> for InterfaceRow {
    fn from(e: &InterfaceEntry) -> Self {
        Self {
            name: e.name.clone(),
            kind: e.kind.clone(),
            ap: if e.supports_ap { "yes" } else { "" }.to_owned(),
            state: if e.is_up { "up" } else { "down" }.to_owned(),
        }
    }
}

pub async fn handle(client: &DaemonClient, global: &GlobalOpts) -> Result<(), CliError> {
    let catalog = load_interfaces(client).await?;

    // Wireless first, matching the role the operator picks first.
    let mut entries = catalog.wireless;
    entries.extend(catalog.wired);

    let out = output::render_list(&global.output, &entries, |e| InterfaceRow::from(e), |e| {
        e.name.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
