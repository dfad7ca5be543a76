// hotspotctl-core: Reconciliation engine between the daemon API and consumers.

pub mod channels;
pub mod convert;
pub mod error;
pub mod events;
pub mod form;
pub mod interfaces;
pub mod model;
pub mod poller;
pub mod preview;
pub mod rates;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use events::{DEFAULT_DEDUP_WINDOW, LogEventExtractor};
pub use form::{ConfigForm, ValidationError, validate};
pub use interfaces::{InterfaceCatalog, load_interfaces};
pub use poller::{DEFAULT_POLL_INTERVAL, PollerSettings, Reconciler, StatusView};
pub use rates::{RateTracker, TrafficRates};
pub use session::{SessionController, SessionEvent, SessionState};

pub use model::{LifecycleEvent, LifecycleKind, MacAddress, Station, StatusSnapshot};

// Wire-level types consumers hand back to the daemon, re-exported so
// most of them never import hotspotctl-api directly.
pub use hotspotctl_api::{
    DaemonClient, FreqBand, HotspotConfig, InterfaceCounters, InterfaceEntry, LogEntry,
    StartReceipt, TransportConfig, WpaVersion,
};
