// ── Domain model ──
//
// Canonical representations of the entities the reconciliation engine
// works with. Wire payloads from hotspotctl-api convert into these (see
// crate::convert); consumers only ever see the domain forms.

pub mod event;
pub mod mac;
pub mod status;

pub use event::{LifecycleEvent, LifecycleKind};
pub use mac::MacAddress;
pub use status::{Station, StatusSnapshot};
