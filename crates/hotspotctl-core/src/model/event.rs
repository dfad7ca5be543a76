// ── Station lifecycle events ──

use serde::Serialize;

use super::mac::MacAddress;

/// What happened to a station, as read from the hostapd log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifecycleKind {
    /// Station association established.
    Connected,
    /// Station association torn down.
    Disconnected,
    /// WPA pairwise key handshake completed.
    Authenticated,
}

/// A discrete station transition extracted from raw log lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleEvent {
    pub kind: LifecycleKind,
    pub mac: MacAddress,
}
