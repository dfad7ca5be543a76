// ── Log-event extraction ──
//
// Turns the daemon's raw hostapd log lines into typed station events.
// The daemon's log buffer overlaps between polling cycles, so a bounded
// ring of recently emitted (kind, mac) pairs suppresses re-announcements
// of the same transition.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use hotspotctl_api::LogEntry;

use crate::model::{LifecycleEvent, LifecycleKind, MacAddress};

/// How many emitted events back the extractor looks when suppressing
/// duplicates. Tunable; sized to comfortably cover one overlapping
/// log window.
pub const DEFAULT_DEDUP_WINDOW: usize = 5;

/// Six colon-separated hex octet pairs.
static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[0-9a-f]{2}(?::[0-9a-f]{2}){5}\b").expect("static MAC pattern")
});

fn classify(message: &str) -> Option<LifecycleKind> {
    if message.contains("AP-STA-CONNECTED") {
        Some(LifecycleKind::Connected)
    } else if message.contains("AP-STA-DISCONNECTED") {
        Some(LifecycleKind::Disconnected)
    } else if message.contains("pairwise key handshake completed") {
        Some(LifecycleKind::Authenticated)
    } else {
        None
    }
}

/// Stateful extractor; lives for the duration of one polling session so
/// the dedup ring spans cycle boundaries.
#[derive(Debug)]
pub struct LogEventExtractor {
    window: usize,
    recent: VecDeque<(LifecycleKind, MacAddress)>,
}

impl Default for LogEventExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_WINDOW)
    }
}

impl LogEventExtractor {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            recent: VecDeque::with_capacity(window),
        }
    }

    /// Extract station events from a batch of log lines, in input order.
    ///
    /// A line whose marker matches but carries no recognizable MAC
    /// yields no event. An event whose (kind, mac) already appears among
    /// the last `window` emitted entries is suppressed.
    pub fn extract(&mut self, logs: &[LogEntry]) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();

        for entry in logs {
            let Some(kind) = classify(&entry.message) else {
                continue;
            };
            let Some(found) = MAC_PATTERN.find(&entry.message) else {
                continue;
            };
            let mac = MacAddress::new(found.as_str());

            if self.recent.iter().any(|(k, m)| *k == kind && *m == mac) {
                continue;
            }
            if self.window > 0 {
                if self.recent.len() == self.window {
                    self.recent.pop_front();
                }
                self.recent.push_back((kind, mac.clone()));
            }
            events.push(LifecycleEvent { kind, mac });
        }

        events
    }
}
