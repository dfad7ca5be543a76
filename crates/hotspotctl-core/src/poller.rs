// ── Status poller ──
//
// The recurring reconciliation cycle against the daemon. Strictly
// sequential: the fetch runs inside the tick arm and the interval uses
// Delay semantics, so a slow response pushes the next cycle out instead
// of letting ticks race ahead of it. Cancellation only prevents the
// next fetch; an in-flight one completes and its result is discarded.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use hotspotctl_api::{DaemonClient, InterfaceCounters};

use crate::events::{DEFAULT_DEDUP_WINDOW, LogEventExtractor};
use crate::model::{LifecycleEvent, Station, StatusSnapshot};
use crate::rates::{RateTracker, TrafficRates};
use crate::session::{SessionEvent, SessionState};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Tunables for the polling loop. The observed deployments disagree on
/// both knobs, so neither is hard-coded.
#[derive(Debug, Clone)]
pub struct PollerSettings {
    pub poll_interval: Duration,
    pub dedup_window: usize,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            dedup_window: DEFAULT_DEDUP_WINDOW,
        }
    }
}

/// The merged per-cycle view published for presentation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusView {
    pub uptime_secs: u64,
    pub station_count: usize,
    pub stations: Vec<Station>,
    pub rates: TrafficRates,
    pub wifi_totals: InterfaceCounters,
    pub internet_totals: InterfaceCounters,
}

impl StatusView {
    /// Cumulative traffic across both interfaces and directions.
    pub fn total_bytes(&self) -> u64 {
        self.wifi_totals.tx_bytes
            + self.wifi_totals.rx_bytes
            + self.internet_totals.tx_bytes
            + self.internet_totals.rx_bytes
    }
}

/// Per-cycle merge state: the log extractor's dedup ring and the rate
/// baseline. Owned by the polling task and dropped with it, so no
/// sample survives into a later session.
#[derive(Debug)]
pub struct Reconciler {
    extractor: LogEventExtractor,
    rates: RateTracker,
}

impl Reconciler {
    pub fn new(settings: &PollerSettings) -> Self {
        Self {
            extractor: LogEventExtractor::new(settings.dedup_window),
            rates: RateTracker::new(settings.poll_interval),
        }
    }

    /// Merge one snapshot into a presentation view plus the station
    /// events it revealed.
    pub fn apply(&mut self, snapshot: &StatusSnapshot) -> (StatusView, Vec<LifecycleEvent>) {
        let events = self.extractor.extract(&snapshot.logs);
        let rates = self.rates.update(snapshot.wifi, snapshot.internet);

        let view = StatusView {
            uptime_secs: snapshot.uptime_secs,
            station_count: snapshot.stations.len(),
            stations: snapshot.stations.clone(),
            rates,
            wifi_totals: snapshot.wifi,
            internet_totals: snapshot.internet,
        };

        (view, events)
    }
}

/// Run reconciliation cycles until cancelled or the session dies.
pub(crate) async fn poll_loop(
    client: DaemonClient,
    settings: PollerSettings,
    state: watch::Sender<SessionState>,
    status: watch::Sender<Option<StatusView>>,
    events: broadcast::Sender<SessionEvent>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(settings.poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut reconciler = Reconciler::new(&settings);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                match client.status().await {
                    Ok(resp) => {
                        if cancel.is_cancelled() {
                            // Cancelled mid-flight; discard the result.
                            break;
                        }
                        let snapshot = StatusSnapshot::from(resp);
                        if !snapshot.is_running {
                            if *state.borrow() == SessionState::Active {
                                warn!("hotspot terminated unexpectedly");
                                let _ = events.send(SessionEvent::UnexpectedTermination);
                                let _ = state.send(SessionState::Inactive);
                                let _ = status.send(None);
                            }
                            break;
                        }
                        let (view, lifecycle) = reconciler.apply(&snapshot);
                        for event in lifecycle {
                            let _ = events.send(SessionEvent::Lifecycle(event));
                        }
                        debug!(
                            stations = view.station_count,
                            uptime = view.uptime_secs,
                            "reconciliation cycle complete"
                        );
                        let _ = status.send(Some(view));
                    }
                    Err(e) => {
                        // Transient failure degrades one cycle; the next
                        // tick retries.
                        warn!(error = %e, "status poll failed");
                        let _ = events.send(SessionEvent::PollDegraded {
                            message: e.to_string(),
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspotctl_api::LogEntry;

    fn snapshot(uptime: u64, wifi: (u64, u64), logs: Vec<LogEntry>) -> StatusSnapshot {
        StatusSnapshot {
            is_running: true,
            uptime_secs: uptime,
            config: None,
            stations: Vec::new(),
            logs,
            wifi: InterfaceCounters {
                tx_bytes: wifi.0,
                rx_bytes: wifi.1,
            },
            internet: InterfaceCounters::default(),
        }
    }

    #[test]
    fn reconciler_threads_rates_across_cycles() {
        let settings = PollerSettings::default();
        let mut reconciler = Reconciler::new(&settings);

        let (view, _) = reconciler.apply(&snapshot(2, (1_000, 0), Vec::new()));
        assert_eq!(view.rates, TrafficRates::default());
        assert_eq!(view.wifi_totals.tx_bytes, 1_000);

        let (view, _) = reconciler.apply(&snapshot(4, (5_000, 0), Vec::new()));
        assert_eq!(view.rates.wifi_tx, 2_000.0);
        assert_eq!(view.total_bytes(), 5_000);
    }

    #[test]
    fn reconciler_suppresses_overlapping_log_events() {
        let settings = PollerSettings::default();
        let mut reconciler = Reconciler::new(&settings);
        let line = LogEntry {
            message: "wlan0: AP-STA-CONNECTED aa:bb:cc:dd:ee:ff".to_owned(),
        };

        let (_, events) = reconciler.apply(&snapshot(2, (0, 0), vec![line.clone()]));
        assert_eq!(events.len(), 1);

        let (_, events) = reconciler.apply(&snapshot(4, (0, 0), vec![line]));
        assert!(events.is_empty());
    }
}
