// ── Traffic rate tracking ──

use std::time::Duration;

use serde::Serialize;

use hotspotctl_api::InterfaceCounters;

/// Instantaneous throughput in bytes per second, derived from two
/// successive cumulative counter samples.
///
/// A counter reset (interface restart) shows up as one negative
/// transient; it is reported as-is rather than masked by a clamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrafficRates {
    pub wifi_tx: f64,
    pub wifi_rx: f64,
    pub internet_tx: f64,
    pub internet_rx: f64,
}

/// Owns the previous counter samples for both interfaces. One tracker
/// per polling session; dropping it discards the baseline so the next
/// session never computes rates against stale counters.
#[derive(Debug)]
pub struct RateTracker {
    interval_secs: f64,
    prev: Option<(InterfaceCounters, InterfaceCounters)>,
}

impl RateTracker {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            interval_secs: poll_interval.as_secs_f64(),
            prev: None,
        }
    }

    /// Fold in this cycle's counters and derive rates against the
    /// previous cycle's. The first cycle has no baseline and reports
    /// zero rather than "unknown".
    pub fn update(
        &mut self,
        wifi: InterfaceCounters,
        internet: InterfaceCounters,
    ) -> TrafficRates {
        let rates = match self.prev {
            None => TrafficRates::default(),
            Some((prev_wifi, prev_internet)) => TrafficRates {
                wifi_tx: self.rate(prev_wifi.tx_bytes, wifi.tx_bytes),
                wifi_rx: self.rate(prev_wifi.rx_bytes, wifi.rx_bytes),
                internet_tx: self.rate(prev_internet.tx_bytes, internet.tx_bytes),
                internet_rx: self.rate(prev_internet.rx_bytes, internet.rx_bytes),
            },
        };
        self.prev = Some((wifi, internet));
        rates
    }

    /// Forget the baseline; the next update reports zero rates.
    pub fn reset(&mut self) {
        self.prev = None;
    }

    #[allow(clippy::cast_precision_loss)]
    fn rate(&self, previous: u64, current: u64) -> f64 {
        (current as f64 - previous as f64) / self.interval_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(tx: u64, rx: u64) -> InterfaceCounters {
        InterfaceCounters {
            tx_bytes: tx,
            rx_bytes: rx,
        }
    }

    #[test]
    fn first_sample_reports_zero() {
        let mut tracker = RateTracker::new(Duration::from_secs(2));
        let rates = tracker.update(counters(10_000, 20_000), counters(1, 2));
        assert_eq!(rates, TrafficRates::default());
    }

    #[test]
    fn second_sample_is_exact_delta_over_interval() {
        let mut tracker = RateTracker::new(Duration::from_secs(2));
        tracker.update(counters(1_000, 2_000), counters(100, 200));
        let rates = tracker.update(counters(3_000, 2_500), counters(100, 1_200));

        assert_eq!(rates.wifi_tx, 1_000.0);
        assert_eq!(rates.wifi_rx, 250.0);
        assert_eq!(rates.internet_tx, 0.0);
        assert_eq!(rates.internet_rx, 500.0);
    }

    #[test]
    fn counter_reset_yields_negative_transient() {
        let mut tracker = RateTracker::new(Duration::from_secs(2));
        tracker.update(counters(10_000, 0), counters(0, 0));
        let rates = tracker.update(counters(400, 0), counters(0, 0));
        assert_eq!(rates.wifi_tx, -4_800.0);

        // The new (post-reset) counters become the baseline.
        let rates = tracker.update(counters(600, 0), counters(0, 0));
        assert_eq!(rates.wifi_tx, 100.0);
    }

    #[test]
    fn reset_discards_the_baseline() {
        let mut tracker = RateTracker::new(Duration::from_secs(2));
        tracker.update(counters(1_000, 1_000), counters(0, 0));
        tracker.reset();
        let rates = tracker.update(counters(9_000, 9_000), counters(0, 0));
        assert_eq!(rates, TrafficRates::default());
    }
}
