// Transport configuration for building the daemon HTTP client.
//
// The daemon is plain HTTP on the local network, so the only tunables
// are the request timeout and the user agent.

use std::time::Duration;

/// Transport settings for building a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("hotspotctl/0.1.0")
            .build()?)
    }
}
