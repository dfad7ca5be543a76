// Daemon API HTTP client
//
// Wraps `reqwest::Client` with daemon URL construction and body-aware
// response parsing. Responses are decoded from text so a decode failure
// keeps the raw body for debugging. Start/stop envelopes are unwrapped
// here -- callers never see the `success` flag.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    Details, HostapdConfigResponse, HotspotConfig, InterfaceEntry, InterfacesResponse,
    LastConfigResponse, StartReceipt, StartResponse, StatusResponse, StopResponse,
};

/// HTTP client for one hotspot control daemon.
///
/// Cheaply cloneable; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct DaemonClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DaemonClient {
    /// Create a new client from a daemon root URL (e.g. `http://pi:5000`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, mut base_url: Url) -> Self {
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { http, base_url }
    }

    /// The daemon root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ───────────────────────────────────────────────────

    /// List the daemon host's network interfaces.
    ///
    /// `GET /api/interfaces`
    pub async fn interfaces(&self) -> Result<Vec<InterfaceEntry>, Error> {
        debug!("listing interfaces");
        let resp: InterfacesResponse = self.get_json("interfaces").await?;
        Ok(resp.interfaces)
    }

    /// Fetch the current status snapshot.
    ///
    /// `GET /api/status`
    pub async fn status(&self) -> Result<StatusResponse, Error> {
        self.get_json("status").await
    }

    /// Fetch the last configuration the daemon persisted, if any.
    ///
    /// `GET /api/last-config`
    pub async fn last_config(&self) -> Result<Option<HotspotConfig>, Error> {
        debug!("fetching last config");
        let resp: LastConfigResponse = self.get_json("last-config").await?;
        Ok(resp.config)
    }

    /// Fetch the raw applied hostapd configuration text, if a session
    /// has written one.
    ///
    /// `GET /api/hostapd-config`
    pub async fn hostapd_config(&self) -> Result<Option<String>, Error> {
        debug!("fetching applied hostapd config");
        let resp: HostapdConfigResponse = self.get_json("hostapd-config").await?;
        Ok(resp.config)
    }

    /// Submit a configuration and start the hotspot.
    ///
    /// `POST /api/start`. A `success:false` envelope becomes
    /// [`Error::Rejected`] with its detail lines intact.
    pub async fn start(&self, config: &HotspotConfig) -> Result<StartReceipt, Error> {
        debug!(ssid = %config.ssid, "requesting hotspot start");
        let resp: StartResponse = self.post_json("start", config).await?;

        if resp.success {
            Ok(StartReceipt {
                hostapd_pid: resp.hostapd_pid,
                dnsmasq_pid: resp.dnsmasq_pid,
                config_file: resp.config_file,
            })
        } else {
            Err(Error::Rejected {
                message: resp
                    .error
                    .unwrap_or_else(|| "start request failed".to_owned()),
                details: resp.details.map(Details::into_vec).unwrap_or_default(),
            })
        }
    }

    /// Stop the running hotspot.
    ///
    /// `POST /api/stop` (no body).
    pub async fn stop(&self) -> Result<(), Error> {
        debug!("requesting hotspot stop");
        let url = self.api_url("stop")?;
        let resp = self.http.post(url).send().await?;
        let ack: StopResponse = Self::parse_body(resp).await?;

        if ack.success {
            Ok(())
        } else {
            Err(Error::Rejected {
                message: ack
                    .error
                    .unwrap_or_else(|| "stop request failed".to_owned()),
                details: Vec::new(),
            })
        }
    }

    // ── Request plumbing ────────────────────────────────────────────

    fn api_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("api/{path}"))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("GET {url}");
        let resp = self.http.get(url).send().await?;
        Self::parse_body(resp).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("POST {url}");
        let resp = self.http.post(url).json(body).send().await?;
        Self::parse_body(resp).await
    }

    /// Decode a response body, mapping non-success statuses to
    /// [`Error::Status`] with the daemon's `error` field when present.
    async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error")?.as_str().map(str::to_owned))
                .unwrap_or(body);
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
