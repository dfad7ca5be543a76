use thiserror::Error;

/// Top-level error type for the `hotspotctl-api` crate.
///
/// Covers every failure mode of a daemon round-trip: transport, HTTP
/// status, body decoding, and explicit `success:false` rejections.
/// `hotspotctl-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Daemon responses ────────────────────────────────────────────
    /// Non-success HTTP status from the daemon.
    #[error("Daemon returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The daemon reported `success: false` on a start/stop request.
    #[error("Rejected by daemon: {message}")]
    Rejected {
        message: String,
        /// Structured detail lines, surfaced verbatim. The daemon sends
        /// either a bare string or a list; both normalize to this.
        details: Vec<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying on the
    /// next polling cycle.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
