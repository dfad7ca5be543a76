// ── Core error types ──
//
// User-facing errors from hotspotctl-core. Consumers never see HTTP
// details directly; the `From<hotspotctl_api::Error>` impl translates
// transport-layer failures into domain-appropriate variants.

use thiserror::Error;

use crate::form::ValidationError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Pre-flight configuration failure. The start request never
    /// reached the wire.
    #[error("invalid configuration")]
    ValidationFailed { errors: Vec<ValidationError> },

    /// The daemon refused the operation (`success:false`).
    #[error("rejected by daemon: {message}")]
    Rejected {
        message: String,
        details: Vec<String>,
    },

    #[error("cannot connect to daemon at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("request timed out")]
    Timeout,

    #[error("daemon API error: {message}")]
    Api { message: String },

    /// A start was requested while a session is already live locally.
    #[error("a session is already active")]
    AlreadyActive,

    /// A stop was requested with no live session.
    #[error("no active session")]
    NotActive,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<hotspotctl_api::Error> for CoreError {
    fn from(err: hotspotctl_api::Error) -> Self {
        match err {
            hotspotctl_api::Error::Rejected { message, details } => {
                Self::Rejected { message, details }
            }
            hotspotctl_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    Self::Timeout
                } else if e.is_connect() {
                    Self::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    Self::Api {
                        message: e.to_string(),
                    }
                }
            }
            hotspotctl_api::Error::Status { status, message } => Self::Api {
                message: format!("HTTP {status}: {message}"),
            },
            hotspotctl_api::Error::Deserialization { message, .. } => {
                Self::Internal(format!("malformed daemon response: {message}"))
            }
            hotspotctl_api::Error::InvalidUrl(e) => Self::Internal(format!("invalid URL: {e}")),
        }
    }
}
