//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use hotspotctl_core::CoreError;

/// Exit codes per error class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const VALIDATION: i32 = 3;
    pub const REJECTED: i32 = 4;
    pub const STATE: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to daemon at {url}")]
    #[diagnostic(
        code(hotspotctl::connection_failed),
        help(
            "Check that the hotspot daemon is running and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(hotspotctl::timeout),
        help("Increase --timeout or check the daemon host.")
    )]
    Timeout,

    // ── Local validation ─────────────────────────────────────────────
    #[error("Configuration is invalid:\n{problems}")]
    #[diagnostic(
        code(hotspotctl::invalid_config),
        help("Fix the listed fields and retry. Nothing was sent to the daemon.")
    )]
    InvalidConfig { problems: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(hotspotctl::usage))]
    Validation { field: String, reason: String },

    // ── Daemon outcomes ──────────────────────────────────────────────
    #[error("Daemon rejected the request: {message}{details}")]
    #[diagnostic(code(hotspotctl::rejected))]
    Rejected { message: String, details: String },

    #[error("Daemon error: {message}")]
    #[diagnostic(code(hotspotctl::daemon))]
    Daemon { message: String },

    // ── Session state ────────────────────────────────────────────────
    #[error("No active session")]
    #[diagnostic(
        code(hotspotctl::not_active),
        help("The daemon reports no running hotspot. Start one with: hotspotctl start")
    )]
    NotActive,

    #[error("A session is already active")]
    #[diagnostic(
        code(hotspotctl::already_active),
        help("Stop it first with: hotspotctl stop")
    )]
    AlreadyActive,

    // ── Local configuration ──────────────────────────────────────────
    #[error("Config error: {0}")]
    #[diagnostic(code(hotspotctl::config))]
    Config(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(hotspotctl::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::InvalidConfig { .. } => exit_code::VALIDATION,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::NotActive | Self::AlreadyActive => exit_code::STATE,
            Self::Daemon { .. } | Self::Config(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationFailed { errors } => Self::InvalidConfig {
                problems: errors
                    .iter()
                    .map(|e| format!("  - {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
            CoreError::Rejected { message, details } => Self::Rejected {
                message,
                details: if details.is_empty() {
                    String::new()
                } else {
                    format!(
                        "\n{}",
                        details
                            .iter()
                            .map(|d| format!("  - {d}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    )
                },
            },
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout => Self::Timeout,
            CoreError::Api { message } => Self::Daemon { message },
            CoreError::AlreadyActive => Self::AlreadyActive,
            CoreError::NotActive => Self::NotActive,
            CoreError::Internal(message) => Self::Daemon { message },
        }
    }
}
