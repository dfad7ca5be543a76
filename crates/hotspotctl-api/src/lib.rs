// hotspotctl-api: Raw HTTP client for the hotspot control daemon.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::DaemonClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{
    FreqBand, HotspotConfig, InterfaceCounters, InterfaceEntry, LogEntry, StartReceipt,
    StatusBody, StatusResponse, WireStation, WpaVersion,
};
