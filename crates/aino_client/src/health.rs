//! Connectivity status derived from the health probe.

/// Result of the startup health probe.
///
/// `Disconnected` disables submission but leaves the form interactive;
/// the user can keep editing and submit once the backend comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum ConnectionStatus {
    /// Probe not finished yet
    #[default]
    #[display("checking")]
    Checking,
    /// Backend answered the probe
    #[display("connected")]
    Connected,
    /// Backend unreachable or unhealthy
    #[display("disconnected")]
    Disconnected,
}

impl ConnectionStatus {
    /// Collapse a probe result into a status.
    pub fn from_probe<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ConnectionStatus::Connected,
            Err(_) => ConnectionStatus::Disconnected,
        }
    }

    /// Whether submission is allowed under this status.
    pub fn allows_submission(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}
