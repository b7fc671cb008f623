use thiserror::Error;

use crate::services::radiotray::RadiotrayNgError;

/// Error types for the bridge application.
///
/// Everything that can abort the bridge ends up here: failures around the
/// wrapped player process, the session bus, and the MPRIS service
/// registration. Transient polling failures are logged where they occur and
/// never surface as a `BridgeError`.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The wrapped Radiotray-NG process or its control service failed
    #[error(transparent)]
    Player(#[from] RadiotrayNgError),

    /// The session bus connection could not be established
    #[error("failed to connect to the session bus: {0}")]
    SessionBus(#[source] zbus::Error),

    /// The MPRIS service could not be registered on the bus
    #[error("failed to register the MPRIS service: {0}")]
    MprisRegistration(String),

    /// POSIX signal handlers could not be installed
    #[error("failed to install signal handlers: {0}")]
    SignalHandler(#[from] std::io::Error),
}

/// A specialized `Result` type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
