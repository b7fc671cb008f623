use thiserror::Error;

/// Errors raised by the Radiotray-NG side of the bridge
#[derive(Error, Debug)]
pub enum RadiotrayNgError {
    /// The player binary could not be spawned
    #[error("failed to launch '{binary}': {source}")]
    Launch {
        /// Name of the binary that failed to launch
        binary: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[from] zbus::Error),

    /// The control service never appeared on the session bus
    #[error("the Radiotray-NG D-Bus service did not appear after {attempts} attempts")]
    ServiceUnavailable {
        /// Number of connection attempts made
        attempts: u32,
    },

    /// The player state document could not be parsed
    #[error("malformed player state document: {0}")]
    MalformedState(#[from] serde_json::Error),
}
