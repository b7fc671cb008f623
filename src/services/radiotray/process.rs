use std::process::ExitStatus;

use tokio::process::{Child, Command};
use tracing::info;

use super::RadiotrayNgError;

/// Name of the player binary, resolved through `PATH`.
const RADIOTRAY_NG_BIN: &str = "radiotray-ng";

/// Handle to the launched Radiotray-NG process.
///
/// The process is not killed when the handle drops; shutdown goes through
/// the player's own `quit` method so it can release its resources cleanly.
pub struct PlayerProcess {
    child: Child,
}

impl PlayerProcess {
    /// Launch `radiotray-ng`, optionally telling it to start playback
    /// immediately.
    ///
    /// # Errors
    /// Returns [`RadiotrayNgError::Launch`] if the binary cannot be spawned,
    /// typically because it is not installed.
    pub fn spawn(play: bool) -> Result<Self, RadiotrayNgError> {
        let mut command = Command::new(RADIOTRAY_NG_BIN);
        if play {
            command.arg("--play");
        }

        let child = command.spawn().map_err(|source| RadiotrayNgError::Launch {
            binary: RADIOTRAY_NG_BIN.to_string(),
            source,
        })?;
        info!(pid = child.id(), "launched {RADIOTRAY_NG_BIN}");

        Ok(Self { child })
    }

    /// Wait for the process to exit. Cancel safe.
    ///
    /// # Errors
    /// Returns the underlying I/O error if waiting on the child fails.
    pub async fn wait(&mut self) -> std::io::Result<ExitStatus> {
        self.child.wait().await
    }

    /// Kill the process outright. Used only when startup fails after the
    /// process was already spawned.
    pub async fn kill(&mut self) {
        let _ = self.child.kill().await;
    }
}
