use std::time::Duration;

use tracing::debug;
use zbus::Connection;

use super::{ControlCommand, PlayerCommand, PlayerStatus, RadiotrayNgError, RadiotrayNgProxy};

/// How often to retry while waiting for the control service to appear.
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// How many times to retry before giving up on the control service.
const MAX_CONNECT_ATTEMPTS: u32 = 30;

/// Typed client for the Radiotray-NG control interface.
///
/// Cheap to clone; every clone talks over the same bus connection. All
/// state lives in the player process, so the client itself is stateless.
#[derive(Clone)]
pub struct RadiotrayNgService {
    proxy: RadiotrayNgProxy<'static>,
}

impl RadiotrayNgService {
    /// Connect to the player's control service on the session bus.
    ///
    /// The player registers its bus name only once its startup is complete,
    /// so this polls until the name resolves, for up to
    /// [`MAX_CONNECT_ATTEMPTS`] attempts spaced [`CONNECT_RETRY_DELAY`] apart.
    ///
    /// # Errors
    /// Returns [`RadiotrayNgError::ServiceUnavailable`] when the retry
    /// window is exhausted, or the underlying D-Bus error for anything other
    /// than an unknown service name.
    pub async fn connect(connection: &Connection) -> Result<Self, RadiotrayNgError> {
        let proxy = RadiotrayNgProxy::new(connection).await?;
        let service = Self { proxy };

        for attempt in 1..=MAX_CONNECT_ATTEMPTS {
            match service.proxy.get_player_state().await {
                Ok(_) => {
                    debug!(attempt, "connected to the Radiotray-NG control service");
                    return Ok(service);
                }
                Err(err) if is_service_unknown(&err) => {
                    debug!(attempt, "Radiotray-NG service not yet on the bus");
                    tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(RadiotrayNgError::ServiceUnavailable {
            attempts: MAX_CONNECT_ATTEMPTS,
        })
    }

    /// Fetch and parse the current player state.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails or
    /// [`RadiotrayNgError::MalformedState`] if the answer is not valid JSON.
    pub async fn player_state(&self) -> Result<PlayerStatus, RadiotrayNgError> {
        debug!("querying player state");
        let document = self.proxy.get_player_state().await?;
        Ok(serde_json::from_str(&document)?)
    }

    /// Resolve a control request against the current playback state and
    /// send the resulting instruction.
    ///
    /// # Errors
    /// Returns a D-Bus error if the state query or the instruction fails.
    pub async fn dispatch(&self, command: ControlCommand) -> Result<(), RadiotrayNgError> {
        let state = self.player_state().await?.state;
        self.send(command.resolve(state)).await
    }

    /// Send a single instruction to the player.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails.
    pub async fn send(&self, command: PlayerCommand) -> Result<(), RadiotrayNgError> {
        debug!(?command, "sending player command");
        match command {
            PlayerCommand::Play => self.proxy.play().await?,
            PlayerCommand::Stop => self.proxy.stop().await?,
            PlayerCommand::NextStation => self.proxy.next_station().await?,
            PlayerCommand::PreviousStation => self.proxy.previous_station().await?,
        }
        Ok(())
    }

    /// Play a stream URL directly.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails.
    pub async fn play_url(&self, url: &str) -> Result<(), RadiotrayNgError> {
        debug!(url, "requesting stream URL");
        Ok(self.proxy.play_url(url).await?)
    }

    /// Play a specific station from a bookmark group.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails.
    pub async fn play_station(&self, group: &str, station: &str) -> Result<(), RadiotrayNgError> {
        debug!(group, station, "requesting station");
        Ok(self.proxy.play_station(group, station).await?)
    }

    /// Set the volume to a percent level.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails.
    pub async fn set_volume_percent(&self, level: u8) -> Result<(), RadiotrayNgError> {
        debug!(level, "setting volume");
        Ok(self.proxy.set_volume(&level.to_string()).await?)
    }

    /// Toggle mute.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails.
    pub async fn toggle_mute(&self) -> Result<(), RadiotrayNgError> {
        debug!("toggling mute");
        Ok(self.proxy.mute().await?)
    }

    /// Fetch the player's bookmarks as a JSON value.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails or
    /// [`RadiotrayNgError::MalformedState`] if the answer is not valid JSON.
    pub async fn bookmarks(&self) -> Result<serde_json::Value, RadiotrayNgError> {
        debug!("querying bookmarks");
        let document = self.proxy.get_bookmarks().await?;
        Ok(serde_json::from_str(&document)?)
    }

    /// Fetch the player's configuration as a JSON value.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails or
    /// [`RadiotrayNgError::MalformedState`] if the answer is not valid JSON.
    pub async fn config(&self) -> Result<serde_json::Value, RadiotrayNgError> {
        debug!("querying configuration");
        let document = self.proxy.get_config().await?;
        Ok(serde_json::from_str(&document)?)
    }

    /// Ask the player to reload its bookmarks file.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails.
    pub async fn reload_bookmarks(&self) -> Result<(), RadiotrayNgError> {
        debug!("reloading bookmarks");
        Ok(self.proxy.reload_bookmarks().await?)
    }

    /// Ask the player to quit.
    ///
    /// # Errors
    /// Returns a D-Bus error if the call fails. The player tends to drop
    /// off the bus without answering this call, so callers treat failures
    /// as expected during shutdown.
    pub async fn quit(&self) -> Result<(), RadiotrayNgError> {
        debug!("sending quit request");
        Ok(self.proxy.quit().await?)
    }
}

/// Whether a D-Bus error means the service name has no owner yet.
fn is_service_unknown(err: &zbus::Error) -> bool {
    match err {
        zbus::Error::MethodError(name, _, _) => {
            name.as_str() == "org.freedesktop.DBus.Error.ServiceUnknown"
        }
        zbus::Error::FDO(fdo_err) => {
            matches!(**fdo_err, zbus::fdo::Error::ServiceUnknown(_))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_unknown_detection() {
        let err = zbus::Error::FDO(Box::new(zbus::fdo::Error::ServiceUnknown(
            "com.github.radiotray_ng".to_string(),
        )));
        assert!(is_service_unknown(&err));

        let err = zbus::Error::FDO(Box::new(zbus::fdo::Error::Failed("nope".to_string())));
        assert!(!is_service_unknown(&err));

        assert!(!is_service_unknown(&zbus::Error::InvalidReply));
    }
}
