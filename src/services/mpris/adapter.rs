use mpris_server::{
    LoopStatus, Metadata, PlaybackRate, PlaybackStatus, PlayerInterface, RootInterface, Time,
    TrackId, Volume,
    zbus::{self, fdo},
};
use tracing::debug;

use super::metadata::{metadata_for, playback_status_for};
use crate::services::radiotray::{ControlCommand, RadiotrayNgError, RadiotrayNgService};

/// URI schemes the player can open; forwarded to `play_url`.
const URI_SCHEMES: &[&str] = &["http", "https", "file"];

/// Stream MIME types Radiotray-NG's GStreamer backend handles.
const MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/aac",
    "audio/ogg",
    "application/ogg",
    "audio/flac",
    "audio/x-mpegurl",
    "audio/x-scpls",
];

/// MPRIS interface implementation for the wrapped player.
///
/// Every handler forwards to the Radiotray-NG control service; nothing is
/// cached here. Surfaces a radio player cannot provide (seeking, rate,
/// shuffle, looping) answer with fixed values and accept writes as no-ops.
pub struct RadiotrayNgPlayer {
    service: RadiotrayNgService,
}

impl RadiotrayNgPlayer {
    /// Create the MPRIS interface around a connected control service.
    pub fn new(service: RadiotrayNgService) -> Self {
        Self { service }
    }

    async fn dispatch(&self, command: ControlCommand) -> fdo::Result<()> {
        self.service.dispatch(command).await.map_err(to_fdo)
    }
}

fn to_fdo(err: RadiotrayNgError) -> fdo::Error {
    fdo::Error::Failed(err.to_string())
}

fn to_zbus(err: RadiotrayNgError) -> zbus::Error {
    zbus::Error::Failure(err.to_string())
}

impl RootInterface for RadiotrayNgPlayer {
    async fn raise(&self) -> fdo::Result<()> {
        Ok(())
    }

    async fn quit(&self) -> fdo::Result<()> {
        self.service.quit().await.map_err(to_fdo)
    }

    async fn can_quit(&self) -> fdo::Result<bool> {
        Ok(true)
    }

    async fn fullscreen(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn set_fullscreen(&self, _fullscreen: bool) -> zbus::Result<()> {
        Ok(())
    }

    async fn can_set_fullscreen(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn can_raise(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn has_track_list(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn identity(&self) -> fdo::Result<String> {
        Ok("Radiotray-NG".to_string())
    }

    async fn desktop_entry(&self) -> fdo::Result<String> {
        Ok("radiotray-ng".to_string())
    }

    async fn supported_uri_schemes(&self) -> fdo::Result<Vec<String>> {
        Ok(URI_SCHEMES.iter().map(ToString::to_string).collect())
    }

    async fn supported_mime_types(&self) -> fdo::Result<Vec<String>> {
        Ok(MIME_TYPES.iter().map(ToString::to_string).collect())
    }
}

impl PlayerInterface for RadiotrayNgPlayer {
    async fn next(&self) -> fdo::Result<()> {
        self.dispatch(ControlCommand::Next).await
    }

    async fn previous(&self) -> fdo::Result<()> {
        self.dispatch(ControlCommand::Previous).await
    }

    async fn pause(&self) -> fdo::Result<()> {
        self.dispatch(ControlCommand::Pause).await
    }

    async fn play_pause(&self) -> fdo::Result<()> {
        self.dispatch(ControlCommand::PlayPause).await
    }

    async fn stop(&self) -> fdo::Result<()> {
        self.dispatch(ControlCommand::Stop).await
    }

    async fn play(&self) -> fdo::Result<()> {
        self.dispatch(ControlCommand::Play).await
    }

    async fn seek(&self, _offset: Time) -> fdo::Result<()> {
        debug!("ignoring seek request, streams are not seekable");
        Ok(())
    }

    async fn set_position(&self, _track_id: TrackId, _position: Time) -> fdo::Result<()> {
        Ok(())
    }

    async fn open_uri(&self, uri: String) -> fdo::Result<()> {
        self.service.play_url(&uri).await.map_err(to_fdo)
    }

    async fn playback_status(&self) -> fdo::Result<PlaybackStatus> {
        let status = self.service.player_state().await.map_err(to_fdo)?;
        Ok(playback_status_for(status.state))
    }

    async fn loop_status(&self) -> fdo::Result<LoopStatus> {
        Ok(LoopStatus::None)
    }

    async fn set_loop_status(&self, _loop_status: LoopStatus) -> zbus::Result<()> {
        Ok(())
    }

    async fn rate(&self) -> fdo::Result<PlaybackRate> {
        Ok(1.0)
    }

    async fn set_rate(&self, _rate: PlaybackRate) -> zbus::Result<()> {
        Ok(())
    }

    async fn shuffle(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn set_shuffle(&self, _shuffle: bool) -> zbus::Result<()> {
        Ok(())
    }

    async fn metadata(&self) -> fdo::Result<Metadata> {
        let status = self.service.player_state().await.map_err(to_fdo)?;
        Ok(metadata_for(&status))
    }

    async fn volume(&self) -> fdo::Result<Volume> {
        let status = self.service.player_state().await.map_err(to_fdo)?;
        Ok(status.volume_fraction())
    }

    async fn set_volume(&self, volume: Volume) -> zbus::Result<()> {
        let percent = (volume.clamp(0.0, 1.0) * 100.0).round() as u8;
        self.service
            .set_volume_percent(percent)
            .await
            .map_err(to_zbus)
    }

    async fn position(&self) -> fdo::Result<Time> {
        Ok(Time::from_micros(0))
    }

    async fn minimum_rate(&self) -> fdo::Result<PlaybackRate> {
        Ok(1.0)
    }

    async fn maximum_rate(&self) -> fdo::Result<PlaybackRate> {
        Ok(1.0)
    }

    async fn can_go_next(&self) -> fdo::Result<bool> {
        Ok(true)
    }

    async fn can_go_previous(&self) -> fdo::Result<bool> {
        Ok(true)
    }

    async fn can_play(&self) -> fdo::Result<bool> {
        Ok(true)
    }

    async fn can_pause(&self) -> fdo::Result<bool> {
        Ok(true)
    }

    async fn can_seek(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn can_control(&self) -> fdo::Result<bool> {
        Ok(true)
    }
}
