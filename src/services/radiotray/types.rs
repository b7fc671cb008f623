use serde::Deserialize;

/// Current playback state of the wrapped player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PlaybackState {
    /// Player is currently playing a stream
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    #[default]
    Stopped,
}

impl From<&str> for PlaybackState {
    fn from(state: &str) -> Self {
        match state {
            "playing" => Self::Playing,
            "paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

impl From<String> for PlaybackState {
    fn from(state: String) -> Self {
        Self::from(state.as_str())
    }
}

/// Player state document returned by `get_player_state`.
///
/// All fields are optional in the wire document and default to empty
/// values, so a partial answer from the player never fails to parse.
/// `volume` stays a string because that is how the player reports it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerStatus {
    /// Artist of the current track, as reported by the stream
    #[serde(default)]
    pub artist: String,

    /// Stream bitrate
    #[serde(default)]
    pub bitrate: String,

    /// Stream codec
    #[serde(default)]
    pub codec: String,

    /// Bookmark group of the current station
    #[serde(default)]
    pub group: String,

    /// Station artwork URL
    #[serde(default)]
    pub image: String,

    /// Whether the player is muted
    #[serde(default)]
    pub mute: bool,

    /// Playback state
    #[serde(default)]
    pub state: PlaybackState,

    /// Name of the current station
    #[serde(default)]
    pub station: String,

    /// Title of the current track
    #[serde(default)]
    pub title: String,

    /// Stream URL
    #[serde(default)]
    pub url: String,

    /// Volume as a percent value
    #[serde(default)]
    pub volume: String,
}

impl PlayerStatus {
    /// Volume as a fraction in `0.0..=1.0`, the scale MPRIS uses.
    ///
    /// An unparsable volume reads as 0.0.
    pub fn volume_fraction(&self) -> f64 {
        self.volume
            .trim()
            .parse::<f64>()
            .map(|percent| (percent / 100.0).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}

/// Playback control request arriving over MPRIS.
///
/// Created per inbound method call and resolved into exactly one
/// [`PlayerCommand`]; never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Start playback
    Play,

    /// Pause playback
    Pause,

    /// Toggle between playing and stopped
    PlayPause,

    /// Stop playback
    Stop,

    /// Next station
    Next,

    /// Previous station
    Previous,
}

impl ControlCommand {
    /// Resolve this request into the single instruction sent to the player.
    ///
    /// Radio streams cannot pause, so `Pause` resolves to [`PlayerCommand::Stop`].
    /// Only `PlayPause` consults the current playback state.
    pub fn resolve(self, state: PlaybackState) -> PlayerCommand {
        match self {
            Self::Play => PlayerCommand::Play,
            Self::Pause | Self::Stop => PlayerCommand::Stop,
            Self::PlayPause => match state {
                PlaybackState::Playing => PlayerCommand::Stop,
                PlaybackState::Paused | PlaybackState::Stopped => PlayerCommand::Play,
            },
            Self::Next => PlayerCommand::NextStation,
            Self::Previous => PlayerCommand::PreviousStation,
        }
    }
}

/// Instruction issued to the player process, mapping 1:1 onto a method of
/// its control interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// `play`
    Play,

    /// `stop`
    Stop,

    /// `next_station`
    NextStation,

    /// `previous_station`
    PreviousStation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_state_from_wire_strings() {
        assert_eq!(PlaybackState::from("playing"), PlaybackState::Playing);
        assert_eq!(PlaybackState::from("paused"), PlaybackState::Paused);
        assert_eq!(PlaybackState::from("stopped"), PlaybackState::Stopped);
        // Anything the player reports beyond the known states degrades to
        // stopped, "buffering" included.
        assert_eq!(PlaybackState::from("buffering"), PlaybackState::Stopped);
        assert_eq!(PlaybackState::from(""), PlaybackState::Stopped);
    }

    #[test]
    fn full_state_document_parses() {
        let document = r#"{
            "artist": "Some Artist",
            "bitrate": "128 kb/s",
            "codec": "MPEG 1 Audio, Layer 3 (MP3)",
            "group": "Jazz",
            "image": "https://example.org/station.png",
            "mute": false,
            "state": "playing",
            "station": "Example FM",
            "title": "Some Song",
            "url": "https://example.org/stream",
            "volume": "100"
        }"#;

        let status: PlayerStatus = serde_json::from_str(document).unwrap();
        assert_eq!(status.state, PlaybackState::Playing);
        assert_eq!(status.station, "Example FM");
        assert_eq!(status.artist, "Some Artist");
        assert_eq!(status.title, "Some Song");
        assert!(!status.mute);
        assert_eq!(status.volume, "100");
    }

    #[test]
    fn missing_fields_default() {
        let status: PlayerStatus = serde_json::from_str(r#"{"state": "stopped"}"#).unwrap();
        assert_eq!(status.state, PlaybackState::Stopped);
        assert!(status.station.is_empty());
        assert!(status.volume.is_empty());
        assert!(!status.mute);
    }

    #[test]
    fn volume_fraction_scales_and_clamps() {
        let mut status = PlayerStatus {
            volume: "100".to_string(),
            ..Default::default()
        };
        assert_eq!(status.volume_fraction(), 1.0);

        status.volume = "50".to_string();
        assert_eq!(status.volume_fraction(), 0.5);

        status.volume = "0".to_string();
        assert_eq!(status.volume_fraction(), 0.0);

        status.volume = "150".to_string();
        assert_eq!(status.volume_fraction(), 1.0);

        status.volume = "not a number".to_string();
        assert_eq!(status.volume_fraction(), 0.0);

        status.volume = String::new();
        assert_eq!(status.volume_fraction(), 0.0);
    }

    #[test]
    fn control_commands_resolve_to_exactly_one_instruction() {
        use ControlCommand::*;
        use PlaybackState::*;

        for state in [Playing, Paused, Stopped] {
            assert_eq!(Play.resolve(state), PlayerCommand::Play);
            assert_eq!(Pause.resolve(state), PlayerCommand::Stop);
            assert_eq!(Stop.resolve(state), PlayerCommand::Stop);
            assert_eq!(Next.resolve(state), PlayerCommand::NextStation);
            assert_eq!(Previous.resolve(state), PlayerCommand::PreviousStation);
        }

        assert_eq!(PlayPause.resolve(Playing), PlayerCommand::Stop);
        assert_eq!(PlayPause.resolve(Paused), PlayerCommand::Play);
        assert_eq!(PlayPause.resolve(Stopped), PlayerCommand::Play);
    }
}
