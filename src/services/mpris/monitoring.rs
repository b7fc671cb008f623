use std::time::Duration;

use mpris_server::{Property, Server};
use tracing::{info, warn};

use super::{
    adapter::RadiotrayNgPlayer,
    metadata::{metadata_for, playback_status_for},
};
use crate::services::radiotray::{PlayerStatus, RadiotrayNgService};

/// How often the player state is polled. Bounds the staleness of every
/// published MPRIS property.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll-based observer that republishes player state as MPRIS properties.
///
/// Radiotray-NG emits no change signals over its control interface, so the
/// monitor polls, diffs against the previous state document and publishes
/// only what actually changed. The first poll seeds the baseline without
/// publishing anything.
pub struct StateMonitor {
    service: RadiotrayNgService,
    previous: Option<PlayerStatus>,
}

impl StateMonitor {
    /// Create a monitor over a connected control service.
    pub fn new(service: RadiotrayNgService) -> Self {
        Self {
            service,
            previous: None,
        }
    }

    /// Poll once and publish any resulting property changes.
    ///
    /// Query failures are transient by design: they are logged and the
    /// next tick tries again.
    pub async fn tick(&mut self, server: &Server<RadiotrayNgPlayer>) {
        let status = match self.service.player_state().await {
            Ok(status) => status,
            Err(err) => {
                warn!("player state query failed: {err}");
                return;
            }
        };

        let Some(previous) = self.previous.replace(status.clone()) else {
            return;
        };

        let properties = changed_properties(&previous, &status);
        if properties.is_empty() {
            return;
        }

        info!(
            station = %status.station,
            title = %status.title,
            state = ?status.state,
            "player state changed"
        );
        if let Err(err) = server.properties_changed(properties).await {
            warn!("failed to publish MPRIS property changes: {err}");
        }
    }
}

/// Translate a state-document diff into the MPRIS properties to republish.
fn changed_properties(previous: &PlayerStatus, current: &PlayerStatus) -> Vec<Property> {
    let mut properties = Vec::new();

    if current.state != previous.state {
        properties.push(Property::PlaybackStatus(playback_status_for(current.state)));
    }

    if current.title != previous.title
        || current.artist != previous.artist
        || current.station != previous.station
        || current.image != previous.image
        || current.url != previous.url
    {
        properties.push(Property::Metadata(metadata_for(current)));
    }

    if current.volume != previous.volume || current.mute != previous.mute {
        properties.push(Property::Volume(current.volume_fraction()));
    }

    properties
}

#[cfg(test)]
mod tests {
    use mpris_server::PlaybackStatus;

    use super::*;
    use crate::services::radiotray::PlaybackState;

    fn status(state: PlaybackState, title: &str, volume: &str) -> PlayerStatus {
        PlayerStatus {
            artist: "Some Artist".to_string(),
            state,
            station: "Example FM".to_string(),
            title: title.to_string(),
            url: "https://example.org/stream".to_string(),
            volume: volume.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn identical_states_publish_nothing() {
        let current = status(PlaybackState::Playing, "Some Song", "100");
        assert!(changed_properties(&current.clone(), &current).is_empty());
    }

    #[test]
    fn state_change_publishes_playback_status() {
        let previous = status(PlaybackState::Stopped, "Some Song", "100");
        let current = status(PlaybackState::Playing, "Some Song", "100");

        let properties = changed_properties(&previous, &current);
        assert_eq!(properties.len(), 1);
        assert!(matches!(
            properties[0],
            Property::PlaybackStatus(PlaybackStatus::Playing)
        ));
    }

    #[test]
    fn title_change_publishes_metadata() {
        let previous = status(PlaybackState::Playing, "Old Song", "100");
        let current = status(PlaybackState::Playing, "New Song", "100");

        let properties = changed_properties(&previous, &current);
        assert_eq!(properties.len(), 1);
        assert!(matches!(properties[0], Property::Metadata(_)));
    }

    #[test]
    fn station_switch_publishes_metadata_once() {
        let previous = status(PlaybackState::Playing, "Some Song", "100");
        let mut current = previous.clone();
        current.station = "Other FM".to_string();
        current.url = "https://example.org/other".to_string();

        let properties = changed_properties(&previous, &current);
        assert_eq!(properties.len(), 1);
        assert!(matches!(properties[0], Property::Metadata(_)));
    }

    #[test]
    fn volume_and_mute_changes_publish_volume() {
        let previous = status(PlaybackState::Playing, "Some Song", "100");
        let current = status(PlaybackState::Playing, "Some Song", "50");

        let properties = changed_properties(&previous, &current);
        assert_eq!(properties.len(), 1);
        assert!(matches!(properties[0], Property::Volume(volume) if volume == 0.5));

        let mut muted = previous.clone();
        muted.mute = true;
        let properties = changed_properties(&previous, &muted);
        assert_eq!(properties.len(), 1);
        assert!(matches!(properties[0], Property::Volume(_)));
    }

    #[test]
    fn combined_change_publishes_every_affected_property() {
        let previous = status(PlaybackState::Stopped, "Old Song", "100");
        let current = status(PlaybackState::Playing, "New Song", "80");

        let properties = changed_properties(&previous, &current);
        assert_eq!(properties.len(), 3);
        assert!(matches!(
            properties[0],
            Property::PlaybackStatus(PlaybackStatus::Playing)
        ));
        assert!(matches!(properties[1], Property::Metadata(_)));
        assert!(matches!(properties[2], Property::Volume(_)));
    }
}
