use mpris_server::{Metadata, PlaybackStatus};

use crate::services::radiotray::{PlaybackState, PlayerStatus};

/// Build the MPRIS metadata map for the current player state.
///
/// Title, artist and the station comment are passed through verbatim.
/// Artwork and stream URLs are set only when the player reports one, since
/// an empty URL is worse than an absent key for MPRIS clients.
pub fn metadata_for(status: &PlayerStatus) -> Metadata {
    let mut builder = Metadata::builder()
        .title(status.title.clone())
        .artist([status.artist.clone()])
        .comment([format!("Radio Station: {}", status.station)]);

    if !status.image.is_empty() {
        builder = builder.art_url(status.image.clone());
    }
    if !status.url.is_empty() {
        builder = builder.url(status.url.clone());
    }

    builder.build()
}

/// Map the player's playback state onto the MPRIS playback status.
pub fn playback_status_for(state: PlaybackState) -> PlaybackStatus {
    match state {
        PlaybackState::Playing => PlaybackStatus::Playing,
        PlaybackState::Paused => PlaybackStatus::Paused,
        PlaybackState::Stopped => PlaybackStatus::Stopped,
    }
}
