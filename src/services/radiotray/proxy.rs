#![allow(missing_docs)]

use zbus::{Result, proxy};

/// Radiotray-NG control interface proxy
///
/// Covers the complete session-bus API the player publishes under
/// `com.github.radiotray_ng`. Query methods return JSON documents as
/// strings; `set_volume` takes the level as a string, matching the
/// player's own signature.
#[proxy(
    interface = "com.github.radiotray_ng",
    default_service = "com.github.radiotray_ng",
    default_path = "/com/github/radiotray_ng"
)]
pub trait RadiotrayNg {
    /// Bookmarks file contents as a JSON document
    fn get_bookmarks(&self) -> Result<String>;

    /// Player configuration as a JSON document
    fn get_config(&self) -> Result<String>;

    /// Current player state as a JSON document
    fn get_player_state(&self) -> Result<String>;

    /// Toggle mute
    fn mute(&self) -> Result<()>;

    /// Switch to the next station in the current group
    fn next_station(&self) -> Result<()>;

    /// Start playing the last selected station
    fn play(&self) -> Result<()>;

    /// Play a specific station from a bookmark group
    fn play_station(&self, group: &str, station: &str) -> Result<()>;

    /// Play a stream URL directly
    fn play_url(&self, url: &str) -> Result<()>;

    /// Switch to the previous station in the current group
    fn previous_station(&self) -> Result<()>;

    /// Ask the player to quit
    fn quit(&self) -> Result<()>;

    /// Reload the bookmarks file from disk
    fn reload_bookmarks(&self) -> Result<()>;

    /// Set the volume to a percent level, passed as a string
    fn set_volume(&self, level: &str) -> Result<()>;

    /// Stop playback
    fn stop(&self) -> Result<()>;

    /// Lower the volume one step
    fn volume_down(&self) -> Result<()>;

    /// Raise the volume one step
    fn volume_up(&self) -> Result<()>;
}
