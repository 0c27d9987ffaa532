//! Player state: devices, current playback, the queue, playback history.

use std::time::Duration;

use serde::Deserialize;

use super::{item::Item, track::FullTrack, ExternalUrls};
use crate::util::duration_millis;

/// A device in the user's account that may be used for playback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    /// The device ID. The API documents it as nullable and possibly changing between sessions.
    pub id: Option<String>,
    /// Whether this device is the currently active one.
    pub is_active: bool,
    pub is_private_session: bool,
    /// Whether controlling this device is restricted. When `true`, the device accepts no Web API commands.
    pub is_restricted: bool,
    /// A human-readable name for the device.
    pub name: String,
    /// A device category like `computer`, `smartphone` or `speaker`.
    #[serde(rename = "type")]
    pub device_type: String,
    /// The current volume as a percentage between 0 and 100 inclusive. Not every device reports one.
    pub volume_percent: Option<u8>,
    /// Whether commanding this device's volume is allowed.
    #[serde(default)]
    pub supports_volume: bool,
}

/// Possible repeat states of a playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    Off,
    Track,
    Context,
}

impl RepeatState {
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatState::Off => "off",
            RepeatState::Track => "track",
            RepeatState::Context => "context",
        }
    }
}

/// The context a playback is playing from: an album, an artist, a playlist or a show.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Context {
    /// The context category: `album`, `artist`, `playlist` or `show`.
    #[serde(rename = "type")]
    pub context_type: String,
    pub href: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub uri: String,
}

/// What the currently playing item is, as the player reports it alongside the item itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentlyPlayingType {
    Track,
    Episode,
    Ad,
    Unknown,
}

/// Actions allowed or disallowed on the current playback.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Actions {
    pub disallows: Disallows,
}

/// Which player actions the current playback disallows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Disallows {
    #[serde(default)]
    pub interrupting_playback: bool,
    #[serde(default)]
    pub pausing: bool,
    #[serde(default)]
    pub resuming: bool,
    #[serde(default)]
    pub seeking: bool,
    #[serde(default)]
    pub skipping_next: bool,
    #[serde(default)]
    pub skipping_prev: bool,
    #[serde(default)]
    pub toggling_repeat_context: bool,
    #[serde(default)]
    pub toggling_shuffle: bool,
    #[serde(default)]
    pub toggling_repeat_track: bool,
    #[serde(default)]
    pub transferring_playback: bool,
}

/// The user's current playback state: the active device, repeat and shuffle states, and whatever is currently
/// playing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaybackState {
    pub device: Device,
    pub repeat_state: RepeatState,
    pub shuffle_state: bool,
    /// The playback context. `None` for example in a private session.
    pub context: Option<Context>,
    /// When the playback state was last changed, as a unix epoch in milliseconds.
    pub timestamp: u64,
    /// Progress into the currently playing item.
    #[serde(rename = "progress_ms", default, with = "duration_millis::option")]
    pub progress: Option<Duration>,
    pub is_playing: bool,
    /// The currently playing item. `None` when nothing is playing or the item is not available through the API.
    pub item: Option<Item>,
    pub currently_playing_type: CurrentlyPlayingType,
    #[serde(default)]
    pub actions: Actions,
}

/// The currently playing item and its context. A subset of [PlaybackState] without the device and player mode
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentlyPlaying {
    pub context: Option<Context>,
    /// When the playback state was last changed, as a unix epoch in milliseconds.
    pub timestamp: u64,
    #[serde(rename = "progress_ms", default, with = "duration_millis::option")]
    pub progress: Option<Duration>,
    pub is_playing: bool,
    /// The currently playing item. `None` when nothing is playing or the item is not available through the API.
    pub item: Option<Item>,
    pub currently_playing_type: CurrentlyPlayingType,
    #[serde(default)]
    pub actions: Actions,
}

/// The user's playback queue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Queue {
    /// The currently playing item, when there is one.
    pub currently_playing: Option<Item>,
    /// The upcoming items in queue order.
    #[serde(default)]
    pub queue: Vec<Item>,
}

/// One entry in the user's playback history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayHistory {
    pub track: FullTrack,
    /// When the track was played, as an ISO 8601 timestamp.
    pub played_at: String,
    pub context: Option<Context>,
}

/// Which kind of top items to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopItemKind {
    Artists,
    Tracks,
}

impl TopItemKind {
    /// The path segment the API uses for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TopItemKind::Artists => "artists",
            TopItemKind::Tracks => "tracks",
        }
    }
}
