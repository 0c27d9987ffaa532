//! Track objects.

use std::time::Duration;

use serde::Deserialize;

use super::{album::SimplifiedAlbum, artist::SimplifiedArtist, ExternalIds, ExternalUrls, Restrictions};
use crate::util::duration_millis;

/// The track object embedded in albums.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimplifiedTrack {
    pub artists: Vec<SimplifiedArtist>,
    /// The markets the track is available in. Empty when the response was requested for a specific market.
    #[serde(default)]
    pub available_markets: Vec<String>,
    /// Which disc of the release the track is on, starting from 1.
    pub disc_number: u32,
    #[serde(rename = "duration_ms", with = "duration_millis")]
    pub duration: Duration,
    /// Whether the track has explicit lyrics, as far as the API knows.
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// Included when track relinking is applied: whether the track is playable in the requested market.
    pub is_playable: Option<bool>,
    /// Included when track relinking is applied and the returned track replaces the requested one. Points at the
    /// originally requested track.
    pub linked_from: Option<LinkedTrack>,
    /// Present when content restrictions apply to the track.
    pub restrictions: Option<Restrictions>,
    pub name: String,
    /// A URL to a 30 second MP3 preview of the track, when one is available.
    pub preview_url: Option<String>,
    /// The track's position in its disc, starting from 1.
    pub track_number: u32,
    pub uri: String,
    /// Whether the track comes from a local file on the user's device.
    #[serde(default)]
    pub is_local: bool,
}

/// A full track object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FullTrack {
    pub album: SimplifiedAlbum,
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    pub disc_number: u32,
    #[serde(rename = "duration_ms", with = "duration_millis")]
    pub duration: Duration,
    pub explicit: bool,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub is_playable: Option<bool>,
    pub linked_from: Option<LinkedTrack>,
    pub restrictions: Option<Restrictions>,
    pub name: String,
    /// The popularity of the track between 0 and 100, 100 being the most popular.
    #[serde(default)]
    pub popularity: u32,
    pub preview_url: Option<String>,
    pub track_number: u32,
    pub uri: String,
    #[serde(default)]
    pub is_local: bool,
}

/// The originally requested track when track relinking has replaced it in a response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkedTrack {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub uri: String,
}

/// A track in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SavedTrack {
    /// When the track was saved, as an ISO 8601 timestamp.
    pub added_at: String,
    pub track: FullTrack,
}
