//! Playlist objects.

use serde::Deserialize;

use super::{item::Item, page::Page, user::PublicUser, ExternalUrls, Followers, Image};
use crate::util::null_as_default;

/// The playlist object in playlist listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimplifiedPlaylist {
    /// Whether the owner allows others to modify the playlist.
    pub collaborative: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// The playlist cover in various sizes, widest first. The API nulls this out for playlists without a cover.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    /// Whether the playlist is public. `None` when the playlist's visibility is not relevant.
    pub public: Option<bool>,
    /// An identifier of this version of the playlist, for concurrent-modification checks in the modification
    /// endpoints.
    pub snapshot_id: String,
    /// A link to the playlist's tracks and their total count.
    pub tracks: Option<PlaylistTracksRef>,
    pub uri: String,
}

/// A full playlist object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FullPlaylist {
    pub collaborative: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    pub href: String,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    pub public: Option<bool>,
    pub snapshot_id: String,
    /// The first page of the playlist's items.
    pub tracks: Page<PlaylistItem>,
    pub uri: String,
}

/// A link to a playlist's tracks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistTracksRef {
    pub href: String,
    pub total: u32,
}

/// One item in a playlist. The item itself decodes through [Item] since a playlist may contain tracks and episodes.
///
/// Tracks from local files are not modeled; they come back with null catalog fields the track shape does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistItem {
    /// When the item was added, as an ISO 8601 timestamp. The API answers null for very old additions.
    pub added_at: Option<String>,
    /// Who added the item. The API answers null for very old additions.
    pub added_by: Option<PublicUser>,
    /// Whether the item comes from a local file on the owner's device.
    #[serde(default)]
    pub is_local: bool,
    pub track: Option<Item>,
}

/// The response to playlist modifications: the identifier of the new version of the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapshotId {
    pub snapshot_id: String,
}
