//! Album objects.

use serde::Deserialize;

use super::{
    artist::SimplifiedArtist, page::Page, track::SimplifiedTrack, Copyright, ExternalIds, ExternalUrls, Image,
    ReleaseDatePrecision, Restrictions,
};

/// What kind of release an album is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

/// The album object embedded in tracks and artist discographies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimplifiedAlbum {
    pub album_type: AlbumType,
    pub total_tracks: u32,
    /// The markets the album is available in. Empty when the response was requested for a specific market.
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// The album cover in various sizes, widest first.
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    /// The date the album was first released, as precise as [release_date_precision](Self::release_date_precision)
    /// says.
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    /// Present when content restrictions apply to the album.
    pub restrictions: Option<Restrictions>,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
}

/// A full album object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FullAlbum {
    pub album_type: AlbumType,
    pub total_tracks: u32,
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub restrictions: Option<Restrictions>,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
    /// The first page of the album's tracks.
    pub tracks: Page<SimplifiedTrack>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub genres: Vec<String>,
    /// The label the album was released under.
    #[serde(default)]
    pub label: String,
    /// The popularity of the album between 0 and 100, 100 being the most popular.
    #[serde(default)]
    pub popularity: u32,
}
