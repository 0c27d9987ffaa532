//! Artist objects.

use serde::Deserialize;

use super::{ExternalUrls, Followers, Image};

/// The artist object embedded in albums and tracks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub name: String,
    pub uri: String,
}

/// A full artist object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FullArtist {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    /// Genres the artist is associated with.
    #[serde(default)]
    pub genres: Vec<String>,
    pub href: String,
    pub id: String,
    /// Images of the artist in various sizes, widest first.
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    /// The popularity of the artist between 0 and 100, 100 being the most popular.
    #[serde(default)]
    pub popularity: u32,
    pub uri: String,
}
