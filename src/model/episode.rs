//! Episode and show objects.

use std::time::Duration;

use serde::Deserialize;

use super::{Copyright, ExternalUrls, Image, ReleaseDatePrecision, Restrictions, ResumePoint};
use crate::util::duration_millis;

/// The episode object embedded in show listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimplifiedEpisode {
    /// A URL to a 30 second MP3 preview of the episode, when one is available.
    pub audio_preview_url: Option<String>,
    pub description: String,
    /// The episode description with HTML markup retained.
    #[serde(default)]
    pub html_description: String,
    #[serde(rename = "duration_ms", with = "duration_millis")]
    pub duration: Duration,
    /// Whether the episode has explicit content, as far as the API knows.
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// The episode cover in various sizes, widest first.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Whether the episode is hosted outside of Spotify's CDN.
    #[serde(default)]
    pub is_externally_hosted: bool,
    /// Whether the episode is playable in the requested market.
    pub is_playable: Option<bool>,
    /// Languages spoken in the episode, as ISO 639-1 codes.
    #[serde(default)]
    pub languages: Vec<String>,
    pub name: String,
    /// The date the episode was first released, as precise as
    /// [release_date_precision](Self::release_date_precision) says.
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    /// The user's most recent position in the episode. Requires the
    /// [UserReadPlaybackPosition](crate::scope::Scope::UserReadPlaybackPosition) scope.
    pub resume_point: Option<ResumePoint>,
    /// Present when content restrictions apply to the episode.
    pub restrictions: Option<Restrictions>,
    pub uri: String,
}

/// A full episode object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FullEpisode {
    pub audio_preview_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub html_description: String,
    #[serde(rename = "duration_ms", with = "duration_millis")]
    pub duration: Duration,
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub is_externally_hosted: bool,
    pub is_playable: Option<bool>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub resume_point: Option<ResumePoint>,
    pub restrictions: Option<Restrictions>,
    pub uri: String,
    /// The show the episode belongs to.
    pub show: SimplifiedShow,
}

/// The show object embedded in episodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimplifiedShow {
    /// The markets the show is available in.
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    pub description: String,
    #[serde(default)]
    pub html_description: String,
    /// Whether the show has explicit content, as far as the API knows.
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// The show cover in various sizes, widest first.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Whether all of the show's episodes are hosted outside of Spotify's CDN. The API may answer null here.
    #[serde(default)]
    pub is_externally_hosted: Option<bool>,
    /// Languages the show is available in, as ISO 639 codes.
    #[serde(default)]
    pub languages: Vec<String>,
    /// The media type of the show, like `audio`.
    #[serde(default)]
    pub media_type: String,
    pub name: String,
    pub publisher: String,
    #[serde(default)]
    pub total_episodes: u32,
    pub uri: String,
}
