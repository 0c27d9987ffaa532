//! Typed models for the API's response payloads.
//!
//! Every model is a plain record with public fields, deserialized straight from the response JSON. Fields the API
//! documents as nullable are `Option`s; list fields the API may omit (or null out) default to empty. Millisecond
//! duration fields surface as [std::time::Duration].

pub mod album;
pub mod artist;
pub mod episode;
pub mod error;
pub mod item;
pub mod page;
pub mod playback;
pub mod playlist;
pub mod search;
pub mod track;
pub mod user;

use std::time::Duration;

use serde::Deserialize;

pub use self::item::{Item, ItemType};
use crate::util::duration_millis;

/// Known external URLs for an object.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalUrls {
    /// The Spotify URL for the object.
    pub spotify: Option<String>,
}

/// Known external IDs for a track.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalIds {
    /// The International Standard Recording Code.
    pub isrc: Option<String>,
    /// The International Article Number.
    pub ean: Option<String>,
    /// The Universal Product Code.
    pub upc: Option<String>,
}

/// An image in various contexts: album art, playlist covers, profile pictures.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Follower counts for an artist, playlist or user.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Followers {
    pub total: u32,
}

/// Why some content is unavailable in a market.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Restrictions {
    /// `market`, `product`, `explicit` or something the API added since.
    pub reason: Option<String>,
}

/// A copyright statement on an album or a show.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Copyright {
    pub text: String,
    #[serde(rename = "type")]
    pub copyright_type: CopyrightType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CopyrightType {
    /// The copyright.
    #[serde(rename = "C")]
    Copyright,
    /// The sound recording (performance) copyright.
    #[serde(rename = "P")]
    Performance,
}

/// How precise a release date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
}

/// The user's most recent position in an episode. Only included when the client has the
/// [UserReadPlaybackPosition](crate::scope::Scope::UserReadPlaybackPosition) scope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResumePoint {
    /// Whether the user has finished the episode.
    pub fully_played: bool,
    #[serde(rename = "resume_position_ms", with = "duration_millis")]
    pub resume_position: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_date_precision_parses_from_lowercase() {
        assert_eq!(
            serde_json::from_str::<ReleaseDatePrecision>(r#""day""#).unwrap(),
            ReleaseDatePrecision::Day
        );
        assert_eq!(
            serde_json::from_str::<ReleaseDatePrecision>(r#""year""#).unwrap(),
            ReleaseDatePrecision::Year
        );
    }

    #[test]
    fn copyright_type_parses_from_single_letters() {
        let copyright: Copyright = serde_json::from_str(r#"{"text":"2023 Example Records","type":"P"}"#).unwrap();

        assert_eq!(copyright.copyright_type, CopyrightType::Performance);
    }

    #[test]
    fn resume_point_surfaces_a_duration() {
        let resume_point: ResumePoint =
            serde_json::from_str(r#"{"fully_played":false,"resume_position_ms":90500}"#).unwrap();

        assert_eq!(resume_point.resume_position, Duration::from_millis(90500));
    }
}
