//! The polymorphic item object.
//!
//! Several endpoints answer with an object that is an artist, a track or an episode, depending on what the user is
//! doing: the current playback's item, a playlist's entries, the playback queue, the user's top items. The payload
//! carries a `type` field that selects the shape; [Item] decodes it into the matching variant in one place so no
//! call site has to pre-know what it is getting.

use std::fmt;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use super::{artist::FullArtist, episode::FullEpisode, track::FullTrack};
use crate::error::{Error, Result};

/// The known item shapes a `type` discriminator may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Artist,
    Track,
    Episode,
}

impl ItemType {
    /// The discriminator string for this shape.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Artist => "artist",
            ItemType::Track => "track",
            ItemType::Episode => "episode",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object that is exactly one of the known item shapes. The variant records which discriminator matched.
///
/// Nullable item fields in the models are `Option<Item>`, so "nothing here" never masquerades as a half-filled
/// value. Decoding a raw payload by hand goes through [from_json](Self::from_json):
///
/// ```
/// use tonearm::model::{Item, ItemType};
///
/// let body = br#"{
///     "type": "artist",
///     "href": "https://api.spotify.com/v1/artists/0559tR6WyukLWH68JIGBuC",
///     "id": "0559tR6WyukLWH68JIGBuC",
///     "name": "Violet Cold",
///     "uri": "spotify:artist:0559tR6WyukLWH68JIGBuC"
/// }"#;
///
/// let item = tonearm::model::Item::from_json(body).unwrap().unwrap();
/// assert_eq!(item.item_type(), ItemType::Artist);
/// assert_eq!(item.as_artist().unwrap().name, "Violet Cold");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Artist(Box<FullArtist>),
    Track(Box<FullTrack>),
    Episode(Box<FullEpisode>),
}

impl Item {
    /// Which shape this item decoded as.
    pub fn item_type(&self) -> ItemType {
        match self {
            Item::Artist(_) => ItemType::Artist,
            Item::Track(_) => ItemType::Track,
            Item::Episode(_) => ItemType::Episode,
        }
    }

    pub fn as_artist(&self) -> Option<&FullArtist> {
        match self {
            Item::Artist(artist) => Some(artist),
            _ => None,
        }
    }

    pub fn as_track(&self) -> Option<&FullTrack> {
        match self {
            Item::Track(track) => Some(track),
            _ => None,
        }
    }

    pub fn as_episode(&self) -> Option<&FullEpisode> {
        match self {
            Item::Episode(episode) => Some(episode),
            _ => None,
        }
    }

    /// Decode an item from raw JSON. Empty input and JSON `null` are valid and decode to `None`.
    ///
    /// # Errors
    ///
    /// - [Error::MissingItemType]: the object has no `type` field.
    /// - [Error::UnsupportedItemType]: the `type` value is outside the known set.
    /// - [Error::MalformedItem]: the `type` matched but the object does not decode into that shape.
    /// - [Error::Decode]: the input is not valid JSON at all.
    pub fn from_json(bytes: &[u8]) -> Result<Option<Item>> {
        if bytes.is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_slice(bytes)?;
        if value.is_null() {
            return Ok(None);
        }

        Self::from_value(value).map(Some)
    }

    /// The discriminator dispatch all decoding paths funnel through.
    fn from_value(value: Value) -> Result<Item> {
        let item_type = match value.get("type") {
            Some(Value::String(tag)) => match tag.as_str() {
                "artist" => ItemType::Artist,
                "track" => ItemType::Track,
                "episode" => ItemType::Episode,
                other => return Err(Error::UnsupportedItemType(other.to_owned())),
            },
            Some(other) => return Err(Error::UnsupportedItemType(other.to_string())),
            None => return Err(Error::MissingItemType),
        };

        match item_type {
            ItemType::Artist => serde_json::from_value(value)
                .map(|artist| Item::Artist(Box::new(artist)))
                .map_err(|err| Error::MalformedItem(item_type, err)),
            ItemType::Track => serde_json::from_value(value)
                .map(|track| Item::Track(Box::new(track)))
                .map_err(|err| Error::MalformedItem(item_type, err)),
            ItemType::Episode => serde_json::from_value(value)
                .map(|episode| Item::Episode(Box::new(episode)))
                .map_err(|err| Error::MalformedItem(item_type, err)),
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Item, D::Error>
    where
        D: Deserializer<'de>,
    {
        // decoding embedded in a larger response goes through the same dispatch; the typed conditions flatten into
        // the deserializer's error with their message retained
        let value = Value::deserialize(deserializer)?;
        Item::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn artist_object() -> Value {
        json!({
            "type": "artist",
            "external_urls": { "spotify": "https://open.spotify.com/artist/0559tR6WyukLWH68JIGBuC" },
            "followers": { "total": 33816 },
            "genres": ["blackgaze"],
            "href": "https://api.spotify.com/v1/artists/0559tR6WyukLWH68JIGBuC",
            "id": "0559tR6WyukLWH68JIGBuC",
            "images": [],
            "name": "Violet Cold",
            "popularity": 45,
            "uri": "spotify:artist:0559tR6WyukLWH68JIGBuC"
        })
    }

    fn track_object() -> Value {
        json!({
            "type": "track",
            "album": {
                "album_type": "album",
                "total_tracks": 10,
                "external_urls": {},
                "href": "https://api.spotify.com/v1/albums/6ros6gSJpZsATPBLwuJ4Zt",
                "id": "6ros6gSJpZsATPBLwuJ4Zt",
                "images": [],
                "name": "Anomie",
                "release_date": "2021-06-18",
                "release_date_precision": "day",
                "uri": "spotify:album:6ros6gSJpZsATPBLwuJ4Zt",
                "artists": [{
                    "external_urls": {},
                    "href": "https://api.spotify.com/v1/artists/0559tR6WyukLWH68JIGBuC",
                    "id": "0559tR6WyukLWH68JIGBuC",
                    "name": "Violet Cold",
                    "uri": "spotify:artist:0559tR6WyukLWH68JIGBuC"
                }]
            },
            "artists": [{
                "external_urls": {},
                "href": "https://api.spotify.com/v1/artists/0559tR6WyukLWH68JIGBuC",
                "id": "0559tR6WyukLWH68JIGBuC",
                "name": "Violet Cold",
                "uri": "spotify:artist:0559tR6WyukLWH68JIGBuC"
            }],
            "disc_number": 1,
            "duration_ms": 303_588,
            "explicit": false,
            "external_ids": { "isrc": "QZES92078002" },
            "external_urls": {},
            "href": "https://api.spotify.com/v1/tracks/2SiADqhDznejnBgmAabeSB",
            "id": "2SiADqhDznejnBgmAabeSB",
            "name": "She Spoke of Her Devastation",
            "popularity": 38,
            "preview_url": null,
            "track_number": 4,
            "uri": "spotify:track:2SiADqhDznejnBgmAabeSB",
            "is_local": false
        })
    }

    fn episode_object() -> Value {
        json!({
            "type": "episode",
            "audio_preview_url": null,
            "description": "A week of firsts.",
            "duration_ms": 1_685_023,
            "explicit": false,
            "external_urls": {},
            "href": "https://api.spotify.com/v1/episodes/512ojhOuo1ktJprKbVcKyQ",
            "id": "512ojhOuo1ktJprKbVcKyQ",
            "images": [],
            "is_externally_hosted": false,
            "is_playable": true,
            "languages": ["en"],
            "name": "First Week Back",
            "release_date": "2022-03-01",
            "release_date_precision": "day",
            "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ",
            "show": {
                "description": "A show about weeks.",
                "explicit": false,
                "external_urls": {},
                "href": "https://api.spotify.com/v1/shows/38bS44xjbVVZ3No3ByF1dJ",
                "id": "38bS44xjbVVZ3No3ByF1dJ",
                "images": [],
                "is_externally_hosted": false,
                "languages": ["en"],
                "media_type": "audio",
                "name": "Weekly Weeks",
                "publisher": "The Week Company",
                "total_episodes": 52,
                "uri": "spotify:show:38bS44xjbVVZ3No3ByF1dJ"
            }
        })
    }

    #[test]
    fn track_object_decodes_into_track_variant() {
        let item = Item::from_value(track_object()).unwrap();

        assert_eq!(item.item_type(), ItemType::Track);
        let track = item.as_track().expect("item should be a track");
        assert_eq!(track.id, "2SiADqhDznejnBgmAabeSB");
        assert_eq!(track.duration, std::time::Duration::from_millis(303_588));
        assert_eq!(track.album.name, "Anomie");
    }

    #[test]
    fn episode_object_decodes_into_episode_variant() {
        let item = Item::from_value(episode_object()).unwrap();

        assert_eq!(item.item_type(), ItemType::Episode);
        let episode = item.as_episode().expect("item should be an episode");
        assert_eq!(episode.show.publisher, "The Week Company");
        assert!(episode.is_playable.unwrap());
    }

    #[test]
    fn artist_object_decodes_into_artist_variant() {
        let item = Item::from_value(artist_object()).unwrap();

        assert_eq!(item.item_type(), ItemType::Artist);
        assert_eq!(item.as_artist().unwrap().followers.total, 33816);
        assert!(item.as_track().is_none());
        assert!(item.as_episode().is_none());
    }

    #[test]
    fn object_without_type_field_is_missing_discriminator() {
        let result = Item::from_value(json!({ "name": "shapeless" }));

        assert!(matches!(result, Err(Error::MissingItemType)));
    }

    #[test]
    fn unknown_type_value_is_unsupported() {
        let result = Item::from_value(json!({ "type": "unknown" }));

        assert!(matches!(result, Err(Error::UnsupportedItemType(tag)) if tag == "unknown"));
    }

    #[test]
    fn non_string_type_value_is_unsupported() {
        let result = Item::from_value(json!({ "type": 42 }));

        assert!(matches!(result, Err(Error::UnsupportedItemType(tag)) if tag == "42"));
    }

    #[test]
    fn known_type_with_wrong_fields_is_malformed() {
        let result = Item::from_value(json!({ "type": "track", "name": "no other fields" }));

        assert!(matches!(result, Err(Error::MalformedItem(ItemType::Track, _))));
    }

    #[test]
    fn null_input_decodes_to_none() {
        assert_eq!(Item::from_json(b"null").unwrap(), None);
    }

    #[test]
    fn empty_input_decodes_to_none() {
        assert_eq!(Item::from_json(b"").unwrap(), None);
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let result = Item::from_json(b"every day is exactly the same");

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn null_decodes_to_none_through_serde() {
        let item: Option<Item> = serde_json::from_str("null").unwrap();

        assert_eq!(item, None);
    }

    #[test]
    fn embedded_decode_keeps_the_condition_message() {
        let err = serde_json::from_value::<Item>(json!({ "type": "radio" })).unwrap_err();

        assert!(err.to_string().contains("Unsupported item type: radio"));
    }

    #[test]
    fn decoding_twice_yields_equal_items() {
        let first = Item::from_value(track_object()).unwrap();
        let second = Item::from_value(track_object()).unwrap();

        assert_eq!(first, second);
    }
}
