//! Typed query parameters.
//!
//! Every endpoint passes its query string as a slice of [Param]s, so the parameter order in the request is exactly
//! the order the caller lists them in. The constructors cover the parameters the endpoints in this crate use;
//! [custom](Param::custom) passes anything else through verbatim.

use std::{borrow::Cow, time::Duration};

use crate::model::ItemType;

/// A single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    key: &'static str,
    value: Cow<'static, str>,
}

impl Param {
    /// An ISO 3166-1 alpha-2 market code.
    pub fn market<S>(market: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            key: "market",
            value: market.into(),
        }
    }

    /// The maximum number of items to return from a paged listing.
    pub fn limit(limit: u32) -> Self {
        Self {
            key: "limit",
            value: Cow::Owned(limit.to_string()),
        }
    }

    /// The index of the first item to return from a paged listing.
    pub fn offset(offset: u32) -> Self {
        Self {
            key: "offset",
            value: Cow::Owned(offset.to_string()),
        }
    }

    /// A filter over the fields to include in a playlist response.
    pub fn fields<S>(fields: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            key: "fields",
            value: fields.into(),
        }
    }

    /// The album groups to include in an artist's album listing.
    pub fn include_groups(groups: &[&str]) -> Self {
        Self {
            key: "include_groups",
            value: Cow::Owned(groups.join(",")),
        }
    }

    /// Include externally hosted audio content in search results.
    pub fn include_external_audio() -> Self {
        Self {
            key: "include_external",
            value: Cow::Borrowed("audio"),
        }
    }

    /// The item types beside tracks the caller is prepared to receive in playback responses.
    pub fn additional_types(types: &[ItemType]) -> Self {
        let types: Vec<_> = types.iter().map(|item_type| item_type.as_str()).collect();

        Self {
            key: "additional_types",
            value: Cow::Owned(types.join(",")),
        }
    }

    pub fn locale<S>(locale: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            key: "locale",
            value: locale.into(),
        }
    }

    /// The device to target with a player command. Defaults to the user's currently active device.
    pub fn device_id<S>(device_id: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            key: "device_id",
            value: device_id.into(),
        }
    }

    /// A zero-based position in a playlist.
    pub fn position(position: u32) -> Self {
        Self {
            key: "position",
            value: Cow::Owned(position.to_string()),
        }
    }

    /// A position in a track or an episode, sent as whole milliseconds.
    pub fn position_ms(position: Duration) -> Self {
        Self {
            key: "position_ms",
            value: Cow::Owned(position.as_millis().to_string()),
        }
    }

    /// A single context, track or episode URI.
    pub fn uri<S>(uri: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            key: "uri",
            value: uri.into(),
        }
    }

    /// A comma-joined list of IDs.
    pub fn ids(ids: &[&str]) -> Self {
        Self {
            key: "ids",
            value: Cow::Owned(ids.join(",")),
        }
    }

    /// A Unix millisecond timestamp cursor: return items after this point in time.
    pub fn after(timestamp: u64) -> Self {
        Self {
            key: "after",
            value: Cow::Owned(timestamp.to_string()),
        }
    }

    /// A Unix millisecond timestamp cursor: return items before this point in time.
    pub fn before(timestamp: u64) -> Self {
        Self {
            key: "before",
            value: Cow::Owned(timestamp.to_string()),
        }
    }

    /// An arbitrary parameter. The key and value are passed through as given, so anything the named constructors
    /// don't cover can still be sent.
    pub fn custom<S>(key: &'static str, value: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            key,
            value: value.into(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        self.key
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_ms_is_sent_as_whole_milliseconds() {
        let param = Param::position_ms(Duration::from_secs(2));

        assert_eq!(param.key(), "position_ms");
        assert_eq!(param.value(), "2000");
    }

    #[test]
    fn list_valued_params_are_comma_joined() {
        assert_eq!(Param::include_groups(&["album", "single"]).value(), "album,single");
        assert_eq!(Param::ids(&["a", "b", "c"]).value(), "a,b,c");
        assert_eq!(
            Param::additional_types(&[ItemType::Track, ItemType::Episode]).value(),
            "track,episode"
        );
    }

    #[test]
    fn custom_param_is_passed_through_verbatim() {
        let param = Param::custom("q", "artist:\"Violet Cold\"");

        assert_eq!(param.key(), "q");
        assert_eq!(param.value(), "artist:\"Violet Cold\"");
    }
}
