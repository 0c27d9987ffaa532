//! JSON request bodies.
//!
//! The endpoints that take a JSON body accept a varying set of optional settings. [Properties] assembles such a
//! body key by key: only the keys that were set end up in the serialized object, so an omitted setting stays absent
//! instead of turning into an explicit `null` the API might interpret differently.

use serde_json::{json, Map, Value};

/// A JSON object body assembled from individual settings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Properties {
    fields: Map<String, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// The name for a playlist.
    pub fn name<S>(self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.set("name", Value::String(name.into()))
    }

    /// Whether a playlist is public.
    pub fn public(self, public: bool) -> Self {
        self.set("public", Value::Bool(public))
    }

    /// Whether other users may modify a playlist.
    pub fn collaborative(self, collaborative: bool) -> Self {
        self.set("collaborative", Value::Bool(collaborative))
    }

    /// The description for a playlist.
    pub fn description<S>(self, description: S) -> Self
    where
        S: Into<String>,
    {
        self.set("description", Value::String(description.into()))
    }

    /// The devices to transfer playback to. The API currently supports exactly one.
    pub fn device_ids(self, device_ids: &[&str]) -> Self {
        self.set("device_ids", json!(device_ids))
    }

    /// Whether playback continues on the new device after a transfer.
    pub fn play(self, play: bool) -> Self {
        self.set("play", Value::Bool(play))
    }

    /// The context (album, artist or playlist) to play.
    pub fn context_uri<S>(self, context_uri: S) -> Self
    where
        S: Into<String>,
    {
        self.set("context_uri", Value::String(context_uri.into()))
    }

    /// The track or episode URIs to play, in order.
    pub fn uris(self, uris: &[&str]) -> Self {
        self.set("uris", json!(uris))
    }

    /// Start playback from this zero-based position in the context.
    pub fn offset_position(self, position: u32) -> Self {
        self.set("offset", json!({ "position": position }))
    }

    /// Start playback from the item with this URI in the context.
    pub fn offset_uri<S>(self, uri: S) -> Self
    where
        S: Into<String>,
    {
        self.set("offset", json!({ "uri": uri.into() }))
    }

    /// Start playback from this position in the item, in whole milliseconds.
    pub fn position_ms(self, position: std::time::Duration) -> Self {
        self.set("position_ms", Value::from(position.as_millis() as u64))
    }

    /// The zero-based position to insert items at in a playlist.
    pub fn position(self, position: u32) -> Self {
        self.set("position", Value::from(position))
    }

    /// The zero-based position of the first item to reorder in a playlist.
    pub fn range_start(self, range_start: u32) -> Self {
        self.set("range_start", Value::from(range_start))
    }

    /// The zero-based position to move the reordered items to.
    pub fn insert_before(self, insert_before: u32) -> Self {
        self.set("insert_before", Value::from(insert_before))
    }

    /// How many consecutive items to reorder, starting from `range_start`. Defaults to 1.
    pub fn range_length(self, range_length: u32) -> Self {
        self.set("range_length", Value::from(range_length))
    }

    /// The playlist snapshot the operation applies to.
    pub fn snapshot_id<S>(self, snapshot_id: S) -> Self
    where
        S: Into<String>,
    {
        self.set("snapshot_id", Value::String(snapshot_id.into()))
    }

    /// The tracks to remove from a playlist, wrapped in the `{"uri": ...}` objects the API expects.
    pub fn tracks(self, uris: &[&str]) -> Self {
        let tracks: Vec<_> = uris.iter().map(|uri| json!({ "uri": uri })).collect();
        self.set("tracks", Value::Array(tracks))
    }

    fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_owned(), value);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_body(self) -> Vec<u8> {
        serde_json::to_vec(&self.fields).expect("failed to serialize request body (this is likely a bug)")
    }
}
