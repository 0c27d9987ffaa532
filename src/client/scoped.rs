use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use super::{
    body::Properties,
    query::Param,
    request::{Request, SendApiRequest, TryFromEmptyResponse},
};
use crate::{
    error::Result,
    model::{
        page::{CursorPage, Page},
        playback::{CurrentlyPlaying, Device, PlayHistory, PlaybackState, Queue, RepeatState, TopItemKind},
        playlist::{FullPlaylist, PlaylistItem, SimplifiedPlaylist, SnapshotId},
        track::SavedTrack,
        user::PrivateUser,
        Item,
    },
};

#[derive(Debug, Deserialize)]
struct DevicesResponse {
    devices: Vec<Device>,
}

impl TryFromEmptyResponse for DevicesResponse {}

fn device_id_params(device_id: Option<&str>) -> Vec<Param> {
    device_id
        .map(|device_id| Param::device_id(device_id.to_owned()))
        .into_iter()
        .collect()
}

/// All scoped endpoints. The functions in this trait require user authentication, since they're specific to a
/// certain user. [AuthorizationCodeUserClient](crate::client::AuthorizationCodeUserClient) and
/// [AccessTokenClient](crate::client::AccessTokenClient) implement this trait.
///
/// Each function lists the [authorization scope](crate::scope::Scope) the user must have granted for it. Calling a
/// function without its scope fails with an [Api-error](crate::error::Error::Api).
#[async_trait]
pub trait ScopedClient: SendApiRequest {
    /// Get the current user's profile.
    ///
    /// Required scopes: [UserReadPrivate](crate::scope::Scope::UserReadPrivate) for the country, explicit content
    /// filter and product fields, [UserReadEmail](crate::scope::Scope::UserReadEmail) for the email field. Without
    /// them the fields are `None`.
    async fn current_user_profile(&self) -> Result<PrivateUser> {
        self.execute(Request::new(Method::GET, "me")).await
    }

    /// Get information about the user's current playback state, including track or episode, progress, and active
    /// device.
    ///
    /// This returns a superset of the [currently playing item](Self::currently_playing_item). Returns `None` when
    /// nothing is playing.
    ///
    /// Required scope: [UserReadPlaybackState](crate::scope::Scope::UserReadPlaybackState).
    async fn playback_state(&self, params: &[Param]) -> Result<Option<PlaybackState>> {
        self.execute(Request::new(Method::GET, "me/player").params(params)).await
    }

    /// Get the item currently being played on the user's account. Returns `None` when nothing is playing.
    ///
    /// By default the API answers only with tracks; pass [Param::additional_types] to receive episodes as well.
    ///
    /// Required scope: [UserReadCurrentlyPlaying](crate::scope::Scope::UserReadCurrentlyPlaying).
    async fn currently_playing_item(&self, params: &[Param]) -> Result<Option<CurrentlyPlaying>> {
        self.execute(Request::new(Method::GET, "me/player/currently-playing").params(params))
            .await
    }

    /// Get information about the user's available playback devices.
    ///
    /// Required scope: [UserReadPlaybackState](crate::scope::Scope::UserReadPlaybackState).
    async fn devices(&self) -> Result<Vec<Device>> {
        let response: DevicesResponse = self.execute(Request::new(Method::GET, "me/player/devices")).await?;

        Ok(response.devices)
    }

    /// Transfer playback to another device and optionally begin playback there.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn transfer_playback(&self, device_id: &str, play: bool) -> Result<()> {
        let body = Properties::new().device_ids(&[device_id]).play(play);

        self.execute_unit(Request::new(Method::PUT, "me/player").json(body.into_body()))
            .await
    }

    /// Start or resume playback on the user's active device, or on the device given with `device_id`.
    ///
    /// What to play is described in the given [Properties]: a [context](Properties::context_uri) or a list of
    /// [URIs](Properties::uris), optionally with a starting [offset](Properties::offset_position) and
    /// [position](Properties::position_ms). Empty properties resume the current playback.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn play(&self, properties: Properties, device_id: Option<&str>) -> Result<()> {
        let params = device_id_params(device_id);
        let mut request = Request::new(Method::PUT, "me/player/play").params(&params);

        if !properties.is_empty() {
            request = request.json(properties.into_body());
        }

        self.execute_unit(request).await
    }

    /// Pause playback on the user's account.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn pause(&self, device_id: Option<&str>) -> Result<()> {
        let params = device_id_params(device_id);

        self.execute_unit(Request::new(Method::PUT, "me/player/pause").params(&params))
            .await
    }

    /// Skip to the next item in the user's queue.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn skip_to_next(&self, device_id: Option<&str>) -> Result<()> {
        let params = device_id_params(device_id);

        self.execute_unit(Request::new(Method::POST, "me/player/next").params(&params))
            .await
    }

    /// Skip to the previous item in the user's queue.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn skip_to_previous(&self, device_id: Option<&str>) -> Result<()> {
        let params = device_id_params(device_id);

        self.execute_unit(Request::new(Method::POST, "me/player/previous").params(&params))
            .await
    }

    /// Seek to the given position in the user's currently playing item.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn seek(&self, position: Duration, device_id: Option<&str>) -> Result<()> {
        let mut params = vec![Param::position_ms(position)];
        params.extend(device_id_params(device_id));

        self.execute_unit(Request::new(Method::PUT, "me/player/seek").params(&params))
            .await
    }

    /// Set the repeat mode for the user's playback.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn set_repeat_state(&self, state: RepeatState, device_id: Option<&str>) -> Result<()> {
        let mut params = vec![Param::custom("state", state.as_str())];
        params.extend(device_id_params(device_id));

        self.execute_unit(Request::new(Method::PUT, "me/player/repeat").params(&params))
            .await
    }

    /// Set the volume for the user's current playback. The volume is given in percents, from 0 to 100 inclusive.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> Result<()> {
        let mut params = vec![Param::custom("volume_percent", volume_percent.to_string())];
        params.extend(device_id_params(device_id));

        self.execute_unit(Request::new(Method::PUT, "me/player/volume").params(&params))
            .await
    }

    /// Toggle shuffle for the user's playback.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn set_shuffle(&self, shuffle: bool, device_id: Option<&str>) -> Result<()> {
        let mut params = vec![Param::custom("state", if shuffle { "true" } else { "false" })];
        params.extend(device_id_params(device_id));

        self.execute_unit(Request::new(Method::PUT, "me/player/shuffle").params(&params))
            .await
    }

    /// Get the tracks the user has recently played.
    ///
    /// The listing can be narrowed down with the [after](Param::after)/[before](Param::before) cursor parameters.
    ///
    /// Required scope: [UserReadRecentlyPlayed](crate::scope::Scope::UserReadRecentlyPlayed).
    async fn recently_played_tracks(&self, params: &[Param]) -> Result<CursorPage<PlayHistory>> {
        self.execute(Request::new(Method::GET, "me/player/recently-played").params(params))
            .await
    }

    /// Get the user's queue: the currently playing item and the items queued after it.
    ///
    /// Required scopes: [UserReadCurrentlyPlaying](crate::scope::Scope::UserReadCurrentlyPlaying) and
    /// [UserReadPlaybackState](crate::scope::Scope::UserReadPlaybackState).
    async fn player_queue(&self) -> Result<Queue> {
        self.execute(Request::new(Method::GET, "me/player/queue")).await
    }

    /// Add an item to the end of the user's playback queue.
    ///
    /// Required scope: [UserModifyPlaybackState](crate::scope::Scope::UserModifyPlaybackState).
    async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> Result<()> {
        let mut params = vec![Param::uri(uri.to_owned())];
        params.extend(device_id_params(device_id));

        self.execute_unit(Request::new(Method::POST, "me/player/queue").params(&params))
            .await
    }

    /// Get the user's top artists or tracks over a time range.
    ///
    /// Required scope: [UserTopRead](crate::scope::Scope::UserTopRead).
    async fn current_user_top_items(&self, kind: TopItemKind, params: &[Param]) -> Result<Page<Item>> {
        self.execute(Request::new(Method::GET, format!("me/top/{}", kind.as_str())).params(params))
            .await
    }

    /// Get the tracks saved in the user's library.
    ///
    /// Required scope: [UserLibraryRead](crate::scope::Scope::UserLibraryRead).
    async fn saved_tracks(&self, params: &[Param]) -> Result<Page<SavedTrack>> {
        self.execute(Request::new(Method::GET, "me/tracks").params(params)).await
    }

    /// Save tracks to the user's library. Up to 50 IDs may be given.
    ///
    /// Required scope: [UserLibraryModify](crate::scope::Scope::UserLibraryModify).
    async fn save_tracks(&self, track_ids: &[&str]) -> Result<()> {
        let params = [Param::ids(track_ids)];

        self.execute_unit(Request::new(Method::PUT, "me/tracks").params(&params)).await
    }

    /// Remove tracks from the user's library. Up to 50 IDs may be given.
    ///
    /// Required scope: [UserLibraryModify](crate::scope::Scope::UserLibraryModify).
    async fn remove_saved_tracks(&self, track_ids: &[&str]) -> Result<()> {
        let params = [Param::ids(track_ids)];

        self.execute_unit(Request::new(Method::DELETE, "me/tracks").params(&params))
            .await
    }

    /// Check whether the given tracks are saved in the user's library. The result is in the same order as the given
    /// IDs.
    ///
    /// Required scope: [UserLibraryRead](crate::scope::Scope::UserLibraryRead).
    async fn check_saved_tracks(&self, track_ids: &[&str]) -> Result<Vec<bool>> {
        let params = [Param::ids(track_ids)];

        self.execute(Request::new(Method::GET, "me/tracks/contains").params(&params))
            .await
    }

    /// Get a playlist owned or followed by a user.
    ///
    /// Required scope: [PlaylistReadPrivate](crate::scope::Scope::PlaylistReadPrivate) for private playlists.
    async fn playlist(&self, playlist_id: &str, params: &[Param]) -> Result<FullPlaylist> {
        self.execute(Request::new(Method::GET, format!("playlists/{playlist_id}")).params(params))
            .await
    }

    /// Get the items in a playlist.
    ///
    /// An item is `None` in its [PlaylistItem] when it is not available; episodes in particular come back that way
    /// unless [Param::additional_types] asks for them.
    ///
    /// Required scope: [PlaylistReadPrivate](crate::scope::Scope::PlaylistReadPrivate) for private playlists.
    async fn playlist_items(&self, playlist_id: &str, params: &[Param]) -> Result<Page<PlaylistItem>> {
        self.execute(Request::new(Method::GET, format!("playlists/{playlist_id}/tracks")).params(params))
            .await
    }

    /// Get the playlists owned or followed by the current user.
    ///
    /// Required scope: [PlaylistReadPrivate](crate::scope::Scope::PlaylistReadPrivate),
    /// [PlaylistReadCollaborative](crate::scope::Scope::PlaylistReadCollaborative) for collaborative playlists.
    async fn current_user_playlists(&self, params: &[Param]) -> Result<Page<SimplifiedPlaylist>> {
        self.execute(Request::new(Method::GET, "me/playlists").params(params)).await
    }

    /// Create a new, empty playlist for a user. The given [Properties] should carry at least a
    /// [name](Properties::name).
    ///
    /// Required scope: [PlaylistModifyPublic](crate::scope::Scope::PlaylistModifyPublic) or
    /// [PlaylistModifyPrivate](crate::scope::Scope::PlaylistModifyPrivate), depending on the playlist's visibility.
    async fn create_playlist(&self, user_id: &str, properties: Properties) -> Result<FullPlaylist> {
        self.execute(Request::new(Method::POST, format!("users/{user_id}/playlists")).json(properties.into_body()))
            .await
    }

    /// Change a playlist's details: its [name](Properties::name), [visibility](Properties::public), whether it is
    /// [collaborative](Properties::collaborative) or its [description](Properties::description).
    ///
    /// Required scope: [PlaylistModifyPublic](crate::scope::Scope::PlaylistModifyPublic) or
    /// [PlaylistModifyPrivate](crate::scope::Scope::PlaylistModifyPrivate), depending on the playlist's visibility.
    async fn change_playlist_details(&self, playlist_id: &str, properties: Properties) -> Result<()> {
        self.execute_unit(Request::new(Method::PUT, format!("playlists/{playlist_id}")).json(properties.into_body()))
            .await
    }

    /// Add items to a playlist. An insertion [position](Properties::position) may be given in the properties; by
    /// default the items are appended.
    ///
    /// Required scope: [PlaylistModifyPublic](crate::scope::Scope::PlaylistModifyPublic) or
    /// [PlaylistModifyPrivate](crate::scope::Scope::PlaylistModifyPrivate), depending on the playlist's visibility.
    async fn add_playlist_items(&self, playlist_id: &str, uris: &[&str], properties: Properties) -> Result<SnapshotId> {
        let body = properties.uris(uris);

        self.execute(Request::new(Method::POST, format!("playlists/{playlist_id}/tracks")).json(body.into_body()))
            .await
    }

    /// Remove all occurrences of the given items from a playlist. A [snapshot ID](Properties::snapshot_id) may be
    /// given in the properties to pin the removal against a known playlist version.
    ///
    /// Required scope: [PlaylistModifyPublic](crate::scope::Scope::PlaylistModifyPublic) or
    /// [PlaylistModifyPrivate](crate::scope::Scope::PlaylistModifyPrivate), depending on the playlist's visibility.
    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[&str],
        properties: Properties,
    ) -> Result<SnapshotId> {
        let body = properties.tracks(uris);

        self.execute(Request::new(Method::DELETE, format!("playlists/{playlist_id}/tracks")).json(body.into_body()))
            .await
    }

    /// Move an item or a range of items to another position in a playlist.
    ///
    /// The range starts at `range_start` and covers one item unless a [length](Properties::range_length) is given
    /// in the properties. The items are moved in front of the position given in `insert_before`.
    ///
    /// Required scope: [PlaylistModifyPublic](crate::scope::Scope::PlaylistModifyPublic) or
    /// [PlaylistModifyPrivate](crate::scope::Scope::PlaylistModifyPrivate), depending on the playlist's visibility.
    async fn reorder_playlist_items(
        &self,
        playlist_id: &str,
        range_start: u32,
        insert_before: u32,
        properties: Properties,
    ) -> Result<SnapshotId> {
        let body = properties.range_start(range_start).insert_before(insert_before);

        self.execute(Request::new(Method::PUT, format!("playlists/{playlist_id}/tracks")).json(body.into_body()))
            .await
    }

    /// Replace a playlist's cover image. The image must be a base64-encoded JPEG, at most 256 KB in size after
    /// encoding.
    ///
    /// Required scopes: [UgcImageUpload](crate::scope::Scope::UgcImageUpload), and
    /// [PlaylistModifyPublic](crate::scope::Scope::PlaylistModifyPublic) or
    /// [PlaylistModifyPrivate](crate::scope::Scope::PlaylistModifyPrivate), depending on the playlist's visibility.
    async fn upload_playlist_cover_image(&self, playlist_id: &str, image_base64: String) -> Result<()> {
        self.execute_unit(Request::new(Method::PUT, format!("playlists/{playlist_id}/images")).jpeg_base64(image_base64))
            .await
    }
}
