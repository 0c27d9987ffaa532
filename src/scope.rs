//! OAuth authorization scopes.
//!
//! Scopes are requested when building an
//! [authorization code client](crate::client::SpotifyClientWithSecret::authorization_code_client) and gate which
//! [scoped endpoints](crate::client::ScopedClient) the resulting user client may call. Each scoped endpoint documents
//! the scope it requires.

use std::fmt;

/// An OAuth authorization scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Upload playlist cover images.
    UgcImageUpload,
    /// Read the user's playback state: current playback, devices, the queue.
    UserReadPlaybackState,
    /// Control playback: play, pause, seek, skip, volume, repeat, shuffle, transfer, queueing.
    UserModifyPlaybackState,
    /// Read the user's currently playing item.
    UserReadCurrentlyPlaying,
    /// Read the user's recently played items.
    UserReadRecentlyPlayed,
    /// Read the position the user is at in their saved episodes.
    UserReadPlaybackPosition,
    /// Read the user's top artists and tracks.
    UserTopRead,
    /// Read the user's private playlists.
    PlaylistReadPrivate,
    /// Read the user's collaborative playlists.
    PlaylistReadCollaborative,
    /// Create and modify the user's public playlists.
    PlaylistModifyPublic,
    /// Create and modify the user's private playlists.
    PlaylistModifyPrivate,
    /// Read the user's saved content.
    UserLibraryRead,
    /// Save and remove content in the user's library.
    UserLibraryModify,
    /// Read the user's subscription details, country and explicit content settings.
    UserReadPrivate,
    /// Read the user's email address.
    UserReadEmail,
}

impl Scope {
    /// The scope string as it appears in authorization requests.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "ugc-image-upload",
            Scope::UserReadPlaybackState => "user-read-playback-state",
            Scope::UserModifyPlaybackState => "user-modify-playback-state",
            Scope::UserReadCurrentlyPlaying => "user-read-currently-playing",
            Scope::UserReadRecentlyPlayed => "user-read-recently-played",
            Scope::UserReadPlaybackPosition => "user-read-playback-position",
            Scope::UserTopRead => "user-top-read",
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistReadCollaborative => "playlist-read-collaborative",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::UserLibraryRead => "user-library-read",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserReadPrivate => "user-read-private",
            Scope::UserReadEmail => "user-read-email",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join scopes into the space-separated string the accounts service expects. Implemented for all iterators of
/// [Scope].
pub trait ToScopesString {
    fn to_scopes_string(self) -> String;
}

impl<I> ToScopesString for I
where
    I: IntoIterator<Item = Scope>,
{
    fn to_scopes_string(self) -> String {
        self.into_iter()
            .map(|scope| scope.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
