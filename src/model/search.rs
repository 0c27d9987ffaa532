//! Search results.

use serde::Deserialize;

use super::{
    album::SimplifiedAlbum,
    artist::FullArtist,
    episode::{SimplifiedEpisode, SimplifiedShow},
    page::Page,
    playlist::SimplifiedPlaylist,
    track::FullTrack,
};

/// The item types a [search](crate::client::UnscopedClient::search) can look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
}

impl SearchType {
    /// The type string as it appears in the search request's `type` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
        }
    }
}

/// Join search types into the comma-separated string the API expects.
pub(crate) fn types_to_string(types: &[SearchType]) -> String {
    types.iter().map(|ty| ty.as_str()).collect::<Vec<_>>().join(",")
}

/// First pages of results from a [search](crate::client::UnscopedClient::search). Only the fields for the searched
/// types are filled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResults {
    pub tracks: Option<Page<FullTrack>>,
    pub artists: Option<Page<FullArtist>>,
    pub albums: Option<Page<SimplifiedAlbum>>,
    pub playlists: Option<Page<SimplifiedPlaylist>>,
    pub shows: Option<Page<SimplifiedShow>>,
    pub episodes: Option<Page<SimplifiedEpisode>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_types_join_comma_separated() {
        assert_eq!(
            types_to_string(&[SearchType::Track, SearchType::Episode, SearchType::Album]),
            "track,episode,album"
        );
    }

    #[test]
    fn empty_search_types_join_to_empty_string() {
        assert_eq!(types_to_string(&[]), "");
    }
}
