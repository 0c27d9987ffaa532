use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use super::{
    query::Param,
    request::{Request, SendApiRequest, TryFromEmptyResponse},
};
use crate::{
    error::Result,
    model::{
        album::{FullAlbum, SimplifiedAlbum},
        artist::FullArtist,
        episode::FullEpisode,
        page::Page,
        search::{types_to_string, SearchResults, SearchType},
        track::{FullTrack, SimplifiedTrack},
    },
};

// the multi-item endpoints wrap their results in an object with a single array field, where IDs that matched
// nothing come back as nulls
#[derive(Debug, Deserialize)]
struct TracksResponse {
    tracks: Vec<Option<FullTrack>>,
}

#[derive(Debug, Deserialize)]
struct ArtistsResponse {
    artists: Vec<Option<FullArtist>>,
}

impl TryFromEmptyResponse for TracksResponse {}
impl TryFromEmptyResponse for ArtistsResponse {}

/// All unscoped endpoints. The functions in this trait do not require user authentication to use. All clients
/// implement this trait.
///
/// The endpoints that support optional query parameters take them as an ordered [Param] slice, which is sent
/// exactly as given.
#[async_trait]
pub trait UnscopedClient: SendApiRequest {
    /// Get catalog information for a single track identified by its unique Spotify ID.
    async fn track(&self, track_id: &str, params: &[Param]) -> Result<FullTrack> {
        self.execute(Request::new(Method::GET, format!("tracks/{track_id}")).params(params))
            .await
    }

    /// Get catalog information for multiple tracks based on their Spotify IDs.
    ///
    /// Up to 50 IDs may be given. In case some IDs cannot be found, they will be omitted from the result.
    async fn tracks(&self, track_ids: &[&str], params: &[Param]) -> Result<Vec<FullTrack>> {
        let response: TracksResponse = self
            .execute(Request::new(Method::GET, format!("tracks?ids={}", track_ids.join(","))).params(params))
            .await?;

        Ok(response.tracks.into_iter().flatten().collect())
    }

    /// Get catalog information for a single artist identified by their unique Spotify ID.
    async fn artist(&self, artist_id: &str) -> Result<FullArtist> {
        self.execute(Request::new(Method::GET, format!("artists/{artist_id}"))).await
    }

    /// Get catalog information for several artists based on their Spotify IDs.
    ///
    /// Up to 50 IDs may be given. In case some IDs cannot be found, they will be omitted from the result.
    async fn artists(&self, artist_ids: &[&str]) -> Result<Vec<FullArtist>> {
        let response: ArtistsResponse = self
            .execute(Request::new(Method::GET, format!("artists?ids={}", artist_ids.join(","))))
            .await?;

        Ok(response.artists.into_iter().flatten().collect())
    }

    /// Get catalog information about an artist's albums.
    ///
    /// The listing may be filtered to certain album groups with [Param::include_groups].
    async fn artist_albums(&self, artist_id: &str, params: &[Param]) -> Result<Page<SimplifiedAlbum>> {
        self.execute(Request::new(Method::GET, format!("artists/{artist_id}/albums")).params(params))
            .await
    }

    /// Get catalog information about an artist's top tracks by country.
    async fn artist_top_tracks(&self, artist_id: &str, params: &[Param]) -> Result<Vec<FullTrack>> {
        let response: TracksResponse = self
            .execute(Request::new(Method::GET, format!("artists/{artist_id}/top-tracks")).params(params))
            .await?;

        Ok(response.tracks.into_iter().flatten().collect())
    }

    /// Get catalog information for a single album identified by its unique Spotify ID.
    async fn album(&self, album_id: &str, params: &[Param]) -> Result<FullAlbum> {
        self.execute(Request::new(Method::GET, format!("albums/{album_id}")).params(params))
            .await
    }

    /// Get catalog information about an album's tracks.
    async fn album_tracks(&self, album_id: &str, params: &[Param]) -> Result<Page<SimplifiedTrack>> {
        self.execute(Request::new(Method::GET, format!("albums/{album_id}/tracks")).params(params))
            .await
    }

    /// Get catalog information for a single episode identified by its unique Spotify ID.
    async fn episode(&self, episode_id: &str, params: &[Param]) -> Result<FullEpisode> {
        self.execute(Request::new(Method::GET, format!("episodes/{episode_id}")).params(params))
            .await
    }

    /// Get catalog information about albums, artists, playlists, tracks, shows or episodes that match a keyword
    /// string.
    ///
    /// Only results of the given `types` are searched for. The paging fields in [SearchResults] are `None` for the
    /// types that weren't asked for.
    async fn search(&self, query: &str, types: &[SearchType], params: &[Param]) -> Result<SearchResults> {
        let mut search_params = vec![
            Param::custom("q", query.to_owned()),
            Param::custom("type", types_to_string(types)),
        ];
        search_params.extend_from_slice(params);

        self.execute(Request::new(Method::GET, "search").params(&search_params)).await
    }
}
