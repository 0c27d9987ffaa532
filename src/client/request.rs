//! The request pipeline every API call goes through.
//!
//! An endpoint describes itself as a [Request]: a method, an endpoint path relative to the client's base URL, an
//! ordered list of query [Param]s and an optional body. [SendApiRequest::execute] resolves the URL, sends the
//! request exactly once and decodes the response, so the endpoint functions themselves stay one-liners. Errors the
//! API reports through its JSON error envelope come back as [Error::Api]; anything else that goes wrong on the wire
//! or in decoding keeps its own error variant.

use std::borrow::Cow;

use log::{debug, error, trace, warn};
use reqwest::{header, Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{private, query::Param};
use crate::{
    error::{Error, Result},
    model::{
        album::FullAlbum,
        artist::FullArtist,
        episode::FullEpisode,
        error::ApiErrorResponse,
        page::{CursorPage, Page},
        playback::Queue,
        playlist::{FullPlaylist, SnapshotId},
        search::SearchResults,
        track::FullTrack,
        user::PrivateUser,
    },
};

/// Fallback value for a response type when the API answers with no body at all (204 No Content, or an empty 200).
///
/// Most player commands answer this way on success. Types that have a meaningful empty value override the default;
/// for everything else an empty response stays an [Error::EmptyResponse] instead of a fabricated object.
// a single blanket implementation over all response types would need specialisation; until then every type that can
// be a response opts in here or next to its definition
pub trait TryFromEmptyResponse
where
    Self: Sized,
{
    fn try_from_empty_response() -> Result<Self> {
        Err(Error::EmptyResponse)
    }
}

impl TryFromEmptyResponse for () {
    fn try_from_empty_response() -> Result<Self> {
        Ok(())
    }
}

impl<T> TryFromEmptyResponse for Option<T> {
    fn try_from_empty_response() -> Result<Self> {
        Ok(None)
    }
}

impl<T> TryFromEmptyResponse for Vec<T> {
    fn try_from_empty_response() -> Result<Self> {
        Ok(Vec::new())
    }
}

impl TryFromEmptyResponse for FullTrack {}
impl TryFromEmptyResponse for FullArtist {}
impl TryFromEmptyResponse for FullAlbum {}
impl TryFromEmptyResponse for FullEpisode {}
impl TryFromEmptyResponse for FullPlaylist {}
impl TryFromEmptyResponse for SearchResults {}
impl TryFromEmptyResponse for PrivateUser {}
impl TryFromEmptyResponse for Queue {}
impl TryFromEmptyResponse for SnapshotId {}
impl<T> TryFromEmptyResponse for Page<T> {}
impl<T> TryFromEmptyResponse for CursorPage<T> {}

/// A request body in one of the payload formats the API accepts.
#[derive(Debug)]
pub enum Body {
    /// A JSON document, sent as `application/json`.
    Json(Vec<u8>),
    /// A base64-encoded JPEG image, sent as `image/jpeg`.
    JpegBase64(String),
}

/// Everything that describes one API request.
#[derive(Debug)]
pub struct Request<'a> {
    method: Method,
    endpoint: Cow<'a, str>,
    params: &'a [Param],
    body: Option<Body>,
}

impl<'a> Request<'a> {
    pub fn new<S>(method: Method, endpoint: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Self {
            method,
            endpoint: endpoint.into(),
            params: &[],
            body: None,
        }
    }

    pub fn params(mut self, params: &'a [Param]) -> Self {
        self.params = params;
        self
    }

    pub fn json(mut self, body: Vec<u8>) -> Self {
        self.body = Some(Body::Json(body));
        self
    }

    pub fn jpeg_base64(mut self, body: String) -> Self {
        self.body = Some(Body::JpegBase64(body));
        self
    }
}

/// Parse a base URL for a client, ensuring it ends in a slash so endpoint paths join under it instead of replacing
/// its last path segment.
pub(crate) fn parse_api_base_url(url: &str) -> Result<Url> {
    let url = if url.ends_with('/') {
        Url::parse(url)?
    } else {
        Url::parse(&format!("{url}/"))?
    };

    Ok(url)
}

/// Resolve the final request URL from the client's base URL, the endpoint and its query parameters.
///
/// A query string embedded in the endpoint itself is kept as given, and the parameters are appended after it in
/// order, percent-encoded. An absolute endpoint URL (a pagination `next` URL for example) replaces the base URL
/// wholesale.
fn build_endpoint_url(base_url: &Url, endpoint: &str, params: &[Param]) -> Result<Url> {
    let mut url = base_url.join(endpoint)?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();

        for param in params {
            pairs.append_pair(param.key(), param.value());
        }
    }

    Ok(url)
}

/// Map a non-success response to the error it describes.
///
/// The API wraps its errors in a JSON envelope that echoes the status code next to a message. A non-success
/// response that doesn't carry the envelope is a decoding failure in its own right.
fn error_from_response_body(status: StatusCode, body: &[u8]) -> Error {
    warn!(
        "Got {} response: {}",
        status,
        String::from_utf8_lossy(body)
    );

    match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(response) => Error::Api {
            status: response.error.status,
            message: response.error.message,
        },

        Err(err) => {
            error!("Error response is not an API error envelope");
            Error::Decode(err)
        }
    }
}

/// Every client implements this trait. It carries the entire request pipeline as default methods on top of
/// [BuildHttpRequest](private::BuildHttpRequest), so a client only supplies its base URL and authentication.
#[async_trait::async_trait]
pub trait SendApiRequest: private::BuildHttpRequest + Sync {
    /// Send the request and decode the response body into `T`.
    async fn execute<T>(&self, request: Request<'_>) -> Result<T>
    where
        T: DeserializeOwned + TryFromEmptyResponse + Send,
    {
        let (status, body) = self.dispatch(request).await?;

        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return T::try_from_empty_response();
        }

        trace!("Response body: {}", String::from_utf8_lossy(&body));
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send the request and discard the response body without parsing it.
    async fn execute_unit(&self, request: Request<'_>) -> Result<()> {
        self.dispatch(request).await.map(|_| ())
    }

    /// Send the request once and return the response status and raw body. Non-success responses become the error
    /// they describe.
    async fn dispatch(&self, request: Request<'_>) -> Result<(StatusCode, Vec<u8>)> {
        let url = build_endpoint_url(self.api_base_url(), &request.endpoint, request.params)?;
        debug!("{} {}", request.method, url);

        let mut http_request = self.build_http_request(request.method.clone(), url);

        match request.body {
            Some(Body::Json(body)) => {
                trace!("Request body: {}", String::from_utf8_lossy(&body));
                http_request = http_request.header(header::CONTENT_TYPE, "application/json").body(body);
            }

            Some(Body::JpegBase64(body)) => {
                http_request = http_request.header(header::CONTENT_TYPE, "image/jpeg").body(body);
            }

            // the API requires empty POSTs and PUTs to carry an explicit zero Content-Length, which reqwest won't
            // add on its own for bodyless requests
            None if request.method == Method::POST || request.method == Method::PUT => {
                http_request = http_request.header(header::CONTENT_LENGTH, header::HeaderValue::from_static("0"));
            }

            None => {}
        }

        let response = http_request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if status.is_success() {
            Ok((status, body))
        } else {
            Err(error_from_response_body(status, &body))
        }
    }
}

#[async_trait::async_trait]
impl<C> SendApiRequest for C where C: private::BuildHttpRequest + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let url = parse_api_base_url("https://api.spotify.com/v1").unwrap();

        assert_eq!(url.as_str(), "https://api.spotify.com/v1/");
    }

    #[test]
    fn base_url_with_a_trailing_slash_is_kept_as_is() {
        let url = parse_api_base_url("http://localhost:8080/").unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            parse_api_base_url("definitely not an URL"),
            Err(Error::InvalidApiUrl(_))
        ));
    }

    #[test]
    fn params_are_appended_in_order_and_percent_encoded() {
        let base_url = parse_api_base_url("http://localhost:8080").unwrap();
        let params = [
            Param::custom("q", "sigur rós"),
            Param::custom("type", "artist,track"),
        ];

        let url = build_endpoint_url(&base_url, "search", &params).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/search?q=sigur+r%C3%B3s&type=artist%2Ctrack"
        );
    }

    #[test]
    fn endpoint_embedded_query_is_kept_and_params_follow_it() {
        let base_url = parse_api_base_url("http://localhost:8080").unwrap();
        let params = [Param::market("FI")];

        let url = build_endpoint_url(&base_url, "tracks?ids=a,b,c", &params).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/tracks?ids=a,b,c&market=FI");
    }

    #[test]
    fn repeated_keys_stay_repeated() {
        let base_url = parse_api_base_url("http://localhost:8080").unwrap();
        let params = [Param::custom("seed", "a"), Param::custom("seed", "b")];

        let url = build_endpoint_url(&base_url, "things", &params).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/things?seed=a&seed=b");
    }

    #[test]
    fn no_params_means_no_query_string() {
        let base_url = parse_api_base_url("http://localhost:8080").unwrap();

        let url = build_endpoint_url(&base_url, "me", &[]).unwrap();

        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "http://localhost:8080/me");
    }

    #[test]
    fn absolute_endpoint_replaces_the_base_url() {
        let base_url = parse_api_base_url("http://localhost:8080").unwrap();

        let url = build_endpoint_url(&base_url, "https://api.spotify.com/v1/me/tracks?offset=50&limit=50", &[]).unwrap();

        assert_eq!(url.as_str(), "https://api.spotify.com/v1/me/tracks?offset=50&limit=50");
    }

    #[test]
    fn endpoint_paths_join_under_the_base_url_path() {
        let base_url = parse_api_base_url("http://localhost:8080/api/v1").unwrap();

        let url = build_endpoint_url(&base_url, "albums/abc/tracks", &[]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/albums/abc/tracks");
    }
}
