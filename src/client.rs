//! The API clients and the endpoint traits they implement.
//!
//! There are three kinds of clients, separated by how they authenticate:
//!
//! - [SpotifyClientWithSecret] authenticates with the application's client ID and secret through the client
//!   credentials flow. It can access all [unscoped endpoints](UnscopedClient), and it is the starting point for
//!   user authorization.
//! - [AuthorizationCodeUserClient] acts on a certain user's behalf through the authorization code flow. It can
//!   access all [unscoped](UnscopedClient) and [scoped endpoints](ScopedClient) and refreshes its own access token
//!   with the refresh token it holds. The flow starts from
//!   [authorization_code_client](SpotifyClientWithSecret::authorization_code_client) and is walked through in
//!   [IncompleteAuthorizationCodeUserClient].
//! - [AccessTokenClient] wraps an access token acquired somewhere outside the crate. It can access all endpoints,
//!   with the scoped ones succeeding only as far as the token's scopes reach, but it cannot refresh the token.
//!
//! All clients start from [SpotifyClientBuilder], except [AccessTokenClient] which has its own
//! [AccessTokenClientBuilder]. The clients are cheap to clone and the clones share their access token storage, so
//! one client can be reused across tasks freely.
//!
//! Every endpoint the clients expose takes its optional query parameters as an ordered slice of [Param]s and the
//! clients send them exactly as given. The endpoints that write JSON describe their payloads with [Properties].

pub(crate) mod authorization_code;
pub(crate) mod body;
pub(crate) mod query;
pub(crate) mod request;
pub(crate) mod scoped;
pub(crate) mod unscoped;

pub(crate) mod private {
    use reqwest::{Method, RequestBuilder, Url};

    pub trait Sealed {}

    /// Every client implements this trait.
    pub trait BuildHttpRequest: Sealed {
        /// The base URL all endpoint paths are resolved against.
        fn api_base_url(&self) -> &Url;

        /// Returns a new [RequestBuilder](reqwest::RequestBuilder) for the given method and URL, with the client's
        /// authentication filled in.
        fn build_http_request(&self, method: Method, url: Url) -> RequestBuilder;
    }
}

pub use self::{
    authorization_code::{
        AuthorizationCodeUserClient, AuthorizationCodeUserClientBuilder, IncompleteAuthorizationCodeUserClient,
    },
    body::Properties,
    query::Param,
    scoped::ScopedClient,
    unscoped::UnscopedClient,
};

use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use async_trait::async_trait;
use base64::Engine;
use const_format::concatcp;
use log::debug;
use reqwest::{header, Client as AsyncClient, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;

use self::request::parse_api_base_url;
use crate::{
    error::{Error, Result},
    model::error::{AuthenticationErrorKind, AuthenticationErrorResponse},
};

const RANDOM_STATE_LENGTH: usize = 16;

/// The default base URL for the API.
const API_BASE_URL: &str = "https://api.spotify.com/v1/";

const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com/";
const ACCOUNTS_AUTHORIZE_ENDPOINT: &str = concatcp!(ACCOUNTS_BASE_URL, "authorize");
const ACCOUNTS_API_TOKEN_ENDPOINT: &str = concatcp!(ACCOUNTS_BASE_URL, "api/token");

/// Clients that have automatically refreshable access tokens implement this trait.
///
/// These are [SpotifyClientWithSecret] and [AuthorizationCodeUserClient]. Note that [AccessTokenClient] does *not*
/// implement this trait: it wraps an access token acquired outside the crate, which it has no means of refreshing.
#[async_trait]
pub trait AccessTokenRefresh: private::Sealed {
    /// Request a new access token from the accounts service and save it internally in the client.
    async fn refresh_access_token(&self) -> Result<()>;
}

/// A client that has authenticated itself with the application's client ID and secret through the client
/// credentials flow.
///
/// Implements all the [unscoped endpoints](UnscopedClient). Since the client credentials flow carries no user
/// approval, the [scoped endpoints](ScopedClient) require an [AuthorizationCodeUserClient], which may be built
/// through [authorization_code_client](Self::authorization_code_client).
///
/// This client uses `Arc` and interior mutability internally, so you do not need to wrap it in an `Arc` or a
/// `Mutex` in order to reuse it.
#[derive(Debug, Clone)]
pub struct SpotifyClientWithSecret {
    inner: Arc<SpotifyClientWithSecretRef>,
    http_client: AsyncClient,
}

#[derive(Debug)]
struct SpotifyClientWithSecretRef {
    client_id: String,
    api_base_url: Url,
    access_token: RwLock<String>,
}

/// A client that uses an access token acquired from outside the crate.
///
/// Implements all the [unscoped](UnscopedClient) and [scoped endpoints](ScopedClient); the scoped ones succeed only
/// if the token actually carries the required scopes. The token cannot be refreshed, so once it expires the client
/// stops working.
#[derive(Debug, Clone)]
pub struct AccessTokenClient {
    inner: Arc<AccessTokenClientRef>,
    http_client: AsyncClient,
}

#[derive(Debug)]
struct AccessTokenClientRef {
    api_base_url: Url,
    access_token: String,
}

/// Builder for the clients in this module. Start here.
#[derive(Debug, Clone)]
pub struct SpotifyClientBuilder {
    client_id: String,
}

/// Builder for [SpotifyClientWithSecret].
#[derive(Debug, Clone)]
pub struct ClientSecretSpotifyClientBuilder {
    client_id: String,
    client_secret: String,
    api_base_url: Option<String>,
    timeout: Option<Duration>,
}

/// Builder for [AccessTokenClient].
#[derive(Debug, Clone)]
pub struct AccessTokenClientBuilder {
    access_token: String,
    api_base_url: Option<String>,
    timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct ClientTokenResponse {
    access_token: String,

    // these fields are in the response but the crate doesn't need them. keep them around for logging purposes
    #[allow(dead_code)]
    token_type: String,
    #[allow(dead_code)]
    expires_in: u32,
}

impl SpotifyClientWithSecret {
    /// Begin building an [AuthorizationCodeUserClient] for accessing the [scoped endpoints](ScopedClient) on a
    /// user's behalf.
    ///
    /// The redirect URI must match one of the callback URIs specified in your application settings.
    pub fn authorization_code_client<S>(&self, redirect_uri: S) -> AuthorizationCodeUserClientBuilder
    where
        S: Into<String>,
    {
        AuthorizationCodeUserClientBuilder::new(
            redirect_uri.into(),
            self.inner.client_id.clone(),
            self.inner.api_base_url.clone(),
            self.http_client.clone(),
        )
    }

    /// Build an [AuthorizationCodeUserClient] from a refresh token saved from an earlier authorization code flow
    /// session, skipping the user approval step.
    ///
    /// The client will use the refresh token to request a new access token before it is returned.
    pub async fn authorization_code_client_with_refresh_token<S>(
        &self,
        refresh_token: S,
    ) -> Result<AuthorizationCodeUserClient>
    where
        S: Into<String>,
    {
        AuthorizationCodeUserClient::new_with_refresh_token(
            self.http_client.clone(),
            self.inner.api_base_url.clone(),
            refresh_token.into(),
        )
        .await
    }
}

impl SpotifyClientBuilder {
    pub fn new<S>(client_id: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            client_id: client_id.into(),
        }
    }

    /// Supply the application's client secret, allowing the builder to authenticate through the client credentials
    /// flow.
    pub fn client_secret<S>(self, client_secret: S) -> ClientSecretSpotifyClientBuilder
    where
        S: Into<String>,
    {
        ClientSecretSpotifyClientBuilder {
            client_id: self.client_id,
            client_secret: client_secret.into(),
            api_base_url: None,
            timeout: None,
        }
    }
}

impl ClientSecretSpotifyClientBuilder {
    /// Use a base URL other than the default one for the API requests. Every endpoint path this client and the
    /// clients derived from it use is resolved against this URL.
    pub fn api_base_url<S>(self, api_base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            api_base_url: Some(api_base_url.into()),
            ..self
        }
    }

    /// Set a timeout for the HTTP requests. By default no timeout is applied.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    fn get_async_http_client(&self) -> AsyncClient {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&build_authorization_header(&self.client_id, &self.client_secret))
                // this can only fail if the header value contains non-ASCII characters, which cannot happen since
                // the given header value is in base64
                .expect("failed to insert authorization header into header map"),
        );

        let mut http_client = AsyncClient::builder().default_headers(default_headers);

        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }

        // this can only fail due to a system error, or if called within an async runtime. we cannot detect the
        // latter, so it's up to the library user to be careful about it
        http_client.build().expect("failed to build HTTP client")
    }

    /// Request an access token through the client credentials flow and return a usable
    /// [SpotifyClientWithSecret].
    pub async fn build(self) -> Result<SpotifyClientWithSecret> {
        let api_base_url = parse_api_base_url(self.api_base_url.as_deref().unwrap_or(API_BASE_URL))?;

        debug!("Requesting access token for client credentials flow");
        let token_request_form = &[("grant_type", "client_credentials")];

        let http_client = self.get_async_http_client();
        let response = http_client
            .post(ACCOUNTS_API_TOKEN_ENDPOINT)
            .form(token_request_form)
            .send()
            .await?;

        let response = extract_authentication_error(response).await.map_err(|err| {
            if let Error::UnhandledAuthenticationError(AuthenticationErrorKind::InvalidClient, _) = err {
                Error::InvalidClient
            } else {
                err
            }
        })?;

        let token_response: ClientTokenResponse = response.json().await?;
        debug!("Got token response for client credentials flow: {:?}", token_response);

        Ok(SpotifyClientWithSecret {
            inner: Arc::new(SpotifyClientWithSecretRef {
                client_id: self.client_id,
                api_base_url,
                access_token: RwLock::new(token_response.access_token),
            }),
            http_client,
        })
    }
}

impl AccessTokenClient {
    /// Return a new client that uses the given access token against the default API base URL.
    pub fn new<S>(access_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            inner: Arc::new(AccessTokenClientRef {
                api_base_url: parse_api_base_url(API_BASE_URL)
                    .expect("failed to parse the default API base URL (this is likely a bug)"),
                access_token: access_token.into(),
            }),
            http_client: AsyncClient::new(),
        }
    }
}

impl AccessTokenClientBuilder {
    pub fn new<S>(access_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            access_token: access_token.into(),
            api_base_url: None,
            timeout: None,
        }
    }

    /// Use a base URL other than the default one for the API requests.
    pub fn api_base_url<S>(self, api_base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            api_base_url: Some(api_base_url.into()),
            ..self
        }
    }

    /// Set a timeout for the HTTP requests. By default no timeout is applied.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    pub fn build(self) -> Result<AccessTokenClient> {
        let api_base_url = parse_api_base_url(self.api_base_url.as_deref().unwrap_or(API_BASE_URL))?;

        let mut http_client = AsyncClient::builder();

        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }

        Ok(AccessTokenClient {
            inner: Arc::new(AccessTokenClientRef {
                api_base_url,
                access_token: self.access_token,
            }),
            // this can only fail due to a system error, or if called within an async runtime. we cannot detect the
            // latter, so it's up to the library user to be careful about it
            http_client: http_client.build().expect("failed to build HTTP client"),
        })
    }
}

impl private::Sealed for SpotifyClientWithSecret {}
impl private::Sealed for AccessTokenClient {}

impl private::BuildHttpRequest for SpotifyClientWithSecret {
    fn api_base_url(&self) -> &Url {
        &self.inner.api_base_url
    }

    fn build_http_request(&self, method: Method, url: Url) -> RequestBuilder {
        let access_token = self.inner.access_token.read().expect("access token rwlock poisoned");
        self.http_client.request(method, url).bearer_auth(access_token.as_str())
    }
}

impl private::BuildHttpRequest for AccessTokenClient {
    fn api_base_url(&self) -> &Url {
        &self.inner.api_base_url
    }

    fn build_http_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .bearer_auth(&self.inner.access_token)
    }
}

#[async_trait]
impl AccessTokenRefresh for SpotifyClientWithSecret {
    async fn refresh_access_token(&self) -> Result<()> {
        debug!("Refreshing access token for client credentials flow");
        let token_request_form = &[("grant_type", "client_credentials")];

        let response = self
            .http_client
            .post(ACCOUNTS_API_TOKEN_ENDPOINT)
            .form(token_request_form)
            .send()
            .await?;

        let response = extract_authentication_error(response).await.map_err(|err| {
            if let Error::UnhandledAuthenticationError(AuthenticationErrorKind::InvalidGrant, description) = err {
                Error::InvalidRefreshToken(description)
            } else {
                err
            }
        })?;

        let token_response: ClientTokenResponse = response.json().await?;
        debug!("Got token response for client credentials flow: {:?}", token_response);

        *self.inner.access_token.write().expect("access token rwlock poisoned") = token_response.access_token;

        Ok(())
    }
}

#[async_trait]
impl UnscopedClient for SpotifyClientWithSecret {}

#[async_trait]
impl UnscopedClient for AccessTokenClient {}

#[async_trait]
impl ScopedClient for AccessTokenClient {}

fn build_authorization_header(client_id: &str, client_secret: &str) -> String {
    let auth = format!("{client_id}:{client_secret}");
    format!("Basic {}", base64::engine::general_purpose::STANDARD.encode(auth))
}

/// Takes a response for an authentication request and if its status is 400, parses its body as an authentication
/// error. On success returns the given response without modifying it.
async fn extract_authentication_error(response: reqwest::Response) -> Result<reqwest::Response> {
    if let StatusCode::BAD_REQUEST = response.status() {
        let error_response: AuthenticationErrorResponse = response.json().await?;
        Err(error_response.into_unhandled_error())
    } else {
        Ok(response)
    }
}
