//! Contains the [AuthorizationCodeUserClient] and its builder structs. The client implements the authorization
//! code flow, which is how an application accesses the API on a specific user's behalf.
//!
//! [Spotify documentation on the authorization code flow.](https://developer.spotify.com/documentation/general/guides/authorization/code-flow/)
//!
//! # Usage
//!
//! A new [AuthorizationCodeUserClient] may be built with the
//! [`authorization_code_client`-function](crate::client::SpotifyClientWithSecret::authorization_code_client) in
//! [SpotifyClientWithSecret](crate::client::SpotifyClientWithSecret).
//!
//! ```no_run
//! # use tonearm::client::SpotifyClientBuilder;
//! # use tonearm::scope::Scope;
//! # async fn foo() {
//! let spotify_client = SpotifyClientBuilder::new("application client ID")
//!     .client_secret("application client secret")
//!     .build()
//!     .await
//!     .expect("failed to build Spotify client");
//!
//! // begin building a new AuthorizationCodeUserClient. the redirect URI
//! // should match one of the callback URIs specified in your Spotify
//! // application
//! let incomplete_auth_code_client = spotify_client
//!     .authorization_code_client("http://localhost/callback")
//!     // specify any (or none) of the scopes you require access to
//!     .scopes([Scope::UserReadPlaybackState])
//!     .build();
//!
//! // at this point the client is configured but not yet usable; it is still
//! // missing the user's authorization
//!
//! // direct the user to this URL in some manner. there they are prompted to
//! // give the application access to their account with the scopes asked for
//! let authorize_url = incomplete_auth_code_client.get_authorize_url();
//!
//! // once the user approves, they are redirected to the callback URI with an
//! // authorization code (`code`) and a state code (`state`) in the URL query.
//! // extracting them from the redirect is up to the application
//! # let code = "";
//! # let state = "";
//!
//! // finalizing the client exchanges the authorization code for an access
//! // token and a refresh token
//! let user_client = incomplete_auth_code_client
//!     .finalize(code, state)
//!     .await
//!     .expect("failed to finalize authorization code flow client");
//! # }
//! ```

use std::sync::{Arc, RwLock};

use log::debug;
use rand::{distributions::Alphanumeric, Rng};
use reqwest::{Client as AsyncClient, Method, RequestBuilder, Url};
use serde::Deserialize;

use super::{private, ACCOUNTS_API_TOKEN_ENDPOINT, ACCOUNTS_AUTHORIZE_ENDPOINT, RANDOM_STATE_LENGTH};
use crate::{
    error::{Error, Result},
    model::error::AuthenticationErrorKind,
    scope::ToScopesString,
};

/// A client that implements the authorization code flow to authenticate a user with Spotify. See the [module-level
/// documentation](self) for more information.
///
/// Implements all the [scoped](crate::client::ScopedClient) and [unscoped
/// endpoints](crate::client::UnscopedClient).
///
/// This client uses `Arc` and interior mutability internally, so you do not need to wrap it in an `Arc` or a
/// `Mutex` in order to reuse it.
#[derive(Debug, Clone)]
pub struct AuthorizationCodeUserClient {
    inner: Arc<AuthorizationCodeUserClientRef>,
    http_client: AsyncClient,
}

#[derive(Debug)]
struct AuthorizationCodeUserClientRef {
    api_base_url: Url,
    access_token: RwLock<String>,
    refresh_token: RwLock<String>,
}

/// An incomplete authorization code user client.
///
/// The client has been configured, and it has to be [finalized](IncompleteAuthorizationCodeUserClient::finalize) by
/// directing the user to the [authorize URL](IncompleteAuthorizationCodeUserClient::get_authorize_url) and
/// retrieving an authorization code and a state parameter from the redirect callback URL.
#[derive(Debug)]
pub struct IncompleteAuthorizationCodeUserClient {
    client_id: String,
    redirect_uri: String,
    state: String,
    scopes: Option<String>,
    show_dialog: bool,
    api_base_url: Url,

    http_client: AsyncClient,
}

/// Builder for [AuthorizationCodeUserClient].
#[derive(Debug)]
pub struct AuthorizationCodeUserClientBuilder {
    client_id: String,
    redirect_uri: String,
    scopes: Option<String>,
    show_dialog: bool,
    api_base_url: Url,

    http_client: AsyncClient,
}

#[derive(Debug, Deserialize)]
struct AuthorizeUserTokenResponse {
    access_token: String,
    refresh_token: String,

    // these fields are in the response but the crate doesn't need them. keep them around for logging purposes
    #[allow(dead_code)]
    scope: Option<String>,
    #[allow(dead_code)]
    expires_in: u32,
    #[allow(dead_code)]
    token_type: String,
}

#[derive(Debug, Deserialize)]
struct RefreshUserTokenResponse {
    access_token: String,
    refresh_token: Option<String>,

    #[allow(dead_code)]
    scope: Option<String>,
    #[allow(dead_code)]
    expires_in: u32,
    #[allow(dead_code)]
    token_type: String,
}

impl AuthorizationCodeUserClient {
    pub(crate) async fn new_with_refresh_token(
        http_client: AsyncClient,
        api_base_url: Url,
        refresh_token: String,
    ) -> Result<Self> {
        debug!("Attempting to create a new authorization code flow client from an existing refresh token");

        let response = http_client
            .post(ACCOUNTS_API_TOKEN_ENDPOINT)
            .form(&build_refresh_token_request_form(&refresh_token))
            .send()
            .await?;

        let response = super::extract_authentication_error(response)
            .await
            .map_err(map_refresh_token_error)?;

        let token_response: RefreshUserTokenResponse = response.json().await?;
        debug!(
            "Got token response for refreshing authorization code flow tokens: {:?}",
            token_response
        );

        let refresh_token = token_response.refresh_token.unwrap_or(refresh_token);

        Ok(Self {
            inner: Arc::new(AuthorizationCodeUserClientRef {
                api_base_url,
                access_token: RwLock::new(token_response.access_token),
                refresh_token: RwLock::new(refresh_token),
            }),
            http_client,
        })
    }

    /// Returns the current refresh token.
    ///
    /// The refresh token may be saved and reused later when creating a new client with the
    /// [`authorization_code_client_with_refresh_token`-function](crate::client::SpotifyClientWithSecret::authorization_code_client_with_refresh_token).
    ///
    /// This function returns an owned String by cloning the internal refresh token.
    pub fn get_refresh_token(&self) -> String {
        self.inner
            .refresh_token
            .read()
            .expect("refresh token rwlock poisoned")
            .to_owned()
    }

    fn update_access_and_refresh_tokens(&self, token_response: RefreshUserTokenResponse) {
        debug!(
            "Got token response for refreshing authorization code flow tokens: {:?}",
            token_response
        );

        *self.inner.access_token.write().expect("access token rwlock poisoned") = token_response.access_token;

        if let Some(refresh_token) = token_response.refresh_token {
            *self.inner.refresh_token.write().expect("refresh token rwlock poisoned") = refresh_token;
        }
    }
}

impl IncompleteAuthorizationCodeUserClient {
    /// Returns an authorization URL the user should be directed to in some manner.
    ///
    /// Once the user approves the application, they are redirected back to the application's callback URL. The URL
    /// query in the callback will contain a `code` parameter and a `state` parameter, which should be passed to the
    /// [`finalize`-function](IncompleteAuthorizationCodeUserClient::finalize) in order to complete the client and
    /// get an [AuthorizationCodeUserClient].
    pub fn get_authorize_url(&self) -> String {
        let mut query_params = vec![
            ("response_type", "code"),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("state", self.state.as_str()),
            ("show_dialog", if self.show_dialog { "true" } else { "false" }),
        ];

        if let Some(scopes) = &self.scopes {
            query_params.push(("scope", scopes.as_str()));
        }

        // parsing the URL fails only if the base URL is invalid, not the parameters
        let authorize_url = Url::parse_with_params(ACCOUNTS_AUTHORIZE_ENDPOINT, &query_params)
            .expect("failed to build authorize URL: invalid base URL (this is likely a bug)");

        authorize_url.into()
    }

    /// Finalize this client with a code and a state from the callback URL query the user was redirected to after
    /// they approved the application, and return a usable [AuthorizationCodeUserClient].
    ///
    /// This function will use the authorization code to request an access and a refresh token from Spotify. If the
    /// originally generated state does not match the `state` parameter, the function will return an
    /// [AuthorizationCodeStateMismatch-error](Error::AuthorizationCodeStateMismatch).
    pub async fn finalize(self, code: &str, state: &str) -> Result<AuthorizationCodeUserClient> {
        debug!("Attempting to finalize authorization code flow user client");

        if state != self.state {
            return Err(Error::AuthorizationCodeStateMismatch);
        }

        let token_request_form = &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(ACCOUNTS_API_TOKEN_ENDPOINT)
            .form(token_request_form)
            .send()
            .await?;

        let response = super::extract_authentication_error(response)
            .await
            .map_err(map_authentication_error)?;

        let token_response: AuthorizeUserTokenResponse = response.json().await?;
        debug!("Got token response for authorization code flow: {:?}", token_response);

        Ok(AuthorizationCodeUserClient {
            inner: Arc::new(AuthorizationCodeUserClientRef {
                api_base_url: self.api_base_url,
                access_token: RwLock::new(token_response.access_token),
                refresh_token: RwLock::new(token_response.refresh_token),
            }),
            http_client: self.http_client,
        })
    }
}

impl AuthorizationCodeUserClientBuilder {
    pub(super) fn new(redirect_uri: String, client_id: String, api_base_url: Url, http_client: AsyncClient) -> Self {
        Self {
            client_id,
            redirect_uri,
            scopes: None,
            show_dialog: false,
            api_base_url,

            http_client,
        }
    }

    /// Specify the [OAuth authorization scopes](crate::scope::Scope) that the user is asked to grant for the
    /// application.
    pub fn scopes<T>(self, scopes: T) -> Self
    where
        T: ToScopesString,
    {
        Self {
            scopes: Some(scopes.to_scopes_string()),
            ..self
        }
    }

    /// Set whether or not to force the user to approve the application again, if they've already done so.
    ///
    /// If false (default), a user who has already approved the application is automatically redirected to the
    /// specified redirect URL. If true, the user will not be automatically redirected and will have to approve the
    /// application again.
    pub fn show_dialog(self, show_dialog: bool) -> Self {
        Self { show_dialog, ..self }
    }

    /// Finalize the builder and return an [IncompleteAuthorizationCodeUserClient].
    pub fn build(self) -> IncompleteAuthorizationCodeUserClient {
        let state = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_STATE_LENGTH)
            .map(char::from)
            .collect();

        IncompleteAuthorizationCodeUserClient {
            redirect_uri: self.redirect_uri,
            state,
            scopes: self.scopes,
            show_dialog: self.show_dialog,
            client_id: self.client_id,
            api_base_url: self.api_base_url,

            http_client: self.http_client,
        }
    }
}

impl private::Sealed for AuthorizationCodeUserClient {}

impl private::BuildHttpRequest for AuthorizationCodeUserClient {
    fn api_base_url(&self) -> &Url {
        &self.inner.api_base_url
    }

    fn build_http_request(&self, method: Method, url: Url) -> RequestBuilder {
        let access_token = self.inner.access_token.read().expect("access token rwlock poisoned");
        self.http_client.request(method, url).bearer_auth(access_token.as_str())
    }
}

#[async_trait::async_trait]
impl super::UnscopedClient for AuthorizationCodeUserClient {}

#[async_trait::async_trait]
impl super::ScopedClient for AuthorizationCodeUserClient {}

#[async_trait::async_trait]
impl super::AccessTokenRefresh for AuthorizationCodeUserClient {
    async fn refresh_access_token(&self) -> Result<()> {
        // build and send the request this way so the non-async RwLockReadGuard isn't held across an await point
        let response = {
            let refresh_token = self.inner.refresh_token.read().expect("refresh token rwlock poisoned");
            debug!("Attempting to refresh authorization code flow access token");

            let request = self
                .http_client
                .post(ACCOUNTS_API_TOKEN_ENDPOINT)
                .form(&build_refresh_token_request_form(&refresh_token))
                .send();

            // the read guard must be explicitly dropped here or it is kept across the await
            drop(refresh_token);
            request
        }
        .await?;

        let response = super::extract_authentication_error(response)
            .await
            .map_err(map_refresh_token_error)?;

        let token_response = response.json().await?;
        self.update_access_and_refresh_tokens(token_response);

        Ok(())
    }
}

fn build_refresh_token_request_form(refresh_token: &str) -> Vec<(&str, &str)> {
    vec![("grant_type", "refresh_token"), ("refresh_token", refresh_token)]
}

fn map_authentication_error(err: Error) -> Error {
    if let Error::UnhandledAuthenticationError(AuthenticationErrorKind::InvalidGrant, _) = err {
        Error::InvalidAuthorizationCode
    } else {
        err
    }
}

fn map_refresh_token_error(err: Error) -> Error {
    if let Error::UnhandledAuthenticationError(AuthenticationErrorKind::InvalidGrant, description) = err {
        Error::InvalidRefreshToken(description)
    } else {
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incomplete_client(scopes: Option<String>, show_dialog: bool) -> IncompleteAuthorizationCodeUserClient {
        IncompleteAuthorizationCodeUserClient {
            client_id: "client".to_owned(),
            redirect_uri: "http://localhost/callback".to_owned(),
            state: "teststate1234567".to_owned(),
            scopes,
            show_dialog,
            api_base_url: Url::parse(super::super::API_BASE_URL).unwrap(),
            http_client: AsyncClient::new(),
        }
    }

    #[test]
    fn authorize_url_contains_the_configured_parameters() {
        let client = incomplete_client(Some("user-read-playback-state user-top-read".to_owned()), true);

        let url = Url::parse(&client.get_authorize_url()).unwrap();
        let pairs: Vec<_> = url.query_pairs().collect();

        assert_eq!(url.host_str(), Some("accounts.spotify.com"));
        assert_eq!(url.path(), "/authorize");
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("redirect_uri".into(), "http://localhost/callback".into())));
        assert!(pairs.contains(&("client_id".into(), "client".into())));
        assert!(pairs.contains(&("state".into(), "teststate1234567".into())));
        assert!(pairs.contains(&("show_dialog".into(), "true".into())));
        assert!(pairs.contains(&("scope".into(), "user-read-playback-state user-top-read".into())));
    }

    #[test]
    fn authorize_url_omits_the_scope_parameter_when_no_scopes_are_asked_for() {
        let client = incomplete_client(None, false);

        let url = Url::parse(&client.get_authorize_url()).unwrap();

        assert!(url.query_pairs().all(|(key, _)| key != "scope"));
    }

    #[tokio::test]
    async fn finalizing_with_a_wrong_state_is_rejected() {
        let client = incomplete_client(None, false);

        let result = client.finalize("authcode", "some other state").await;

        assert!(matches!(result, Err(Error::AuthorizationCodeStateMismatch)));
    }
}
