//! Everything that can go wrong when talking to Spotify.
//!
//! The crate uses a single error enum, [Error]. All fallible functions return [Result] with it as the error type.
//! Failures are always surfaced as return values; nothing is retried or recovered internally.

use thiserror::Error;

use crate::model::{error::AuthenticationErrorKind, ItemType};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The API responded with an error object. The status and message are taken from the response body, not from the
    /// HTTP status line.
    #[error("Spotify API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A response body could not be parsed into the expected shape. This is distinct from [Api](Self::Api): the
    /// server did not report a structured failure, we just couldn't understand what it sent.
    #[error("Failed to decode response body")]
    Decode(#[from] serde_json::Error),

    /// The API responded with 204 No Content to a call that expected a response body.
    #[error("Received an empty response where a response body was expected")]
    EmptyResponse,

    /// A polymorphic item object carries no `type` field to select a shape with.
    #[error("Item object contains no type field")]
    MissingItemType,

    /// A polymorphic item object carries a `type` value outside the known set (artist, track, episode).
    #[error("Unsupported item type: {0}")]
    UnsupportedItemType(String),

    /// A polymorphic item object matched a known `type` but its fields do not decode into that shape.
    #[error("Malformed {0} object in response")]
    MalformedItem(ItemType, #[source] serde_json::Error),

    /// An API URL could not be built. Either the configured base URL is invalid, or an endpoint path could not be
    /// resolved against it.
    #[error("Invalid API URL")]
    InvalidApiUrl(#[from] url::ParseError),

    /// The state parameter returned from the user authorization does not match the one the authorization URL was
    /// built with.
    #[error("The given state does not match the original state")]
    AuthorizationCodeStateMismatch,

    /// The authorization code is invalid.
    #[error("The authorization code is invalid")]
    InvalidAuthorizationCode,

    /// The refresh token is invalid; it has likely been revoked. The user should be reauthorized.
    #[error("The refresh token is invalid: {0}. The user should be reauthorized")]
    InvalidRefreshToken(String),

    /// The application client ID or secret is wrong.
    #[error("Invalid client ID or secret")]
    InvalidClient,

    /// The accounts service responded with an authentication error the library has no specific handling for.
    #[error("Unhandled authentication error: {0:?}: {1}")]
    UnhandledAuthenticationError(AuthenticationErrorKind, String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
