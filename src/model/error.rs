//! Wire formats for the API's and the accounts service's error responses.

use serde::Deserialize;

use crate::error::Error;

/// The error envelope the API wraps around every failed request: a top-level `error` key carrying a status and a
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ApiErrorDetails {
    pub status: u16,
    pub message: String,
}

/// An error response from the accounts service's token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct AuthenticationErrorResponse {
    pub error: AuthenticationErrorKind,
    #[serde(default)]
    pub error_description: String,
}

/// The kinds of errors the accounts service reports, as defined by OAuth 2.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum AuthenticationErrorKind {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnauthorizedClient,
    UnsupportedGrantType,
    InvalidScope,

    /// A kind this library does not know about.
    #[serde(other)]
    Unknown,
}

impl AuthenticationErrorResponse {
    pub fn into_unhandled_error(self) -> Error {
        Error::UnhandledAuthenticationError(self.error, self.error_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_parses_status_and_message() {
        let body = r#"{"error":{"status":404,"message":"not found"}}"#;
        let response: ApiErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.error.status, 404);
        assert_eq!(response.error.message, "not found");
    }

    #[test]
    fn authentication_error_kinds_parse_from_snake_case() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid refresh token"}"#;
        let response: AuthenticationErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.error, AuthenticationErrorKind::InvalidGrant);
        assert_eq!(response.error_description, "Invalid refresh token");
    }

    #[test]
    fn unknown_authentication_error_kind_falls_back() {
        let body = r#"{"error":"brand_new_kind"}"#;
        let response: AuthenticationErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.error, AuthenticationErrorKind::Unknown);
        assert_eq!(response.error_description, "");
    }
}
