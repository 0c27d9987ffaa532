//! An asynchronous client for the Spotify Web API.
//!
//! Every endpoint is a typed function on one of two client traits. [UnscopedClient](client::UnscopedClient) covers
//! the endpoints that read the public catalog, [ScopedClient](client::ScopedClient) the ones that touch a certain
//! user's account and require them to have granted the matching [authorization scopes](scope::Scope). Which traits a
//! client implements follows from how it authenticates; see the [client] module for the different clients and how to
//! build them.
//!
//! # Example
//!
//! Retrieve an access token with the client credentials flow and look up a track:
//!
//! ```no_run
//! # async fn example() -> Result<(), tonearm::Error> {
//! use tonearm::client::{SpotifyClientBuilder, UnscopedClient};
//!
//! let spotify_client = SpotifyClientBuilder::new("client-id")
//!     .client_secret("client-secret")
//!     .build()
//!     .await?;
//!
//! let track = spotify_client.track("0QZHsQzk4IsocIAPlAwirY", &[]).await?;
//!
//! println!("{} - {}", track.artists[0].name, track.name);
//! # Ok(())
//! # }
//! ```
//!
//! Accessing a user's account goes through the authorization code flow; the [client] module documentation walks
//! through it.
//!
//! # Query parameters
//!
//! Endpoints that accept optional query parameters take a slice of [Param](client::Param)s. The parameters are
//! appended to the request URL in the order they are given, so the caller stays in control of the exact query
//! string. Endpoints that accept multiple IDs take them as a slice and join them with commas the way the API
//! expects.
//!
//! # TLS
//!
//! The `native-tls` feature is enabled by default, which uses the system TLS library through reqwest. The
//! `rustls-tls` feature uses rustls instead. One of the two must be enabled.

pub mod client;
pub mod error;
pub mod model;
pub mod scope;

mod util;

pub use crate::{
    error::{Error, Result},
    scope::Scope,
};
