//! User objects.

use serde::Deserialize;

use super::{ExternalUrls, Followers, Image};

/// Public information about a user. This is also the shape of playlist owners and playlist item adders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicUser {
    /// The user's display name, when they have set one.
    pub display_name: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    pub href: String,
    pub id: String,
    /// The user's profile images.
    #[serde(default)]
    pub images: Vec<Image>,
    pub uri: String,
}

/// The current user's profile. The private fields are filled in only when the client has the corresponding scope:
/// [UserReadPrivate](crate::scope::Scope::UserReadPrivate) for the country, explicit content settings and product,
/// [UserReadEmail](crate::scope::Scope::UserReadEmail) for the email address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrivateUser {
    /// The user's country as an ISO 3166-1 alpha-2 code.
    pub country: Option<String>,
    pub display_name: Option<String>,
    /// The user's email address, as they entered it. The API does not verify it.
    pub email: Option<String>,
    pub explicit_content: Option<ExplicitContent>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub images: Vec<Image>,
    /// The user's subscription level, like `premium` or `free`.
    pub product: Option<String>,
    pub uri: String,
}

/// The user's explicit content settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExplicitContent {
    /// Whether explicit content should not be played.
    pub filter_enabled: bool,
    /// Whether the setting is locked so the user can't change it.
    pub filter_locked: bool,
}
