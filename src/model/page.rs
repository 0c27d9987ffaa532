//! The API's pagination envelopes.
//!
//! Offset-paged listings come back as a [Page], cursor-paged ones (recently played tracks) as a [CursorPage]. Both
//! can fetch their continuation through [Page::next_page]/[CursorPage::next_page] by following the absolute `next`
//! URL the API returns.

use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    client::{
        private,
        request::{Request, SendApiRequest},
    },
    error::Result,
};

/// An offset-based page of items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// The API URL this page was (or can be) fetched from.
    pub href: String,
    pub items: Vec<T>,
    /// The maximum number of items in one page.
    pub limit: u32,
    /// The URL of the next page. `None` on the last page.
    pub next: Option<String>,
    /// The offset of this page's first item in the full listing.
    pub offset: u32,
    /// The URL of the previous page. `None` on the first page.
    pub previous: Option<String>,
    /// The total number of items in the full listing.
    pub total: u32,
}

/// A cursor-based page of items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CursorPage<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    /// The URL of the next page. `None` on the last page.
    pub next: Option<String>,
    #[serde(default)]
    pub cursors: Option<Cursors>,
    /// The API omits the total for some cursor-paged listings.
    #[serde(default)]
    pub total: Option<u32>,
}

/// The cursors pointing around a [CursorPage].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Cursors {
    pub after: Option<String>,
    pub before: Option<String>,
}

impl<T> Page<T>
where
    T: DeserializeOwned + Send,
{
    /// Fetch the next page of this listing, or `None` if this is the last page.
    ///
    /// The `next` URL the API returns is absolute, so this bypasses the client's base URL.
    pub async fn next_page<C>(&self, client: &C) -> Result<Option<Page<T>>>
    where
        C: private::BuildHttpRequest + Sync,
    {
        match self.next.as_deref() {
            Some(next) => client.execute(Request::new(Method::GET, next.to_owned())).await.map(Some),
            None => Ok(None),
        }
    }
}

impl<T> CursorPage<T>
where
    T: DeserializeOwned + Send,
{
    /// Fetch the next page of this listing, or `None` if this is the last page.
    pub async fn next_page<C>(&self, client: &C) -> Result<Option<CursorPage<T>>>
    where
        C: private::BuildHttpRequest + Sync,
    {
        match self.next.as_deref() {
            Some(next) => client.execute(Request::new(Method::GET, next.to_owned())).await.map(Some),
            None => Ok(None),
        }
    }
}
