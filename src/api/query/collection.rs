//! Accumulated collection results and the partial-failure error.

use crate::error::Error;
use crate::response::ResponseMeta;

use super::pages::ResourcePage;

/// The accumulated result of a fetch chain.
///
/// Holds every item from the pages consumed so far, the metadata of the
/// most recent page, and the number of pages fetched.
///
/// # Example
///
/// ```ignore
/// let users = client.app_users("0oa1gjh63g214q0Hq0g4", &options).await?;
/// for user in users {
///     println!("{}", user.id);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceCollection<T> {
    items: Vec<T>,
    meta: ResponseMeta,
    pages: u32,
}

impl<T> Default for ResourceCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: ResponseMeta::default(),
            pages: 0,
        }
    }
}

impl<T> ResourceCollection<T> {
    /// Absorbs one fetched page: appends its items and replaces the
    /// collection's metadata with the page's.
    pub(crate) fn push_page(&mut self, page: ResourcePage<T>) {
        let (items, meta) = page.into_parts();
        self.items.extend(items);
        self.meta = meta;
        self.pages += 1;
    }

    /// Returns the collected items in page order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the collection and returns the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Metadata of the last page fetched.
    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    /// The continuation cursor left unconsumed by the chain, if any.
    ///
    /// Present when the chain stopped at a page bound while the server
    /// still advertised a further page.
    pub fn next_link(&self) -> Option<&url::Url> {
        self.meta.next()
    }

    /// Number of pages consumed so far.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Total number of items across all consumed pages.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items were collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A fetch chain that failed partway through.
///
/// Carries the collection accumulated through the last successful page
/// (empty when the very first page failed) alongside the error that
/// stopped the chain, so callers can consume partial data best-effort.
#[derive(Debug, thiserror::Error)]
#[error("fetch chain stopped after {} page(s): {source}", .partial.pages())]
pub struct FetchError<T> {
    /// Pages accumulated before the failure.
    pub partial: ResourceCollection<T>,
    /// The failure that stopped the chain.
    #[source]
    pub source: Error,
}

impl<T> FetchError<T> {
    /// Discards the partial collection and returns the underlying error.
    pub fn into_error(self) -> Error {
        self.source
    }

    /// Splits into the partial collection and the underlying error.
    pub fn into_parts(self) -> (ResourceCollection<T>, Error) {
        (self.partial, self.source)
    }
}
