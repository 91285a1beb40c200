//! Page iteration for cursor-paginated collections.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::OktaClient;
use crate::error::Error;
use crate::response::ResponseMeta;

use super::collection::FetchError;
use super::collection::ResourceCollection;
use super::options::ListOptions;

/// One page of a collection, with its response metadata.
#[derive(Debug)]
pub struct ResourcePage<T> {
    items: Vec<T>,
    meta: ResponseMeta,
}

impl<T> ResourcePage<T> {
    /// Returns the items on this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Metadata of this page's response.
    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    /// Splits the page into its items and metadata.
    pub fn into_parts(self) -> (Vec<T>, ResponseMeta) {
        (self.items, self.meta)
    }
}

/// Async iterator that yields pages of a collection.
///
/// Follows the response's `rel="next"` link until the server stops
/// returning one. An error ends iteration; the cursor is not retried.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.app_user_pages("0oa1gjh63g214q0Hq0g4", &options);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for user in page.items() {
///         println!("{}", user.id);
///     }
/// }
/// ```
pub struct Pages<'a, T> {
    client: &'a OktaClient,
    next_url: Option<String>,
    fetched: u32,
    done: bool,
    _items: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Pages<'a, T> {
    /// Creates an iterator starting from the options' continuation cursor,
    /// or from `path` with the encoded query options when no cursor is set.
    pub(crate) fn start(client: &'a OktaClient, path: &str, options: &ListOptions) -> Self {
        let first_url = match options.next.as_ref() {
            Some(cursor) => cursor.to_string(),
            None => client.endpoint(&options.to_query(path)),
        };
        Self {
            client,
            next_url: Some(first_url),
            fetched: 0,
            done: false,
            _items: PhantomData,
        }
    }

    /// Fetches the next page.
    ///
    /// Returns `None` once the chain is exhausted or a previous call
    /// returned an error.
    pub async fn next(&mut self) -> Option<Result<ResourcePage<T>, Error>> {
        if self.done {
            return None;
        }

        let url = match self.next_url.take() {
            Some(url) => url,
            None => {
                self.done = true;
                return None;
            }
        };

        debug!(page = self.fetched + 1, %url, "fetching collection page");

        match self.client.get_json::<Vec<T>>(&url).await {
            Ok((items, meta)) => {
                self.fetched += 1;
                match meta.next() {
                    Some(next) => self.next_url = Some(next.to_string()),
                    None => self.done = true,
                }
                Some(Ok(ResourcePage { items, meta }))
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

/// Drives a fetch chain to completion under the options' stop conditions.
///
/// The first request goes to the options' continuation cursor verbatim
/// when one is set, otherwise to `path` with the encoded query options.
/// The chain continues while the last response carried a cursor and the
/// page bound (or the all-pages flag) allows it. A request or decode
/// failure stops the chain; pages fetched up to that point are returned
/// inside the error.
pub(crate) async fn fetch_paged<T: DeserializeOwned>(
    client: &OktaClient,
    path: &str,
    options: &ListOptions,
) -> Result<ResourceCollection<T>, FetchError<T>> {
    let mut pages = Pages::start(client, path, options);
    let mut collection = ResourceCollection::default();

    loop {
        match pages.next().await {
            Some(Ok(page)) => collection.push_page(page),
            Some(Err(source)) => {
                return Err(FetchError {
                    partial: collection,
                    source,
                });
            }
            None => break,
        }

        if !options.wants_more(collection.pages()) {
            break;
        }
    }

    debug!(
        pages = collection.pages(),
        items = collection.len(),
        "fetch chain complete"
    );

    Ok(collection)
}
