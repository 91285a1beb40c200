//! Query composition and pagination.
//!
//! This module holds the pieces every collection endpoint is built from:
//!
//! - [`FilterExpression`] / [`FilterOperator`] - predicate composition for
//!   the `filter` query parameter
//! - [`ListOptions`] - per-call query options and chain stop conditions
//! - [`Pages`] - async page iterator following continuation cursors
//! - [`ResourceCollection`] - accumulated items plus last-page metadata

mod collection;
mod filter;
mod options;
mod pages;

pub use collection::FetchError;
pub use collection::ResourceCollection;
pub use filter::FilterExpression;
pub use filter::FilterOperator;
pub use filter::USER_ID_FIELD;
pub use options::DEFAULT_LIMIT;
pub use options::ListOptions;
pub use pages::Pages;
pub use pages::ResourcePage;

pub(crate) use pages::fetch_paged;
