//! Okta API client library
//!
//! A Rust async client library for the Okta identity management Web API.
//!
//! The crate centers on cursor-paginated collection retrieval: endpoints
//! build a filtered query, issue one page request at a time, and follow
//! the server's opaque continuation cursor under caller-supplied stop
//! conditions (a page bound, or fetch-everything).
//!
//! # Example
//!
//! ```ignore
//! use okta_client::{ListOptions, OktaClient};
//!
//! let client = OktaClient::builder()
//!     .base_url("https://org.okta.com")
//!     .api_token("00abc...")
//!     .build();
//!
//! let options = ListOptions {
//!     all_pages: true,
//!     ..Default::default()
//! };
//! let users = client.app_users("0oa1gjh63g214q0Hq0g4", &options).await?;
//! println!("{} users over {} pages", users.len(), users.pages());
//! ```

pub mod api;
pub mod error;
pub mod model;
pub mod response;

mod client;

pub use api::query::FetchError;
pub use api::query::FilterExpression;
pub use api::query::FilterOperator;
pub use api::query::ListOptions;
pub use api::query::ResourceCollection;
pub use client::*;
pub use error::Error;
pub use response::ResponseMeta;
