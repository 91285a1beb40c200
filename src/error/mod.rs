//! Error types

mod api;
mod okta;

pub use api::*;
pub use okta::*;

/// Top-level error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error during an API call.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
        }
    }

    /// Returns the Okta error code if available.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Api(api) => api.error_code(),
        }
    }
}
