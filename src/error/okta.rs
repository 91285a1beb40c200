//! Okta-specific error types

use serde::Deserialize;

/// Detailed error information from Okta API responses.
///
/// Non-2xx responses carry a structured JSON body with an error code
/// (e.g. `E0000007`), a human-readable summary, and zero or more causes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OktaErrorDetail {
    /// The Okta error code (e.g. "E0000007").
    pub error_code: String,
    /// Human-readable error summary.
    pub error_summary: String,
    /// Link to documentation for this error, if provided.
    #[serde(default)]
    pub error_link: Option<String>,
    /// Unique identifier of this error occurrence.
    #[serde(default)]
    pub error_id: Option<String>,
    /// Individual causes contributing to this error.
    #[serde(default)]
    pub error_causes: Vec<OktaErrorCause>,
}

impl OktaErrorDetail {
    /// Checks if this error has the given Okta error code.
    pub fn has_code(&self, code: &str) -> bool {
        self.error_code == code
    }
}

impl std::fmt::Display for OktaErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.error_code, self.error_summary)
    }
}

/// A single cause within an Okta error response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OktaErrorCause {
    /// Human-readable summary of the cause.
    pub error_summary: String,
}
