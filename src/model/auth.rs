//! Authentication transaction model

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

/// State of an authentication transaction returned by the `authn` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTransaction {
    /// Token identifying an in-progress transaction (MFA, password reset).
    #[serde(default)]
    pub state_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Transaction status (e.g. "SUCCESS", "MFA_REQUIRED").
    pub status: String,
    /// One-time token exchangeable for a session, present on success.
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default, rename = "_embedded")]
    pub embedded: AuthEmbedded,
    #[serde(default, rename = "_links")]
    pub links: serde_json::Value,
}

/// Sub-resources embedded in an authentication transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthEmbedded {
    /// The authenticating user.
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The user attached to an authentication transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub password_changed: Option<DateTime<Utc>>,
    /// Profile attributes as returned by the server.
    #[serde(default)]
    pub profile: serde_json::Value,
}
