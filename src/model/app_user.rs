//! Application user model

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::Link;

/// A user assigned to an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    /// Unique identifier of the assignment.
    pub id: String,
    /// Identifier of the user in the downstream application.
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// How the assignment was granted ("USER" or "GROUP").
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_changed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub password_changed: Option<DateTime<Utc>>,
    /// Provisioning sync state for the assignment.
    #[serde(default)]
    pub sync_state: String,
    #[serde(default)]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub credentials: AppUserCredentials,
    #[serde(default)]
    pub profile: AppUserProfile,
    #[serde(default, rename = "_links")]
    pub links: AppUserLinks,
}

/// Application-scoped credentials of an assigned user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserCredentials {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: serde_json::Value,
}

/// Application-specific profile attributes of an assigned user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub second_email: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub saml_roles: Vec<String>,
    #[serde(default)]
    pub salesforce_groups: Vec<String>,
}

/// Related-resource links for an application user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppUserLinks {
    #[serde(default)]
    pub app: Option<Link>,
    #[serde(default)]
    pub user: Option<Link>,
}
