//! Application group assignment model

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::Link;

/// A group assigned to an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGroup {
    /// Unique identifier of the group.
    pub id: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Assignment priority; lower wins when a user is assigned through
    /// multiple groups.
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub profile: AppGroupProfile,
    #[serde(default, rename = "_links")]
    pub links: AppGroupLinks,
}

/// Application profile attributes pushed to members of the group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGroupProfile {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub saml_roles: Vec<String>,
}

/// Related-resource links for a group assignment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppGroupLinks {
    #[serde(default)]
    pub user: Option<Link>,
}
