//! Application model

use std::collections::HashMap;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::AppUser;
use super::Link;

/// An application registered in the organization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Unique identifier of the application.
    pub id: String,
    /// Internal application name.
    pub name: String,
    /// Display label shown to end users.
    pub label: String,
    /// Lifecycle status (e.g. "ACTIVE").
    pub status: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
    #[serde(default)]
    pub sign_on_mode: String,
    #[serde(default)]
    pub credentials: AppCredentials,
    #[serde(default)]
    pub settings: AppSettings,
    /// Sub-resources embedded via the `expand` directive.
    #[serde(default, rename = "_embedded")]
    pub embedded: AppEmbedded,
    #[serde(default, rename = "_links")]
    pub links: AppLinks,
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "App({}: {})", self.id, self.name)
    }
}

/// Self-service and redirect settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    #[serde(default)]
    pub self_service: bool,
    #[serde(default)]
    pub error_redirect_url: Option<String>,
    #[serde(default)]
    pub login_redirect_url: Option<String>,
}

/// End-user dashboard visibility settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    #[serde(default)]
    pub auto_submit_toolbar: bool,
    #[serde(default)]
    pub hide: VisibilityHide,
    /// Per-link visibility flags, keyed by the org-specific link name.
    #[serde(default)]
    pub app_links: HashMap<String, bool>,
}

/// Platforms the application is hidden on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisibilityHide {
    #[serde(default, rename = "iOS")]
    pub ios: bool,
    #[serde(default)]
    pub web: bool,
}

/// Sign-on credential configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCredentials {
    #[serde(default)]
    pub user_name_template: UserNameTemplate,
    #[serde(default)]
    pub signing: serde_json::Value,
}

/// Template generating application usernames.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNameTemplate {
    #[serde(default)]
    pub template: String,
    #[serde(default, rename = "type")]
    pub template_type: String,
}

/// Application settings, sign-on configuration included.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub app: serde_json::Value,
    #[serde(default)]
    pub notifications: serde_json::Value,
    #[serde(default)]
    pub sign_on: SignOnSettings,
}

/// SAML sign-on settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOnSettings {
    #[serde(default)]
    pub default_relay_state: Option<String>,
    #[serde(default)]
    pub sso_acs_url: Option<String>,
    #[serde(default)]
    pub idp_issuer: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub subject_name_id_template: Option<String>,
    #[serde(default)]
    pub subject_name_id_format: Option<String>,
    #[serde(default)]
    pub response_signed: bool,
    #[serde(default)]
    pub assertion_signed: bool,
    #[serde(default)]
    pub signature_algorithm: Option<String>,
    #[serde(default)]
    pub digest_algorithm: Option<String>,
    #[serde(default)]
    pub honor_force_authn: bool,
    #[serde(default)]
    pub authn_context_class_ref: Option<String>,
    #[serde(default)]
    pub sp_issuer: Option<String>,
    #[serde(default)]
    pub request_compressed: bool,
    #[serde(default)]
    pub attribute_statements: Vec<serde_json::Value>,
}

/// Sub-resources the server embedded in the response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppEmbedded {
    /// The assigned user, when `expand=user/{id}` was requested.
    #[serde(default)]
    pub user: Option<AppUser>,
}

/// Related-resource links for an application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLinks {
    #[serde(default)]
    pub logo: Vec<Link>,
    #[serde(default)]
    pub app_links: Vec<Link>,
    #[serde(default)]
    pub help: Option<Link>,
    #[serde(default)]
    pub users: Option<Link>,
    #[serde(default)]
    pub deactivate: Option<Link>,
    #[serde(default)]
    pub groups: Option<Link>,
    #[serde(default)]
    pub metadata: Option<Link>,
}
