//! Application resource operations
//!
//! Collection endpoints delegate to the paginated fetcher; single-resource
//! reads go through the request primitive directly.
//!
//! # Example
//!
//! ```ignore
//! use okta_client::{FilterOperator, ListOptions};
//!
//! // Every application assigned to a user, with the user embedded.
//! let options = ListOptions {
//!     user_id: Some("00u1abcd".to_string()),
//!     expand: Some("user".to_string()),
//!     all_pages: true,
//!     ..Default::default()
//! };
//! let apps = client.apps(&options).await?;
//! ```

use crate::OktaClient;
use crate::api::query::FetchError;
use crate::api::query::FilterOperator;
use crate::api::query::ListOptions;
use crate::api::query::Pages;
use crate::api::query::ResourceCollection;
use crate::api::query::USER_ID_FIELD;
use crate::api::query::fetch_paged;
use crate::error::Error;
use crate::model::App;
use crate::model::AppGroup;
use crate::model::AppUser;

/// Page size used for group assignment listings.
const GROUPS_PAGE_LIMIT: u32 = 100;

impl OktaClient {
    /// Retrieves one application by its ID.
    pub async fn app(&self, app_id: &str) -> Result<App, Error> {
        let url = self.endpoint(&format!("apps/{app_id}"));
        let (app, _) = self.get_json(&url).await?;
        Ok(app)
    }

    /// Retrieves one user assigned to an application.
    pub async fn app_user(&self, app_id: &str, user_id: &str) -> Result<AppUser, Error> {
        let url = self.endpoint(&format!("apps/{app_id}/users/{user_id}"));
        let (user, _) = self.get_json(&url).await?;
        Ok(user)
    }

    /// Lists the users assigned to an application.
    ///
    /// Honors the options' filter, limit, and pagination controls. On a
    /// mid-chain failure the pages fetched so far are returned inside the
    /// error.
    pub async fn app_users(
        &self,
        app_id: &str,
        options: &ListOptions,
    ) -> Result<ResourceCollection<AppUser>, FetchError<AppUser>> {
        fetch_paged(self, &format!("apps/{app_id}/users"), options).await
    }

    /// Iterates the users assigned to an application page by page.
    pub fn app_user_pages(&self, app_id: &str, options: &ListOptions) -> Pages<'_, AppUser> {
        Pages::start(self, &format!("apps/{app_id}/users"), options)
    }

    /// Lists every group assigned to an application.
    ///
    /// Uses a fixed page size and follows continuation cursors until the
    /// server stops returning one; caller-supplied options are not honored.
    pub async fn app_groups(
        &self,
        app_id: &str,
    ) -> Result<ResourceCollection<AppGroup>, FetchError<AppGroup>> {
        let options = ListOptions {
            limit: Some(GROUPS_PAGE_LIMIT),
            all_pages: true,
            ..Default::default()
        };
        fetch_paged(self, &format!("apps/{app_id}/groups"), &options).await
    }

    /// Lists applications, optionally filtered.
    ///
    /// When `user_id` is set, a `user.id eq "<value>"` predicate is
    /// appended to the filter before encoding, and a requested expansion
    /// is rewritten to embed that user.
    pub async fn apps(
        &self,
        options: &ListOptions,
    ) -> Result<ResourceCollection<App>, FetchError<App>> {
        let options = options_with_user_predicate(options);
        fetch_paged(self, "apps", &options).await
    }

    /// Iterates applications page by page.
    pub fn app_pages(&self, options: &ListOptions) -> Pages<'_, App> {
        Pages::start(self, "apps", &options_with_user_predicate(options))
    }
}

/// Folds a requested user-ID restriction into the filter and expansion.
fn options_with_user_predicate(options: &ListOptions) -> ListOptions {
    let mut options = options.clone();
    if let Some(user_id) = options.user_id.take() {
        let filter = std::mem::take(&mut options.filter);
        options.filter = filter.append(USER_ID_FIELD, FilterOperator::Eq, &user_id);
        if options.expand.is_some() {
            options.expand = Some(format!("user/{user_id}"));
        }
    }
    options
}
