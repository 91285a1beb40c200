//! List options and query-string encoding.

use url::Url;

use super::filter::FilterExpression;

/// Page size used when the caller does not supply a limit.
pub const DEFAULT_LIMIT: u32 = 100;

/// Options describing one collection request.
///
/// Only `limit`, `filter`, and `expand` are queryable options that reach
/// the URL. The remaining fields steer the fetch chain client-side and are
/// never serialized.
///
/// # Example
///
/// ```
/// use okta_client::{FilterOperator, FilterExpression, ListOptions};
///
/// let options = ListOptions {
///     limit: Some(20),
///     filter: FilterExpression::new().append("status", FilterOperator::Eq, "ACTIVE"),
///     all_pages: true,
///     max_pages: Some(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Continuation cursor from a previous response. When set, the resource
    /// path is ignored and the cursor URL is requested verbatim.
    pub next: Option<Url>,
    /// Page size. `None` or zero substitutes [`DEFAULT_LIMIT`] before the
    /// first request of a fetch chain.
    pub limit: Option<u32>,
    /// Filter expression; omitted from the query string when empty.
    pub filter: FilterExpression,
    /// Expansion directive asking the server to embed a related
    /// sub-resource; omitted when unset.
    pub expand: Option<String>,
    /// Follow continuation cursors until the server stops returning one.
    ///
    /// An API that always returns a cursor has no client-side ceiling under
    /// this flag alone; set `max_pages` when cursor exhaustion cannot be
    /// guaranteed.
    pub all_pages: bool,
    /// Upper bound on pages fetched in one chain. `None` (or zero) means
    /// unbounded, which is honored only together with `all_pages`.
    pub max_pages: Option<u32>,
    /// Restrict the filtered application listing to applications assigned
    /// to this user. Consumed client-side to build the filter predicate.
    pub user_id: Option<String>,
}

impl ListOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The positive page size serialized into the first request.
    pub(crate) fn effective_limit(&self) -> u32 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Whether the chain should continue after `fetched` successful pages,
    /// assuming the last response carried a cursor.
    pub(crate) fn wants_more(&self, fetched: u32) -> bool {
        match self.max_pages {
            Some(bound) if bound > 0 => fetched < bound,
            _ => self.all_pages,
        }
    }

    /// Renders `path?query` for the first request of a fetch chain.
    ///
    /// Transport-internal fields (`next`, `all_pages`, `max_pages`,
    /// `user_id`) never appear; empty optional fields are omitted entirely.
    pub(crate) fn to_query(&self, path: &str) -> String {
        let mut params = vec![format!("limit={}", self.effective_limit())];

        if !self.filter.is_empty() {
            params.push(format!("filter={}", urlencoding::encode(self.filter.as_str())));
        }

        if let Some(expand) = self.expand.as_deref()
            && !expand.is_empty()
        {
            params.push(format!("expand={}", urlencoding::encode(expand)));
        }

        format!("{}?{}", path, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter::FilterOperator;
    use super::*;

    #[test]
    fn test_default_limit_substituted() {
        assert_eq!(ListOptions::new().to_query("apps"), "apps?limit=100");
        let zero = ListOptions {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.to_query("apps"), "apps?limit=100");
    }

    #[test]
    fn test_explicit_limit_preserved() {
        let options = ListOptions {
            limit: Some(7),
            ..Default::default()
        };
        assert_eq!(options.to_query("apps"), "apps?limit=7");
    }

    #[test]
    fn test_filter_and_expand_encoded() {
        let options = ListOptions {
            limit: Some(20),
            filter: FilterExpression::new().append("user.id", FilterOperator::Eq, "abc"),
            expand: Some("user/abc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            options.to_query("apps"),
            "apps?limit=20&filter=user.id%20eq%20%22abc%22&expand=user%2Fabc"
        );
    }

    #[test]
    fn test_internal_fields_never_serialized() {
        let options = ListOptions {
            next: Some(Url::parse("https://org.okta.com/api/v1/apps?after=tok").unwrap()),
            all_pages: true,
            max_pages: Some(5),
            user_id: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(options.to_query("apps"), "apps?limit=100");
    }

    #[test]
    fn test_empty_optionals_omitted() {
        let options = ListOptions {
            expand: Some(String::new()),
            ..Default::default()
        };
        let query = options.to_query("apps/a1/users");
        assert_eq!(query, "apps/a1/users?limit=100");
        assert!(!query.contains("filter="));
        assert!(!query.contains("expand="));
    }

    #[test]
    fn test_wants_more_bound_wins_over_flag() {
        let bounded = ListOptions {
            all_pages: true,
            max_pages: Some(3),
            ..Default::default()
        };
        assert!(bounded.wants_more(2));
        assert!(!bounded.wants_more(3));
    }

    #[test]
    fn test_wants_more_single_page_by_default() {
        assert!(!ListOptions::new().wants_more(1));
    }

    #[test]
    fn test_wants_more_unbounded_all_pages() {
        let all = ListOptions {
            all_pages: true,
            ..Default::default()
        };
        assert!(all.wants_more(1));
        assert!(all.wants_more(500));
    }

    #[test]
    fn test_wants_more_zero_bound_means_unbounded() {
        let zero = ListOptions {
            all_pages: true,
            max_pages: Some(0),
            ..Default::default()
        };
        assert!(zero.wants_more(10));
    }
}
