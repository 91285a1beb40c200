//! Integration tests for collection fetching using wiremock
//!
//! These tests verify pagination behavior against mocked endpoints:
//! cursor following, stop conditions, partial results on failure, and
//! query-parameter encoding.

use okta_client::error::ApiError;
use okta_client::{Error, ListOptions, OktaClient};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn test_client(server: &MockServer) -> OktaClient {
    OktaClient::builder()
        .base_url(server.uri())
        .api_token("test-token")
        .build()
}

/// A `Link: <...>; rel="next"` header pointing back at the mock server.
fn next_link(server: &MockServer, path_and_query: &str) -> String {
    format!("<{}{}>; rel=\"next\"", server.uri(), path_and_query)
}

fn user(id: &str) -> serde_json::Value {
    json!({"id": id, "status": "ACTIVE", "scope": "USER"})
}

fn user_ids(users: &[okta_client::model::AppUser]) -> Vec<&str> {
    users.iter().map(|u| u.id.as_str()).collect()
}

/// Mounts a three-page user chain for `apps/app1/users`, each page linking
/// to the next via a continuation cursor and the last carrying none.
async fn mount_user_chain(server: &MockServer, expect: [u64; 3]) {
    let users_path = "/api/v1/apps/app1/users";

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param_is_missing("after"))
        .and(header("Authorization", "SSWS test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "link",
                    next_link(server, "/api/v1/apps/app1/users?after=tok2&limit=2"),
                )
                .set_body_json(json!([user("u1"), user("u2")])),
        )
        .expect(expect[0])
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param("after", "tok2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "link",
                    next_link(server, "/api/v1/apps/app1/users?after=tok3&limit=2"),
                )
                .set_body_json(json!([user("u3"), user("u4")])),
        )
        .expect(expect[1])
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param("after", "tok3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user("u5")])))
        .expect(expect[2])
        .mount(server)
        .await;
}

/// Fetching with the all-pages flag returns the concatenation of every
/// page in order, and no request is issued past the last page.
#[tokio::test]
async fn test_all_pages_concatenates_chain() {
    let server = MockServer::start().await;
    mount_user_chain(&server, [1, 1, 1]).await;

    let options = ListOptions {
        all_pages: true,
        ..Default::default()
    };
    let users = test_client(&server)
        .app_users("app1", &options)
        .await
        .expect("chain should complete");

    assert_eq!(user_ids(users.items()), ["u1", "u2", "u3", "u4", "u5"]);
    assert_eq!(users.pages(), 3);
    assert!(users.next_link().is_none());
}

/// A page bound stops the chain even though a cursor is still available.
#[tokio::test]
async fn test_page_bound_stops_chain() {
    let server = MockServer::start().await;
    mount_user_chain(&server, [1, 1, 0]).await;

    let options = ListOptions {
        all_pages: true,
        max_pages: Some(2),
        ..Default::default()
    };
    let users = test_client(&server)
        .app_users("app1", &options)
        .await
        .expect("bounded chain should complete");

    assert_eq!(user_ids(users.items()), ["u1", "u2", "u3", "u4"]);
    assert_eq!(users.pages(), 2);
    assert!(users.next_link().is_some(), "unconsumed cursor is surfaced");
}

/// Without the all-pages flag or a bound, exactly one page is fetched.
#[tokio::test]
async fn test_single_page_by_default() {
    let server = MockServer::start().await;
    mount_user_chain(&server, [1, 0, 0]).await;

    let users = test_client(&server)
        .app_users("app1", &ListOptions::new())
        .await
        .expect("single page should complete");

    assert_eq!(user_ids(users.items()), ["u1", "u2"]);
    assert_eq!(users.pages(), 1);
    assert!(users.next_link().is_some());
}

/// A mid-chain HTTP failure returns the pages accumulated so far inside
/// the error: never empty, never silently complete.
#[tokio::test]
async fn test_partial_results_on_midchain_failure() {
    let server = MockServer::start().await;
    let users_path = "/api/v1/apps/app1/users";

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "link",
                    next_link(&server, "/api/v1/apps/app1/users?after=tok2&limit=2"),
                )
                .set_body_json(json!([user("u1"), user("u2")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param("after", "tok2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errorCode": "E0000009",
            "errorSummary": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    let options = ListOptions {
        all_pages: true,
        ..Default::default()
    };
    let err = test_client(&server)
        .app_users("app1", &options)
        .await
        .expect_err("page 2 failure should abort the chain");

    assert_eq!(user_ids(err.partial.items()), ["u1", "u2"]);
    assert_eq!(err.partial.pages(), 1);
    assert_eq!(err.source.status_code(), Some(500));
    assert_eq!(err.source.error_code(), Some("E0000009"));
}

/// A decode failure mid-chain behaves like a transport failure.
#[tokio::test]
async fn test_partial_results_on_decode_failure() {
    let server = MockServer::start().await;
    let users_path = "/api/v1/apps/app1/users";

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "link",
                    next_link(&server, "/api/v1/apps/app1/users?after=tok2&limit=2"),
                )
                .set_body_json(json!([user("u1")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(users_path))
        .and(query_param("after", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let options = ListOptions {
        all_pages: true,
        ..Default::default()
    };
    let err = test_client(&server)
        .app_users("app1", &options)
        .await
        .expect_err("malformed page 2 should abort the chain");

    assert_eq!(user_ids(err.partial.items()), ["u1"]);
    assert!(matches!(err.source, Error::Api(ApiError::Parse { .. })));
}

/// The default page size reaches the wire when the caller supplies none.
#[tokio::test]
async fn test_default_limit_applied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/app1/users"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user("u1")])))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server)
        .app_users("app1", &ListOptions::new())
        .await
        .expect("fetch should succeed");
}

/// An explicit positive limit is preserved unchanged through encoding.
#[tokio::test]
async fn test_explicit_limit_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/app1/users"))
        .and(query_param("limit", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user("u1")])))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions {
        limit: Some(7),
        ..Default::default()
    };
    test_client(&server)
        .app_users("app1", &options)
        .await
        .expect("fetch should succeed");
}

/// Unset optional parameters stay out of the query string entirely.
#[tokio::test]
async fn test_unset_parameters_omitted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/app1/users"))
        .and(query_param_is_missing("filter"))
        .and(query_param_is_missing("expand"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user("u1")])))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions {
        all_pages: true,
        max_pages: Some(1),
        ..Default::default()
    };
    test_client(&server)
        .app_users("app1", &options)
        .await
        .expect("fetch should succeed");
}

/// A user restriction on the application listing becomes a filter
/// predicate, and a requested expansion embeds that user.
#[tokio::test]
async fn test_apps_user_predicate_injection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps"))
        .and(query_param("filter", "user.id eq \"00u1\""))
        .and(query_param("expand", "user/00u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a1", "name": "saml-app", "label": "SAML App", "status": "ACTIVE"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions {
        user_id: Some("00u1".to_string()),
        expand: Some("user".to_string()),
        ..Default::default()
    };
    let apps = test_client(&server)
        .apps(&options)
        .await
        .expect("filtered listing should succeed");

    assert_eq!(apps.len(), 1);
    assert_eq!(apps.items()[0].name, "saml-app");
}

/// Group assignments use a fixed page size and follow the returned
/// cursor to completion.
#[tokio::test]
async fn test_groups_fixed_limit_follows_cursor() {
    let server = MockServer::start().await;
    let groups_path = "/api/v1/apps/app1/groups";

    Mock::given(method("GET"))
        .and(path(groups_path))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "link",
                    next_link(&server, "/api/v1/apps/app1/groups?after=g2&limit=100"),
                )
                .set_body_json(json!([{"id": "g1"}, {"id": "g2"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(groups_path))
        .and(query_param("after", "g2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "g3"}])))
        .expect(1)
        .mount(&server)
        .await;

    let groups = test_client(&server)
        .app_groups("app1")
        .await
        .expect("group chain should complete");

    let ids: Vec<_> = groups.items().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["g1", "g2", "g3"]);
    assert_eq!(groups.pages(), 2);
}

/// A caller-supplied cursor is requested verbatim: no re-encoding of
/// query options on top of it.
#[tokio::test]
async fn test_resume_from_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/app1/users"))
        .and(query_param("after", "tok9"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user("u9")])))
        .expect(1)
        .mount(&server)
        .await;

    let cursor = Url::parse(&format!("{}/api/v1/apps/app1/users?after=tok9", server.uri())).unwrap();
    let options = ListOptions {
        next: Some(cursor),
        limit: Some(25),
        ..Default::default()
    };
    let users = test_client(&server)
        .app_users("app1", &options)
        .await
        .expect("resumed fetch should succeed");

    assert_eq!(user_ids(users.items()), ["u9"]);
}

/// A single-resource read surfaces the structured Okta error on failure.
#[tokio::test]
async fn test_app_not_found_error_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errorCode": "E0000007",
            "errorSummary": "Not found: Resource not found: missing (AppInstance)",
            "errorId": "oae123",
            "errorCauses": []
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .app("missing")
        .await
        .expect_err("missing app should error");

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_code(), Some("E0000007"));
}

/// Matches requests that carry no Authorization header.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// The session endpoint authenticates with the posted credentials, not
/// the API token.
#[tokio::test]
async fn test_session_token_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/authn"))
        .and(body_json(json!({"username": "jdoe", "password": "hunter2"})))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiresAt": "2026-08-07T12:00:00.000Z",
            "status": "SUCCESS",
            "sessionToken": "20111abc",
            "_embedded": {
                "user": {
                    "id": "00u1",
                    "profile": {"login": "jdoe@example.com"}
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transaction = test_client(&server)
        .session_token("jdoe", "hunter2")
        .await
        .expect("credential exchange should succeed");

    assert_eq!(transaction.status, "SUCCESS");
    assert_eq!(transaction.session_token.as_deref(), Some("20111abc"));
    assert_eq!(
        transaction.embedded.user.map(|u| u.id).as_deref(),
        Some("00u1")
    );
}
