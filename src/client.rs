//! Main OktaClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::ApiError;
use crate::error::Error;
use crate::error::OktaErrorDetail;
use crate::response::ResponseMeta;

/// The main client for interacting with the Okta API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use okta_client::OktaClient;
///
/// let client = OktaClient::builder()
///     .base_url("https://org.okta.com")
///     .api_token("00abc...")
///     .build();
///
/// let users = client.app_users("0oa1gjh63g214q0Hq0g4", &Default::default()).await?;
/// ```
#[derive(Clone)]
pub struct OktaClient {
    inner: Arc<OktaClientInner>,
}

struct OktaClientInner {
    base_url: String,
    api_token: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl OktaClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> OktaClientBuilder<Missing, Missing> {
        OktaClientBuilder::new()
    }

    /// Returns the base URL of the organization.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Builds the absolute URL for an API path (with query string).
    pub(crate) fn endpoint(&self, path_and_query: &str) -> String {
        format!(
            "{}/api/v1/{}",
            self.inner.base_url.trim_end_matches('/'),
            path_and_query
        )
    }

    /// Issues an authenticated GET and decodes the JSON response.
    ///
    /// This is the "issue request, decode response" primitive every read
    /// operation goes through. Returns the decoded body together with the
    /// response's pagination metadata.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<(T, ResponseMeta), Error> {
        trace!(%url, "GET");
        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, self.authorization());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        self.execute(request).await
    }

    /// Issues a POST with a JSON body and decodes the JSON response.
    ///
    /// `authenticated` is false for the session endpoint, which
    /// authenticates with the posted credentials rather than the API token.
    pub(crate) async fn post_json<T, B>(
        &self,
        url: &str,
        body: &B,
        authenticated: bool,
    ) -> Result<(T, ResponseMeta), Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        trace!(%url, "POST");
        let mut request = self
            .inner
            .http_client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(body);

        if authenticated {
            request = request.header(header::AUTHORIZATION, self.authorization());
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        self.execute(request).await
    }

    fn authorization(&self) -> String {
        format!("SSWS {}", self.inner.api_token)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(T, ResponseMeta), Error> {
        let response = request.send().await.map_err(ApiError::from)?;

        let meta = ResponseMeta::from_headers(response.headers());
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), body));
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let value = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;
        Ok((value, meta))
    }
}

/// Maps a non-2xx response to an error, decoding the Okta error body when
/// it parses.
fn error_from_response(status: u16, body: String) -> Error {
    match serde_json::from_str::<OktaErrorDetail>(&body) {
        Ok(detail) => Error::Api(ApiError::http_with_detail(status, detail)),
        Err(_) => Error::Api(ApiError::http(status, body)),
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`OktaClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile
/// time.
///
/// # Required Fields
///
/// - `base_url` - The organization URL (e.g. `https://org.okta.com`)
/// - `api_token` - An SSWS API token
///
/// # Example
///
/// ```ignore
/// let client = OktaClient::builder()
///     .base_url("https://org.okta.com")
///     .api_token("00abc...")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct OktaClientBuilder<Url, Token> {
    base_url: Url,
    api_token: Token,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl OktaClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            api_token: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for OktaClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OktaClientBuilder<Missing, T> {
    /// Sets the organization URL.
    pub fn base_url(self, url: impl Into<String>) -> OktaClientBuilder<Set<String>, T> {
        OktaClientBuilder {
            base_url: Set(url.into()),
            api_token: self.api_token,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> OktaClientBuilder<U, Missing> {
    /// Sets the SSWS API token used to authenticate requests.
    pub fn api_token(self, token: impl Into<String>) -> OktaClientBuilder<U, Set<String>> {
        OktaClientBuilder {
            base_url: self.base_url,
            api_token: Set(token.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, T> OktaClientBuilder<U, T> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl OktaClientBuilder<Set<String>, Set<String>> {
    /// Builds the [`OktaClient`].
    ///
    /// This method is only available when both `base_url` and `api_token`
    /// have been set.
    pub fn build(self) -> OktaClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        OktaClient {
            inner: Arc::new(OktaClientInner {
                base_url: self.base_url.0,
                api_token: self.api_token.0,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}
