//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, IF_MATCH};
use tracing::debug;
use url::Url;

use crate::api::{
    ComponentsApi, JobDefinitionsApi, JobStatesApi, JobsApi, RemotecisApi, TeamsApi, TestsApi,
    TopicsApi, UsersApi,
};
use crate::error::{Error, ErrorResponse, Result};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cistern API client.
///
/// Provides typed access to all control server endpoints.
///
/// # Example
///
/// ```no_run
/// use cistern_client::CisternClient;
///
/// # async fn example() -> cistern_client::Result<()> {
/// let client = CisternClient::builder()
///     .base_url("http://localhost:5000")
///     .basic_auth("admin", "secret")
///     .build()?;
///
/// let teams = client.teams().list(&Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CisternClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// HTTP basic credentials, if configured.
    pub(crate) credentials: Option<Credentials>,
}

/// HTTP basic auth credentials.
pub(crate) struct Credentials {
    pub(crate) login: String,
    pub(crate) password: String,
}

impl CisternClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the jobs API.
    pub fn jobs(&self) -> JobsApi {
        JobsApi::new(self.clone())
    }

    /// Access the job states API.
    pub fn jobstates(&self) -> JobStatesApi {
        JobStatesApi::new(self.clone())
    }

    /// Access the remote CIs API.
    pub fn remotecis(&self) -> RemotecisApi {
        RemotecisApi::new(self.clone())
    }

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the teams API.
    pub fn teams(&self) -> TeamsApi {
        TeamsApi::new(self.clone())
    }

    /// Access the tests API.
    pub fn tests(&self) -> TestsApi {
        TestsApi::new(self.clone())
    }

    /// Access the topics API.
    pub fn topics(&self) -> TopicsApi {
        TopicsApi::new(self.clone())
    }

    /// Access the job definitions API.
    pub fn jobdefinitions(&self) -> JobDefinitionsApi {
        JobDefinitionsApi::new(self.clone())
    }

    /// Access the components API.
    pub fn components(&self) -> ComponentsApi {
        ComponentsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("api/v1/{}", path))
            .map_err(Error::from)
    }

    /// Apply basic auth credentials, if configured.
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.inner.credentials {
            Some(c) => request.basic_auth(&c.login, Some(&c.password)),
            None => request,
        }
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let request = self.inner.http.get(url).timeout(self.inner.timeout);
        let response = self.authed(request).send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let request = self
            .inner
            .http
            .get(url)
            .query(query)
            .timeout(self.inner.timeout);
        let response = self.authed(request).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let request = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout);
        let response = self.authed(request).send().await?;
        self.handle_response(response).await
    }

    /// Make a PUT request with an `If-Match` etag precondition.
    ///
    /// Returns `None` when the server answered 204 No Content.
    pub(crate) async fn put<T, B>(&self, path: &str, etag: &str, body: &B) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(%url, etag, "PUT");
        let request = self
            .inner
            .http
            .put(url)
            .header(IF_MATCH, etag)
            .json(body)
            .timeout(self.inner.timeout);
        let response = self.authed(request).send().await?;

        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if response.status().is_success() {
            return Ok(Some(response.json().await?));
        }
        Err(self.extract_error(response).await)
    }

    /// Make a DELETE request, with an `If-Match` etag precondition when the
    /// resource requires one.
    pub(crate) async fn delete(&self, path: &str, etag: Option<&str>) -> Result<()> {
        let url = self.url(path)?;
        debug!(%url, "DELETE");
        let mut request = self.inner.http.delete(url).timeout(self.inner.timeout);
        if let Some(etag) = etag {
            request = request.header(IF_MATCH, etag);
        }
        let response = self.authed(request).send().await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        // Try to parse error response
        match response.json::<ErrorResponse>().await {
            Ok(err) => {
                if status == 404 {
                    Error::NotFound(err.message)
                } else if status == 401 {
                    Error::Auth(err.message)
                } else {
                    Error::Api {
                        status,
                        message: err.message,
                    }
                }
            }
            Err(_) => Error::Api {
                status,
                message: format!("HTTP {}", status),
            },
        }
    }
}

/// Builder for creating a CisternClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    login: Option<String>,
    password: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            login: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL for the control server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set HTTP basic auth credentials.
    pub fn basic_auth(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self.password = Some(password.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CisternClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cistern-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        let credentials = match (self.login, self.password) {
            (Some(login), Some(password)) => Some(Credentials { login, password }),
            _ => None,
        };

        Ok(CisternClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                credentials,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_base_url() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5000")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5000/")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5000")
            .build()
            .unwrap();

        let url = client.url("remotecis").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/v1/remotecis");

        let url = client.url("/remotecis").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/v1/remotecis");

        let url = client.url("topics/t1/teams").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/v1/topics/t1/teams");
    }
}
