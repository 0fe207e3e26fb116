//! Migadu async client implementation.

use crate::{Error, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Async client for the Migadu REST API.
///
/// Use [`Client::new`] with account credentials, [`ClientBuilder::from_env`]
/// to read them from the environment, or [`Client::builder`] for custom
/// settings like the endpoint, timeout and proxy.
///
/// The client holds no mutable state; share it by reference.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    username: String,
    token: String,
    proxy: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the default endpoint.
    ///
    /// # Arguments
    /// * `username` - The email address of the Migadu account
    /// * `token` - An API key created in the Migadu admin panel
    ///
    /// # Examples
    /// ```no_run
    /// # use migadu_client::Client;
    /// # fn main() -> Result<(), migadu_client::Error> {
    /// let client = Client::new("admin@example.com", "api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().username(username).token(token).build()
    }

    /// The API base URL every request is resolved against.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The account name used for authentication.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Build `{endpoint}/domains/{ascii domain}/{segments...}`.
    ///
    /// The domain is normalized first; every segment is percent-encoded.
    pub(crate) fn domain_url(&self, domain: &str, segments: &[&str]) -> Result<Url> {
        let ascii = crate::domain::to_ascii(domain)?;
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("endpoint `{}` cannot be a base", self.endpoint)))?
            .pop_if_empty()
            .push("domains")
            .push(&ascii)
            .extend(segments);
        Ok(url)
    }

    /// GET a url and decode the body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.execute(self.http.request(Method::GET, url)).await
    }

    /// Send `body` as JSON and decode the echoed record.
    pub(crate) async fn send_json<B, T>(&self, method: Method, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.http.request(method, url).json(body)).await
    }

    /// DELETE a url and decode the echoed record.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.execute(self.http.request(Method::DELETE, url)).await
    }

    /// Perform one request and decode the body of a 2xx response.
    ///
    /// 404 maps to [`Error::NotFound`], any other non-2xx status to
    /// [`Error::RequestFailed`]. Nothing is retried.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = request
            .basic_auth(&self.username, Some(&self.token))
            .build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, %status, "received response");

        let body = response.bytes().await?;
        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = Self::error_message(&body);
        warn!(%method, %url, %status, %message, "request rejected");
        if status == reqwest::StatusCode::NOT_FOUND {
            Err(Error::NotFound { message })
        } else {
            Err(Error::RequestFailed { status, message })
        }
    }

    /// Extract the server's explanation from an error body.
    ///
    /// Uses the `error` field of a JSON body when present, the raw text otherwise.
    fn error_message(body: &[u8]) -> String {
        serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
    }
}

const DEFAULT_ENDPOINT: &str = "https://api.migadu.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT_VALUE: &str = concat!("migadu-client/", env!("CARGO_PKG_VERSION"));

const ENV_USERNAME: &str = "MIGADU_USERNAME";
const ENV_TOKEN: &str = "MIGADU_TOKEN";
const ENV_ENDPOINT: &str = "MIGADU_ENDPOINT";

/// Builder for configuring a Migadu client.
///
/// Start with [`Client::builder`] or [`ClientBuilder::from_env`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    endpoint: String,
    username: Option<String>,
    token: Option<String>,
    timeout: Duration,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .field("danger_accept_invalid_certs", &self.danger_accept_invalid_certs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Endpoint `https://api.migadu.com/v1`
    /// - 30 second request timeout
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - No credentials; set them before [`build`](Self::build)
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            username: None,
            token: None,
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Create a builder seeded from `MIGADU_USERNAME`, `MIGADU_TOKEN` and
    /// `MIGADU_ENDPOINT`.
    ///
    /// Unset variables keep their defaults; setters called afterwards win.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key| lookup(key).filter(|v: &String| !v.is_empty());
        let mut builder = Self::new();
        builder.username = non_empty(ENV_USERNAME);
        builder.token = non_empty(ENV_TOKEN);
        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            builder.endpoint = endpoint;
        }
        builder
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the account email address used for basic auth.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the API key used for basic auth.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Bound every request by `timeout` (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Config`] when credentials are missing or the
    /// endpoint is not an absolute URL. No network request is made.
    ///
    /// # Examples
    /// ```no_run
    /// # use migadu_client::Client;
    /// # fn main() -> Result<(), migadu_client::Error> {
    /// let client = Client::builder()
    ///     .username("admin@example.com")
    ///     .token("api-key")
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let username = self
            .username
            .ok_or_else(|| Error::Config(format!("missing username (set {ENV_USERNAME})")))?;
        let token = self
            .token
            .ok_or_else(|| Error::Config(format!("missing API token (set {ENV_TOKEN})")))?;
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint `{}`: {e}", self.endpoint)))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "endpoint `{}` cannot be a base",
                self.endpoint
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| Error::Config(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::Config(format!("invalid proxy `{proxy_url}`: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            endpoint,
            username,
            token,
            proxy: self.proxy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn builder_from(vars: &[(&str, &str)]) -> ClientBuilder {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientBuilder::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn env_provides_credentials_and_endpoint() {
        let client = builder_from(&[
            ("MIGADU_USERNAME", "admin@example.com"),
            ("MIGADU_TOKEN", "secret"),
            ("MIGADU_ENDPOINT", "http://localhost:8080/v1"),
        ])
        .build()
        .unwrap();
        assert_eq!(client.username(), "admin@example.com");
        assert_eq!(client.endpoint().as_str(), "http://localhost:8080/v1");
    }

    #[test]
    fn setters_override_env() {
        let client = builder_from(&[("MIGADU_USERNAME", "env@example.com"), ("MIGADU_TOKEN", "t")])
            .username("set@example.com")
            .build()
            .unwrap();
        assert_eq!(client.username(), "set@example.com");
        assert_eq!(client.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = builder_from(&[("MIGADU_USERNAME", "admin@example.com"), ("MIGADU_TOKEN", "")])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("MIGADU_TOKEN")));
    }

    #[test]
    fn invalid_endpoint_is_a_config_error() {
        let err = Client::builder()
            .username("a")
            .token("b")
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn domain_url_normalizes_and_encodes() {
        let client = Client::builder()
            .username("a")
            .token("b")
            .endpoint("https://api.example.com/v1/")
            .build()
            .unwrap();
        let url = client
            .domain_url("hoß.de", &["mailboxes", "a b"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/domains/xn--ho-hia.de/mailboxes/a%20b"
        );
    }

    #[test]
    fn debug_hides_token() {
        let client = Client::new("admin@example.com", "super-secret").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn error_message_prefers_json_field() {
        assert_eq!(Client::error_message(br#"{"error":"Forbidden"}"#), "Forbidden");
        assert_eq!(Client::error_message(b"  plain text\n"), "plain text");
        assert_eq!(Client::error_message(b""), "");
    }
}
