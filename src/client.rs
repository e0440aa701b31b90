//! TempMailChecker async client implementation.

use crate::request::{API_KEY_HEADER, ApiRequest};
use crate::response::interpret;
use crate::{CheckResult, Endpoint, Error, Result, Usage};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT_VALUE: &str = concat!("tempmailchecker-rust/", env!("CARGO_PKG_VERSION"));
const API_KEY_ENV: &str = "TEMPMAILCHECKER_API_KEY";
const ENDPOINT_ENV: &str = "TEMPMAILCHECKER_ENDPOINT";

/// Async client for the TempMailChecker disposable email detection API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] to pick a region,
/// timeout, proxy or user agent.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client for the default (EU) endpoint.
    ///
    /// Fails with [`Error::Configuration`] if `api_key` is empty.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker::Client;
    /// # fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = Client::new("your_api_key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Create a client for a specific regional or custom endpoint.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker::{Client, Endpoint};
    /// # fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = Client::with_endpoint("your_api_key", Endpoint::Us)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<Endpoint>) -> Result<Self> {
        ClientBuilder::new(api_key).endpoint(endpoint).build()
    }

    /// The endpoint this client sends requests to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.config.endpoint
    }

    /// Timeout applied to each request. Zero means no timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Change the timeout, in seconds, for every later call on this client.
    ///
    /// `0` disables the timeout. Returns `&mut Self` so calls can be chained.
    pub fn set_timeout(&mut self, seconds: u64) -> &mut Self {
        self.config.timeout = Duration::from_secs(seconds);
        self
    }

    /// Check an email address and return the full response.
    ///
    /// The address is validated locally first; an empty or malformed address
    /// fails with [`Error::Validation`] without touching the network.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = Client::new("your_api_key")?;
    /// let result = client.check("user@tempmail.com").await?;
    /// println!("temp: {}, extra: {:?}", result.temp, result.extra);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check(&self, email: &str) -> Result<CheckResult> {
        self.send(ApiRequest::check_email(email)?).await
    }

    /// Check a domain and return the full response.
    ///
    /// Accepts a bare host or a URL; the scheme, path and port are stripped
    /// before the request is sent.
    pub async fn check_domain(&self, domain: &str) -> Result<CheckResult> {
        self.send(ApiRequest::check_domain(domain)?).await
    }

    /// Returns `true` if the email address is disposable.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = Client::new("your_api_key")?;
    /// if client.is_disposable("test@10minutemail.com").await? {
    ///     println!("disposable");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn is_disposable(&self, email: &str) -> Result<bool> {
        Ok(self.check(email).await?.temp)
    }

    /// Returns `true` if the domain is disposable.
    pub async fn is_disposable_domain(&self, domain: &str) -> Result<bool> {
        Ok(self.check_domain(domain).await?.temp)
    }

    /// Get API usage for today.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = Client::new("your_api_key")?;
    /// let usage = client.usage().await?;
    /// println!("{} / {}, resets {}", usage.usage_today, usage.limit, usage.reset);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn usage(&self) -> Result<Usage> {
        self.send(ApiRequest::usage(&self.config.api_key)).await
    }

    /// Send one GET request and interpret the response.
    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = request.url(self.config.endpoint.base_url());
        debug!(path = request.path, endpoint = %self.config.endpoint, "sending request");

        let mut builder = self
            .http
            .get(url)
            .headers(self.config.headers(request.authenticated));
        if let Some(timeout) = self.config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(path = request.path, status, "received response");

        interpret(status, &body)
    }
}

/// Settings shared by the async and blocking clients.
#[derive(Clone)]
pub(crate) struct Config {
    pub api_key: String,
    api_key_header: HeaderValue,
    pub endpoint: Endpoint,
    pub timeout: Duration,
}

impl Config {
    /// Headers for one request; the API key header only when `authenticated`.
    pub fn headers(&self, authenticated: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if authenticated {
            headers.insert(API_KEY_HEADER, self.api_key_header.clone());
        }
        headers
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (!self.timeout.is_zero()).then_some(self.timeout)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for configuring a TempMailChecker client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    endpoint: Endpoint,
    timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - EU endpoint
    /// - 10 second timeout
    /// - No proxy
    /// - `tempmailchecker-rust/<version>` user agent
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: Endpoint::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: None,
        }
    }

    /// Create a builder from `TEMPMAILCHECKER_API_KEY` and, if set,
    /// `TEMPMAILCHECKER_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(ENDPOINT_ENV).ok(),
        )
    }

    fn from_vars(api_key: Option<String>, endpoint: Option<String>) -> Result<Self> {
        let api_key =
            api_key.ok_or_else(|| Error::Configuration(format!("{API_KEY_ENV} is not set")))?;
        let mut builder = Self::new(api_key);
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            builder = builder.endpoint(endpoint);
        }
        Ok(builder)
    }

    /// Select a regional endpoint or a custom base URL.
    pub fn endpoint(mut self, endpoint: impl Into<Endpoint>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Per-request timeout (default: 10 seconds). Zero disables it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the async client.
    ///
    /// No request is made; this only validates the settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::time::Duration;
    /// # use tempmailchecker::{Client, Endpoint};
    /// # fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = Client::builder("your_api_key")
    ///     .endpoint(Endpoint::Asia)
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let config = self.config()?;
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(proxy(proxy_url)?);
        }

        Ok(Client {
            http: builder.build().map_err(http_client_error)?,
            config,
            proxy: self.proxy,
        })
    }

    /// Build a client whose calls block the current thread.
    ///
    /// Must not be called from within an async runtime.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::Client> {
        let config = self.config()?;
        // The blocking client has a 30s default timeout; ours is set per request.
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(None);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(proxy(proxy_url)?);
        }

        Ok(crate::blocking::Client::from_parts(
            builder.build().map_err(http_client_error)?,
            config,
            self.proxy,
        ))
    }

    fn config(&self) -> Result<Config> {
        if self.api_key.is_empty() {
            return Err(Error::Configuration("API key is required".into()));
        }
        let mut api_key_header = HeaderValue::from_str(&self.api_key).map_err(|_| {
            Error::Configuration("API key contains characters not allowed in a header".into())
        })?;
        api_key_header.set_sensitive(true);

        Ok(Config {
            api_key: self.api_key.clone(),
            api_key_header,
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy)
            .finish()
    }
}

fn proxy(url: &str) -> Result<reqwest::Proxy> {
    reqwest::Proxy::all(url).map_err(|e| Error::Configuration(format!("invalid proxy {url}: {e}")))
}

fn http_client_error(err: reqwest::Error) -> Error {
    Error::Configuration(format!("could not build HTTP client: {err}"))
}
