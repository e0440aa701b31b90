//! Blocking TempMailChecker client.
//!
//! Same API as the async [`crate::Client`], but each call blocks the current
//! thread for one round trip. Build it with
//! [`ClientBuilder::build_blocking`](crate::ClientBuilder::build_blocking).
//! Do not use it from inside an async runtime.

use crate::client::Config;
use crate::request::ApiRequest;
use crate::response::interpret;
use crate::{CheckResult, ClientBuilder, Endpoint, Result, Usage};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Blocking client for the TempMailChecker API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: Config,
    proxy: Option<String>,
}

impl Client {
    /// Create a blocking client for the default (EU) endpoint.
    ///
    /// # Examples
    /// ```no_run
    /// # fn main() -> Result<(), tempmailchecker::Error> {
    /// let client = tempmailchecker::blocking::Client::new("your_api_key")?;
    /// println!("{}", client.is_disposable("user@gmail.com")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build_blocking()
    }

    /// Create a blocking client for a specific regional or custom endpoint.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<Endpoint>) -> Result<Self> {
        ClientBuilder::new(api_key).endpoint(endpoint).build_blocking()
    }

    pub(crate) fn from_parts(
        http: reqwest::blocking::Client,
        config: Config,
        proxy: Option<String>,
    ) -> Self {
        Self { http, config, proxy }
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

    /// Change the timeout, in seconds, for every later call. `0` disables it.
    pub fn set_timeout(&mut self, seconds: u64) -> &mut Self {
        self.config.timeout = Duration::from_secs(seconds);
        self
    }

    /// Check an email address and return the full response.
    pub fn check(&self, email: &str) -> Result<CheckResult> {
        self.send(ApiRequest::check_email(email)?)
    }

    /// Check a domain (or URL) and return the full response.
    pub fn check_domain(&self, domain: &str) -> Result<CheckResult> {
        self.send(ApiRequest::check_domain(domain)?)
    }

    /// Returns `true` if the email address is disposable.
    pub fn is_disposable(&self, email: &str) -> Result<bool> {
        Ok(self.check(email)?.temp)
    }

    /// Returns `true` if the domain is disposable.
    pub fn is_disposable_domain(&self, domain: &str) -> Result<bool> {
        Ok(self.check_domain(domain)?.temp)
    }

    /// Get API usage for today.
    pub fn usage(&self) -> Result<Usage> {
        self.send(ApiRequest::usage(&self.config.api_key))
    }

    fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = request.url(self.config.endpoint.base_url());
        debug!(path = request.path, endpoint = %self.config.endpoint, "sending request");

        let mut builder = self
            .http
            .get(url)
            .headers(self.config.headers(request.authenticated));
        if let Some(timeout) = self.config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(path = request.path, status, "received response");

        interpret(status, &body)
    }
}
