//! # TempMailChecker Client
//! Rust client for the TempMailChecker API, which tells whether an email address or a domain belongs to a disposable (temporary) mail provider, using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For sign-up forms, lead pipelines and abuse checks that want to reject throwaway addresses: create a client with your API key, call [`Client::is_disposable`] or [`Client::check`], and watch your quota with [`Client::usage`].
//!
//! ## Runtime requirements
//! [`Client`] is async and runs on any Tokio (v1) runtime through `reqwest`. With the default `blocking` feature, [`blocking::Client`] offers the same calls without a runtime.
//!
//! ## Out of scope
//! The library does not detect disposable addresses itself; every answer comes from the remote service. It does not cache, retry or rate-limit on the client side.
//!
//! ## Errors
//! Empty or malformed input fails with [`Error::Validation`] before any request is sent. Transport failures are [`Error::Transport`], HTTP 429 is [`Error::RateLimited`], other non-200 statuses are [`Error::Api`], and unreadable 200 bodies are [`Error::Decode`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use tempmailchecker::{Client, Endpoint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tempmailchecker::Error> {
//!     let client = Client::with_endpoint("your_api_key", Endpoint::Us)?;
//!
//!     if client.is_disposable("test@10minutemail.com").await? {
//!         println!("Disposable address");
//!     }
//!
//!     let usage = client.usage().await?;
//!     println!("Used {} of {} today", usage.usage_today, usage.limit);
//!     Ok(())
//! }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
mod client;
mod endpoint;
mod error;
mod models;
mod request;
mod response;

pub use client::{Client, ClientBuilder};
pub use endpoint::Endpoint;
pub use error::Error;
pub use models::{CheckResult, Usage};
pub use request::{normalize_domain, validate_email};

/// Result type alias for TempMailChecker operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
