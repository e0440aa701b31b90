//! Regional API endpoints.

use std::fmt;

const EU_URL: &str = "https://tempmailchecker.com";
const US_URL: &str = "https://us.tempmailchecker.com";
const ASIA_URL: &str = "https://asia.tempmailchecker.com";

/// Base URL the client talks to.
///
/// All regions serve the same API; `/check` and `/usage` hang directly off the
/// base with no extra prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// Primary endpoint in the EU. Used when nothing else is configured.
    #[default]
    Eu,
    /// US endpoint.
    Us,
    /// Asia endpoint.
    Asia,
    /// Any other base URL, e.g. a mock server in tests.
    Custom(String),
}

impl Endpoint {
    /// The base URL for this endpoint, as configured.
    pub fn base_url(&self) -> &str {
        match self {
            Endpoint::Eu => EU_URL,
            Endpoint::Us => US_URL,
            Endpoint::Asia => ASIA_URL,
            Endpoint::Custom(url) => url,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(url: &str) -> Self {
        match url.strip_suffix('/').unwrap_or(url) {
            EU_URL => Endpoint::Eu,
            US_URL => Endpoint::Us,
            ASIA_URL => Endpoint::Asia,
            _ => Endpoint::Custom(url.to_string()),
        }
    }
}

impl From<String> for Endpoint {
    fn from(url: String) -> Self {
        Endpoint::from(url.as_str())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eu() {
        assert_eq!(Endpoint::default(), Endpoint::Eu);
        assert_eq!(Endpoint::default().base_url(), "https://tempmailchecker.com");
    }

    #[test]
    fn known_urls_map_to_regions() {
        assert_eq!(Endpoint::from("https://us.tempmailchecker.com"), Endpoint::Us);
        assert_eq!(Endpoint::from("https://asia.tempmailchecker.com/"), Endpoint::Asia);
        assert_eq!(Endpoint::from("https://tempmailchecker.com".to_string()), Endpoint::Eu);
    }

    #[test]
    fn unknown_url_is_custom() {
        let endpoint = Endpoint::from("http://127.0.0.1:9000/");
        assert_eq!(endpoint, Endpoint::Custom("http://127.0.0.1:9000/".into()));
        assert_eq!(endpoint.to_string(), "http://127.0.0.1:9000/");
    }
}
