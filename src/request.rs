//! Request construction: input validation, domain normalization and URL assembly.

use crate::{Error, Result};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

/// Header carrying the API key on authenticated calls.
pub(crate) const API_KEY_HEADER: &str = "X-API-Key";

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[^"\\\r\n]|\\[^\r\n])*")@(?:(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+(?:[A-Za-z][A-Za-z0-9]*|xn--[A-Za-z0-9-]+)|\[(?P<ipv4>[0-9.]+)\]|\[IPv6:(?P<ipv6>[0-9A-Fa-f:.]+)\])$"#,
    )
    .expect("email pattern compiles")
});

/// A logical API call, before it is bound to a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiRequest {
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    /// Whether the `X-API-Key` header is attached.
    pub authenticated: bool,
}

impl ApiRequest {
    /// `GET /check?email=...`, after validating the address.
    pub fn check_email(email: &str) -> Result<Self> {
        validate_email(email)?;
        Ok(Self {
            path: "/check",
            query: vec![("email", email.to_string())],
            authenticated: true,
        })
    }

    /// `GET /check?domain=...`, with the domain reduced to a bare host.
    pub fn check_domain(domain: &str) -> Result<Self> {
        if domain.is_empty() {
            return Err(Error::Validation("Domain is required".into()));
        }
        let host = normalize_domain(domain);
        if host.is_empty() {
            return Err(Error::Validation(format!(
                "Domain '{domain}' has no host part"
            )));
        }
        Ok(Self {
            path: "/check",
            query: vec![("domain", host.to_string())],
            authenticated: true,
        })
    }

    /// `GET /usage?key=...`.
    ///
    /// The usage endpoint takes the key as a query parameter and is sent
    /// without the `X-API-Key` header.
    pub fn usage(api_key: &str) -> Self {
        Self {
            path: "/usage",
            query: vec![("key", api_key.to_string())],
            authenticated: false,
        }
    }

    /// Full URL for this request against `base`.
    pub fn url(&self, base: &str) -> String {
        build_url(base, self.path, &self.query)
    }
}

/// Join a base URL, an absolute path and url-encoded query parameters.
///
/// A trailing slash on `base` is dropped, and `?` is only added when there is
/// at least one parameter.
pub(crate) fn build_url<K, V>(base: &str, path: &str, query: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);
    if !query.is_empty() {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
            .finish();
        url.push('?');
        url.push_str(&encoded);
    }
    url
}

/// Reduce user input like `https://tempmail.com:8080/path` to `tempmail.com`.
///
/// Strips a leading `http://` or `https://`, then everything from the first
/// `/`, then everything from the first `:`. Normalizing an already bare host
/// returns it unchanged.
pub fn normalize_domain(input: &str) -> &str {
    let host = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input);
    let host = host.split('/').next().unwrap_or(host);
    host.split(':').next().unwrap_or(host)
}

/// Check that `email` is non-empty and syntactically a mailbox address.
///
/// The local part is a dot-atom or a quoted string. The domain is a dotted
/// host name (punycode TLDs included) or an `[IPv4]` / `[IPv6:...]` literal.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(Error::Validation("Email address is required".into()));
    }
    if !is_well_formed(email) {
        return Err(Error::Validation("Invalid email address format".into()));
    }
    Ok(())
}

fn is_well_formed(email: &str) -> bool {
    let local_len = email.rsplit_once('@').map_or(0, |(local, _)| local.len());
    if email.len() > MAX_EMAIL_LEN || local_len > MAX_LOCAL_LEN {
        return false;
    }
    let Some(caps) = EMAIL_RE.captures(email) else {
        return false;
    };
    if let Some(ip) = caps.name("ipv4") {
        return ip.as_str().parse::<Ipv4Addr>().is_ok();
    }
    if let Some(ip) = caps.name("ipv6") {
        return ip.as_str().parse::<Ipv6Addr>().is_ok();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_scheme_path_and_port() {
        assert_eq!(normalize_domain("https://tempmail.com:8080/path"), "tempmail.com");
        assert_eq!(normalize_domain("http://tempmail.com/a/b?c=d"), "tempmail.com");
        assert_eq!(normalize_domain("tempmail.com:443"), "tempmail.com");
        assert_eq!(normalize_domain("tempmail.com"), "tempmail.com");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["https://tempmail.com:8080/path", "mailinator.com", "http://x.io/"] {
            let once = normalize_domain(input);
            assert_eq!(normalize_domain(once), once);
        }
    }

    #[test]
    fn normalize_only_strips_lowercase_http_schemes() {
        assert_eq!(normalize_domain("ftp://tempmail.com"), "ftp");
        assert_eq!(normalize_domain("HTTPS://tempmail.com"), "HTTPS");
    }

    #[test]
    fn valid_emails_pass() {
        for email in [
            "user@gmail.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@example.org",
            "a_b-c@my-domain.io",
            "user@example.xn--p1ai",
            "user@example.c",
            "user@mail.example.io2",
            "user@[127.0.0.1]",
            "user@[IPv6:2001:db8::1]",
            "\"john doe\"@example.com",
            "\"a@b\"@example.com",
        ] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@example",
            "user@-example.com",
            "user@example.123",
            "user@example.com-",
            "user@[999.1.1.1]",
            "user@[IPv6:2001:db8::zz]",
            "user@[IPv6:1:2:3]",
            "\"unterminated@example.com",
            "\"line\nbreak\"@example.com",
            ".user@example.com",
            "us..er@example.com",
            "user name@example.com",
        ] {
            match validate_email(email) {
                Err(Error::Validation(msg)) => assert_eq!(msg, "Invalid email address format"),
                other => panic!("{email}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn overlong_local_part_is_rejected() {
        let email = format!("{}@example.com", "a".repeat(65));
        assert!(validate_email(&email).is_err());
    }

    #[test]
    fn overlong_quoted_local_part_is_rejected() {
        let email = format!("\"{}\"@example.com", "a".repeat(63));
        assert!(validate_email(&email).is_err());
    }

    #[test]
    fn empty_email_is_required() {
        match validate_email("") {
            Err(Error::Validation(msg)) => assert_eq!(msg, "Email address is required"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn build_url_trims_slash_and_encodes_query() {
        let url = build_url("https://tempmailchecker.com/", "/check", &[("email", "a+b@x.com")]);
        assert_eq!(url, "https://tempmailchecker.com/check?email=a%2Bb%40x.com");
    }

    #[test]
    fn build_url_without_query_has_no_question_mark() {
        let query: [(&str, &str); 0] = [];
        assert_eq!(build_url("http://h", "/usage", &query), "http://h/usage");
    }

    #[test]
    fn build_url_joins_pairs_with_ampersand() {
        let url = build_url("http://h", "/check", &[("a", "1 2"), ("b", "3")]);
        assert_eq!(url, "http://h/check?a=1+2&b=3");
    }

    #[test]
    fn check_domain_request_is_normalized_and_authenticated() {
        let req = ApiRequest::check_domain("https://tempmail.com:8080/path").unwrap();
        assert_eq!(req.url("http://h"), "http://h/check?domain=tempmail.com");
        assert!(req.authenticated);
    }

    #[test]
    fn check_domain_rejects_empty_and_hostless_input() {
        assert!(matches!(ApiRequest::check_domain(""), Err(Error::Validation(_))));
        assert!(matches!(ApiRequest::check_domain("https://"), Err(Error::Validation(_))));
    }

    #[test]
    fn zero_is_a_domain_not_an_empty_input() {
        let req = ApiRequest::check_domain("0").unwrap();
        assert_eq!(req.query, vec![("domain", "0".to_string())]);
    }

    #[test]
    fn usage_request_passes_key_as_query_without_header() {
        let req = ApiRequest::usage("secret key");
        assert!(!req.authenticated);
        assert_eq!(req.url("http://h"), "http://h/usage?key=secret+key");
    }

    #[test]
    fn check_email_request_is_authenticated() {
        let req = ApiRequest::check_email("user@gmail.com").unwrap();
        assert!(req.authenticated);
        assert_eq!(req.query, vec![("email", "user@gmail.com".to_string())]);
    }
}
