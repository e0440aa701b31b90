use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of a `/check` call for an email address or a domain.
///
/// Only `temp` is interpreted; every other field the service returns is kept
/// untouched in [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the address or domain belongs to a disposable mail provider.
    pub temp: bool,
    /// Remaining fields of the response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CheckResult {
    /// Shorthand for `self.temp`.
    pub fn is_disposable(&self) -> bool {
        self.temp
    }
}

/// Quota information returned by `/usage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Requests made today.
    pub usage_today: u64,
    /// Daily request limit.
    pub limit: u64,
    /// When the counter resets, as reported by the service.
    pub reset: String,
    /// Remaining fields of the response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Usage {
    /// Requests left before the daily limit is reached.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.usage_today)
    }
}
