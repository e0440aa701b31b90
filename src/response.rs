//! Mapping of raw HTTP responses onto typed results or classified errors.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

const DEFAULT_RATE_LIMIT_MESSAGE: &str = "Daily limit reached";
const DEFAULT_API_ERROR_MESSAGE: &str = "API request failed";

/// Interpret a status code and body returned by the service.
///
/// - `429` becomes [`Error::RateLimited`] with the body's `message`.
/// - Any other non-200 status becomes [`Error::Api`] with the body's `error`.
/// - `200` is decoded into `T`; bad JSON or a missing required field is
///   [`Error::Decode`].
pub(crate) fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    match status {
        200 => {
            let value: Value = serde_json::from_str(body)?;
            Ok(serde_json::from_value(value)?)
        }
        429 => Err(Error::RateLimited {
            message: string_field(body, "message")
                .unwrap_or_else(|| DEFAULT_RATE_LIMIT_MESSAGE.to_string()),
        }),
        status => Err(Error::Api {
            status,
            message: string_field(body, "error")
                .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string()),
        }),
    }
}

/// Best-effort lookup of a string field in an error body.
fn string_field(body: &str, field: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get(field)?
        .as_str()
        .map(str::to_string)
}
