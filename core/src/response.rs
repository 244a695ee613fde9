//! The normalized result of a dispatched call.

use log::debug;
use serde_json::Value;

use crate::http::RawResponse;

/// Status code plus the body parsed as JSON.
///
/// `body` is `None` when the response text is not valid JSON (an empty
/// body included) and also when it is the JSON literal `null`. Callers
/// check for `None` instead of handling a parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Option<Value>,
}

impl Response {
    /// Wrap a raw reply, parsing its text as JSON.
    pub fn from_raw(raw: RawResponse) -> Self {
        let body = match serde_json::from_str::<Value>(&raw.text) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(e) => {
                debug!("response body with status {} is not JSON: {e}", raw.status_code);
                None
            }
        };
        Self {
            status: raw.status_code,
            body,
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<RawResponse> for Response {
    fn from(raw: RawResponse) -> Self {
        Self::from_raw(raw)
    }
}
