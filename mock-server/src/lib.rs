//! Echo server for exercising HTTP clients end to end.
//!
//! Every request that matches no other route is answered with `200` and a
//! JSON `Echo` of what arrived: method, path, query pairs, headers and the
//! raw body. `/plain` answers with a text body that is not JSON, and
//! `/status/{code}` answers with the requested status.

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const PLAIN_TEXT: &str = "plain text, not json";

/// A request as the server saw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Echo {
    /// First value of header `name`, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Router with the echo fallback, `/plain` and `/status/{code}`.
pub fn app() -> Router {
    Router::new()
        .route("/plain", any(plain))
        .route("/status/{code}", any(status))
        .fallback(echo)
}

/// Serve `app()` on `listener` until the server fails.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> Json<Echo> {
    debug!("echo {method} {uri}");
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        content_type,
        body,
    })
}

async fn plain() -> &'static str {
    PLAIN_TEXT
}

async fn status(Path(code): Path<u16>) -> (StatusCode, Json<serde_json::Value>) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(serde_json::json!({ "status": status.as_u16() })))
}
