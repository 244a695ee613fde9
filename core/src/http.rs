//! The seam between `Resource` and whatever performs the HTTP call.
//!
//! # Design
//! `HttpClient` exposes one method per verb, mirroring the shape of a
//! typical blocking HTTP library: URL, query pairs, header pairs and, for
//! the verbs that carry one, a body. Implementations report only the
//! status code and the raw response text; turning that text into JSON is
//! `Response`'s job. Pairs are passed as ordered slices so an
//! implementation sees them in the order the caller registered them.

use std::fmt;

use serde_json::Value;

use crate::error::TransportError;

/// HTTP method of a dispatched call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a PUT, PATCH or POST call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// What an `HttpClient` hands back: the status and the undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub text: String,
}

/// A blocking HTTP client with one call per verb.
///
/// Errors are whatever the implementation considers a transport failure.
/// A non-2xx status is not one of them unless the implementation chooses
/// so; `UreqClient` returns every status as data.
pub trait HttpClient {
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;

    fn delete(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;

    fn put(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError>;

    fn patch(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError>;

    fn post(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        (**self).get(url, params, headers)
    }

    fn delete(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        (**self).delete(url, params, headers)
    }

    fn put(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        (**self).put(url, params, headers, body)
    }

    fn patch(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        (**self).patch(url, params, headers, body)
    }

    fn post(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        (**self).post(url, params, headers, body)
    }
}
