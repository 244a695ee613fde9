//! Blocking `HttpClient` backed by `ureq`.
//!
//! # Design
//! The agent is built with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and the caller decides what a status means.
//! Connection failures, timeouts and body read errors are boxed and
//! returned unchanged. Timeouts live here, on the agent, and not on
//! `Resource`.

use std::time::Duration;

use serde::Deserialize;
use ureq::http::Response as UreqResponse;
use ureq::typestate::WithBody;
use ureq::{Agent, Body, RequestBuilder};

use crate::error::TransportError;
use crate::http::{HttpClient, RawResponse, RequestBody};

/// Settings applied to the underlying agent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Upper bound for a whole call, from connect to the last body byte.
    #[serde(default)]
    pub timeout: Option<Duration>,
}

/// `HttpClient` over a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: Agent,
}

impl UreqClient {
    /// Client with default settings and no timeout.
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::default())
    }

    /// Client whose agent is configured from `config`.
    pub fn with_config(config: &ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let response = with_pairs(self.agent.get(url), params, headers).call()?;
        read(response)
    }

    fn delete(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let response = with_pairs(self.agent.delete(url), params, headers).call()?;
        read(response)
    }

    fn put(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        send(with_pairs(self.agent.put(url), params, headers), body)
    }

    fn patch(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        send(with_pairs(self.agent.patch(url), params, headers), body)
    }

    fn post(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        send(with_pairs(self.agent.post(url), params, headers), body)
    }
}

fn with_pairs<B>(
    mut request: RequestBuilder<B>,
    params: &[(String, String)],
    headers: &[(String, String)],
) -> RequestBuilder<B> {
    for (key, value) in params {
        request = request.query(key, value);
    }
    for (key, value) in headers {
        request = request.header(key.as_str(), value.as_str());
    }
    request
}

fn send(request: RequestBuilder<WithBody>, body: RequestBody) -> Result<RawResponse, TransportError> {
    let response = match body {
        RequestBody::Json(value) => request.send_json(&value)?,
        RequestBody::Form(pairs) => request.send_form(pairs)?,
    };
    read(response)
}

fn read(mut response: UreqResponse<Body>) -> Result<RawResponse, TransportError> {
    let status_code = response.status().as_u16();
    let text = response.body_mut().read_to_string()?;
    Ok(RawResponse { status_code, text })
}
