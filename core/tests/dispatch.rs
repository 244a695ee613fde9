//! Verb dispatch against a recording `HttpClient`.
//!
//! Each test issues one call and checks exactly which client method ran
//! and with what arguments, then checks how the canned raw response was
//! wrapped.

use std::cell::RefCell;

use resourcer::{
    HttpClient, HttpMethod, RawResponse, RequestBody, Resource, ResourceError, TransportError,
};
use serde_json::json;

const EXPECTED_URL: &str = "https://example.com/tag/coding";

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: HttpMethod,
    url: String,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
}

/// Records every call and answers with a fixed raw response, or fails
/// every call when `fail` is set.
struct Recorder {
    calls: RefCell<Vec<Call>>,
    reply: RawResponse,
    fail: bool,
}

impl Recorder {
    fn replying(status_code: u16, text: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            reply: RawResponse {
                status_code,
                text: text.to_string(),
            },
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::replying(0, "")
        }
    }

    fn record(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: Option<RequestBody>,
    ) -> Result<RawResponse, TransportError> {
        self.calls.borrow_mut().push(Call {
            method,
            url: url.to_string(),
            params: params.to_vec(),
            headers: headers.to_vec(),
            body,
        });
        if self.fail {
            return Err("connection reset by peer".into());
        }
        Ok(self.reply.clone())
    }

    fn only_call(&self) -> Call {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls[0].clone()
    }
}

impl HttpClient for Recorder {
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        self.record(HttpMethod::Get, url, params, headers, None)
    }

    fn delete(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        self.record(HttpMethod::Delete, url, params, headers, None)
    }

    fn put(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        self.record(HttpMethod::Put, url, params, headers, Some(body))
    }

    fn patch(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        self.record(HttpMethod::Patch, url, params, headers, Some(body))
    }

    fn post(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
        body: RequestBody,
    ) -> Result<RawResponse, TransportError> {
        self.record(HttpMethod::Post, url, params, headers, Some(body))
    }
}

fn pairs(prefix: &str) -> Vec<(String, String)> {
    vec![
        (format!("{prefix}1"), "value1".to_string()),
        (format!("{prefix}2"), "value2".to_string()),
    ]
}

fn resource(client: &Recorder) -> Resource<&Recorder> {
    let mut resource = Resource::with_client("https://{domain}/{path1}/{path2}", client);
    resource.set("domain", "example.com").unwrap();
    resource.set("path1", "tag").unwrap();
    resource.set("path2", "coding").unwrap();

    resource.param("param1", "value1").param("param2", "value2");
    resource.header("header1", "value1").header("header2", "value2");
    resource.data("data1", "value1").data("data2", "value2");
    resource
}

fn expected(method: HttpMethod, body: Option<RequestBody>) -> Call {
    Call {
        method,
        url: EXPECTED_URL.to_string(),
        params: pairs("param"),
        headers: pairs("header"),
        body,
    }
}

fn json_data() -> Option<RequestBody> {
    Some(RequestBody::Json(json!({"data1": "value1", "data2": "value2"})))
}

#[test]
fn get_sends_params_and_headers_only() {
    let client = Recorder::replying(200, r#"{"k1": "v1"}"#);
    let response = resource(&client).get().unwrap();

    assert_eq!(client.only_call(), expected(HttpMethod::Get, None));
    assert_eq!(response.status, 200);
    assert_eq!(response.body, Some(json!({"k1": "v1"})));
}

#[test]
fn delete_sends_params_and_headers_only() {
    let client = Recorder::replying(200, r#"{"k1": "v1"}"#);
    resource(&client).delete().unwrap();

    assert_eq!(client.only_call(), expected(HttpMethod::Delete, None));
}

#[test]
fn put_sends_json_data() {
    let client = Recorder::replying(200, r#"{"k1": "v1"}"#);
    resource(&client).put().unwrap();

    assert_eq!(client.only_call(), expected(HttpMethod::Put, json_data()));
}

#[test]
fn patch_sends_json_data() {
    let client = Recorder::replying(200, r#"{"k1": "v1"}"#);
    resource(&client).patch().unwrap();

    assert_eq!(client.only_call(), expected(HttpMethod::Patch, json_data()));
}

#[test]
fn post_defaults_to_json_data() {
    let client = Recorder::replying(200, r#"{"k1": "v1"}"#);
    resource(&client).post(false).unwrap();

    assert_eq!(client.only_call(), expected(HttpMethod::Post, json_data()));
}

#[test]
fn post_form_sends_form_data() {
    let client = Recorder::replying(200, r#"{"k1": "v1"}"#);
    resource(&client).post(true).unwrap();

    assert_eq!(
        client.only_call(),
        expected(HttpMethod::Post, Some(RequestBody::Form(pairs("data"))))
    );
}

#[test]
fn json_body_goes_out_in_registration_order() {
    let client = Recorder::replying(200, "{}");
    let mut resource = Resource::with_client("https://example.com/items", &client);
    resource.data("zeta", "1").data("alpha", "2");
    resource.put().unwrap();

    let Some(RequestBody::Json(body)) = client.only_call().body else {
        panic!("expected a JSON body");
    };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"zeta":"1","alpha":"2"}"#);
}

#[test]
fn non_json_reply_yields_empty_body() {
    let client = Recorder::replying(500, "Internal Server Error");
    let response = resource(&client).get().unwrap();

    assert_eq!(response.status, 500);
    assert!(response.body.is_none());
}

#[test]
fn incomplete_template_never_reaches_client() {
    let client = Recorder::replying(200, "{}");
    let mut resource = resource(&client);
    resource.clear("domain").unwrap();

    let err = resource.post(false).unwrap_err();
    assert!(matches!(err, ResourceError::TemplateIncomplete { .. }));
    assert!(client.calls.borrow().is_empty());
}

#[test]
fn transport_error_passes_through() {
    let client = Recorder::failing();
    let err = resource(&client).put().unwrap_err();

    match err {
        ResourceError::Transport(inner) => {
            assert_eq!(inner.to_string(), "connection reset by peer");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(client.calls.borrow().len(), 1);
}

#[test]
fn resource_is_reusable_across_calls() {
    let client = Recorder::replying(204, "");
    let mut resource = resource(&client);

    resource.get().unwrap();
    resource.set("path2", "rust").unwrap();
    resource.delete().unwrap();

    let calls = client.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].url, EXPECTED_URL);
    assert_eq!(calls[1].method, HttpMethod::Delete);
    assert_eq!(calls[1].url, "https://example.com/tag/rust");
}
