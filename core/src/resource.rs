//! The templated REST resource builder.
//!
//! # Design
//! A `Resource` owns a parsed `Template`, the values assigned to its
//! placeholders, three ordered key/value lists (query params, headers,
//! body data) and the `HttpClient` that performs calls. The set of
//! placeholder names is fixed when the resource is built; any other name
//! is rejected with `UnknownPlaceholder`.
//!
//! Verb methods borrow the resource immutably, so one resource can issue
//! any number of calls. Each call renders the URL first; an incomplete
//! template fails with `TemplateIncomplete` before the client is touched.

use log::debug;
use serde_json::{Map, Value};

use crate::client::UreqClient;
use crate::error::{ResourceError, TransportError};
use crate::http::{HttpClient, HttpMethod, RawResponse, RequestBody};
use crate::response::Response;
use crate::template::Template;

/// A URL template plus everything needed to call it.
#[derive(Debug, Clone)]
pub struct Resource<C = UreqClient> {
    template: Template,
    placeholders: Vec<(String, Option<String>)>,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    data: Vec<(String, String)>,
    client: C,
}

impl Resource<UreqClient> {
    /// Build a resource that calls out through a default `UreqClient`.
    pub fn new(template: &str) -> Self {
        Self::with_client(template, UreqClient::new())
    }
}

impl<C> Resource<C> {
    /// Build a resource that calls out through `client`.
    ///
    /// Every `{name}` in `template` becomes a placeholder, initially unset.
    pub fn with_client(template: &str, client: C) -> Self {
        let template = Template::parse(template);
        let placeholders = template
            .names()
            .into_iter()
            .map(|name| (name.to_string(), None))
            .collect();
        Self {
            template,
            placeholders,
            params: Vec::new(),
            headers: Vec::new(),
            data: Vec::new(),
            client,
        }
    }

    /// The template as it was given.
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    /// The client calls go out through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Current value of placeholder `name`, `None` while unset.
    pub fn placeholder(&self, name: &str) -> Result<Option<&str>, ResourceError> {
        self.slot(name).map(|value| value.as_deref())
    }

    /// All placeholders with their current values, in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.placeholders
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Assign placeholder `name`. Returns `self` for chaining.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self, ResourceError> {
        *self.slot_mut(name)? = Some(value.into());
        Ok(self)
    }

    /// Reset placeholder `name` to unset.
    pub fn clear(&mut self, name: &str) -> Result<&mut Self, ResourceError> {
        *self.slot_mut(name)? = None;
        Ok(self)
    }

    /// True when every placeholder has a value.
    pub fn is_valid(&self) -> bool {
        self.placeholders.iter().all(|(_, value)| value.is_some())
    }

    /// Names of the placeholders that are still unset.
    pub fn missing(&self) -> Vec<&str> {
        self.placeholders
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Render the concrete URL.
    ///
    /// Fails with `TemplateIncomplete` if any placeholder is unset.
    pub fn to_url(&self) -> Result<String, ResourceError> {
        self.template.render(|name| {
            self.placeholders
                .iter()
                .find(|(key, _)| key == name)
                .and_then(|(_, value)| value.as_deref())
        })
    }

    /// Set query parameter `key`, replacing any earlier value in place.
    pub fn param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        upsert(&mut self.params, key.into(), value.into());
        self
    }

    /// Set header `key`, replacing any earlier value in place.
    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        upsert(&mut self.headers, key.into(), value.into());
        self
    }

    /// Set body field `key`, replacing any earlier value in place.
    pub fn data(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        upsert(&mut self.data, key.into(), value.into());
        self
    }

    /// Query parameters in registration order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Headers in registration order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Body fields in registration order.
    pub fn data_fields(&self) -> &[(String, String)] {
        &self.data
    }

    fn slot(&self, name: &str) -> Result<&Option<String>, ResourceError> {
        self.placeholders
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| ResourceError::UnknownPlaceholder(name.to_string()))
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Option<String>, ResourceError> {
        self.placeholders
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| ResourceError::UnknownPlaceholder(name.to_string()))
    }

    fn json_body(&self) -> RequestBody {
        let fields: Map<String, Value> = self
            .data
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        RequestBody::Json(Value::Object(fields))
    }

    fn form_body(&self) -> RequestBody {
        RequestBody::Form(self.data.clone())
    }
}

impl<C: HttpClient> Resource<C> {
    /// GET with params and headers, no body.
    pub fn get(&self) -> Result<Response, ResourceError> {
        self.dispatch(HttpMethod::Get, |client, url| {
            client.get(url, &self.params, &self.headers)
        })
    }

    /// DELETE with params and headers, no body.
    pub fn delete(&self) -> Result<Response, ResourceError> {
        self.dispatch(HttpMethod::Delete, |client, url| {
            client.delete(url, &self.params, &self.headers)
        })
    }

    /// PUT with the data fields as a JSON object body.
    pub fn put(&self) -> Result<Response, ResourceError> {
        self.dispatch(HttpMethod::Put, |client, url| {
            client.put(url, &self.params, &self.headers, self.json_body())
        })
    }

    /// PATCH with the data fields as a JSON object body.
    pub fn patch(&self) -> Result<Response, ResourceError> {
        self.dispatch(HttpMethod::Patch, |client, url| {
            client.patch(url, &self.params, &self.headers, self.json_body())
        })
    }

    /// POST the data fields, form-encoded when `form` is true and as a
    /// JSON object otherwise.
    pub fn post(&self, form: bool) -> Result<Response, ResourceError> {
        let body = if form {
            self.form_body()
        } else {
            self.json_body()
        };
        self.dispatch(HttpMethod::Post, |client, url| {
            client.post(url, &self.params, &self.headers, body)
        })
    }

    fn dispatch<F>(&self, method: HttpMethod, call: F) -> Result<Response, ResourceError>
    where
        F: FnOnce(&C, &str) -> Result<RawResponse, TransportError>,
    {
        let url = self.to_url()?;
        debug!("{method} {url}");
        let raw = call(&self.client, &url)?;
        let response = Response::from_raw(raw);
        debug!("{method} {url} -> {}", response.status);
        Ok(response)
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some(entry) => entry.1 = value,
        None => pairs.push((key, value)),
    }
}
