//! Generic request building.
//!
//! Every endpoint wrapper is a plain function returning an [`ApiRequest<T>`] configured
//! with a method, a path template, its parameters and a response decoder. Outbound JSON
//! bodies go through [`snake_case_keys`]; inbound JSON goes through [`camel_case_keys`]
//! before being deserialized into the client models.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::client::{
    api::{
        case::{camel_case_keys, snake_case_keys},
        pagination::{extract_pagination, unwrap_item, Paginated},
    },
    model::error::ApiError,
    util::path::encode_component,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Text(String),
}

type Decoder<T> = fn(u64, &str) -> Result<T, ApiError>;

/// A fully described call against the panel API.
///
/// Nothing is sent until [`ApiRequest::send`] is awaited. A body that fails to serialize
/// is kept as an error and reported by `send`, so building a request never fails.
pub struct ApiRequest<T> {
    method: Method,
    template: String,
    params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Result<Body, ApiError>,
    decoder: Decoder<T>,
}

impl ApiRequest<()> {
    pub fn new(method: Method, template: impl Into<String>) -> Self {
        Self {
            method,
            template: template.into(),
            params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Ok(Body::Empty),
            decoder: decode_empty,
        }
    }

    pub fn get(template: impl Into<String>) -> Self {
        Self::new(Method::Get, template)
    }

    pub fn post(template: impl Into<String>) -> Self {
        Self::new(Method::Post, template)
    }

    pub fn patch(template: impl Into<String>) -> Self {
        Self::new(Method::Patch, template)
    }

    pub fn put(template: impl Into<String>) -> Self {
        Self::new(Method::Put, template)
    }

    pub fn delete(template: impl Into<String>) -> Self {
        Self::new(Method::Delete, template)
    }
}

impl<T> ApiRequest<T> {
    /// Fills the `{name}` placeholder of the path template. Values are percent-encoded.
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds the query parameter only when a value is present.
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Serializes `payload` and rewrites its keys to snake_case.
    pub fn json_body<B: Serialize>(mut self, payload: &B) -> Self {
        self.body = serde_json::to_value(payload)
            .map(|value| Body::Json(snake_case_keys(value)))
            .map_err(ApiError::serialization);
        self
    }

    /// Sends `text` verbatim.
    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.body = Ok(Body::Text(text.into()));
        self
    }

    fn with_decoder<U>(self, decoder: Decoder<U>) -> ApiRequest<U> {
        ApiRequest {
            method: self.method,
            template: self.template,
            params: self.params,
            query: self.query,
            headers: self.headers,
            body: self.body,
            decoder,
        }
    }

    /// Decodes the response as plain JSON.
    pub fn json<U: DeserializeOwned>(self) -> ApiRequest<U> {
        self.with_decoder(decode_json::<U>)
    }

    /// Decodes a single fractal object, unwrapping its `attributes`.
    pub fn item<U: DeserializeOwned>(self) -> ApiRequest<U> {
        self.with_decoder(decode_item::<U>)
    }

    /// Decodes a list envelope with pagination metadata.
    pub fn paginated<U: DeserializeOwned>(self) -> ApiRequest<Paginated<U>> {
        self.with_decoder(decode_paginated::<U>)
    }

    /// Decodes a list envelope, discarding the pagination metadata.
    pub fn list<U: DeserializeOwned>(self) -> ApiRequest<Vec<U>> {
        self.with_decoder(decode_list::<U>)
    }

    /// Keeps the raw response text.
    pub fn text(self) -> ApiRequest<String> {
        self.with_decoder(decode_text)
    }

    /// Ignores the response body.
    pub fn empty(self) -> ApiRequest<()> {
        self.with_decoder(decode_empty)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Result<&Body, ApiError> {
        self.body.as_ref().map_err(Clone::clone)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Path with placeholders substituted. Unknown placeholders are left in place.
    pub fn path(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    match self.params.iter().find(|(key, _)| key == name) {
                        Some((_, value)) => out.push_str(&encode_component(value)),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Absolute or relative URL for this request, `base` being the panel origin.
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path());
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Runs the configured decoder over a response body.
    pub fn decode(&self, status: u64, body: &str) -> Result<T, ApiError> {
        (self.decoder)(status, body)
    }
}

#[cfg(feature = "web")]
impl<T> ApiRequest<T> {
    /// Sends the request with the session cookie and resolves to the decoded payload.
    ///
    /// Non-2xx responses are turned into [`ApiError::from_response`]; nothing is retried.
    pub async fn send(self) -> Result<T, ApiError> {
        use dioxus_logger::tracing;
        use reqwasm::http::{Request, RequestCredentials};

        let url = self.url(&crate::client::config::ClientConfig::from_env().api_base);
        let body = self.body.clone()?;

        let mut request = match self.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
            Method::Patch => Request::new(&url).method(reqwasm::http::Method::PATCH),
        }
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest");

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        request = match body {
            Body::Empty => request,
            Body::Json(value) => request
                .header("Content-Type", "application/json")
                .body(value.to_string()),
            Body::Text(text) => request.header("Content-Type", "text/plain").body(text),
        };

        tracing::debug!("{} {}", self.method, url);

        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status() as u64;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::decode(status, e))?;

        if (200..300).contains(&status) {
            self.decode(status, &text)
        } else {
            tracing::warn!("{} {} failed with status {}", self.method, url, status);
            Err(ApiError::from_response(status, &text))
        }
    }
}

fn parse_value(status: u64, body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::decode(status, e))
}

fn from_client_value<U: DeserializeOwned>(status: u64, value: Value) -> Result<U, ApiError> {
    serde_json::from_value(camel_case_keys(value)).map_err(|e| ApiError::decode(status, e))
}

fn decode_json<U: DeserializeOwned>(status: u64, body: &str) -> Result<U, ApiError> {
    from_client_value(status, parse_value(status, body)?)
}

fn decode_item<U: DeserializeOwned>(status: u64, body: &str) -> Result<U, ApiError> {
    from_client_value(status, unwrap_item(parse_value(status, body)?))
}

fn decode_paginated<U: DeserializeOwned>(status: u64, body: &str) -> Result<Paginated<U>, ApiError> {
    extract_pagination(&parse_value(status, body)?).try_map(|item| from_client_value(status, item))
}

fn decode_list<U: DeserializeOwned>(status: u64, body: &str) -> Result<Vec<U>, ApiError> {
    decode_paginated(status, body).map(|page| page.items)
}

fn decode_text(_status: u64, body: &str) -> Result<String, ApiError> {
    Ok(body.to_string())
}

fn decode_empty(_status: u64, _body: &str) -> Result<(), ApiError> {
    Ok(())
}
