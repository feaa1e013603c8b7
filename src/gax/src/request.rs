// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Transport-neutral requests.
//!
//! Each options type in the client library knows how to turn itself into an
//! [HttpRequest]: the method, path, query string, headers, and body of the
//! call. The client library does not send these requests, an HTTP transport
//! provided by the application consumes them and decodes the response with
//! [decode][crate::response::decode].

use crate::Result;
use crate::client_config::ClientConfig;
use crate::error::Error;
use crate::query_parameter::{self, QueryParameter, QueryPairs};
use crate::request_parameter::RequestParameter;
use http::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

/// The header used to report the service and operation to the backend.
pub const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// Binds an options value to a request.
///
/// Implemented by every options type in the client library. The associated
/// `Response` type is the model returned by the operation, `()` if the
/// operation returns no content.
pub trait Binding {
    type Response: serde::de::DeserializeOwned;

    /// Returns the request for this operation.
    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest>;
}

/// The body of a request.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Body {
    /// The request has no body.
    #[default]
    Empty,
    /// A `application/json` body.
    Json(serde_json::Value),
    /// A `multipart/form-data` body.
    Multipart(Vec<FormPart>),
}

/// One part in a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPart {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    content: bytes::Bytes,
}

impl FormPart {
    /// Creates a part with the given form field name and content.
    pub fn new<N: Into<String>, C: Into<bytes::Bytes>>(name: N, content: C) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            content: content.into(),
        }
    }

    /// Creates a part holding the JSON representation of `value`.
    pub fn json<N: Into<String>, T: serde::Serialize>(name: N, value: &T) -> Result<Self> {
        let content = serde_json::to_vec(value).map_err(Error::ser)?;
        Ok(Self::new(name, content).set_content_type("application/json"))
    }

    /// Sets the filename reported in the `Content-Disposition` of the part.
    pub fn set_filename<T: Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets the content type of the part.
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Sets or clears the content type of the part.
    pub fn set_or_clear_content_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_type = v.map(Into::into);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn content(&self) -> &bytes::Bytes {
        &self.content
    }
}

/// A fully bound request, ready for an HTTP transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    method: http::Method,
    service_url: String,
    path: String,
    query: QueryPairs,
    headers: HeaderMap,
    body: Body,
}

impl HttpRequest {
    /// Starts a request for `operation_id`.
    ///
    /// The request includes the `version` query parameter and the analytics
    /// header, which the service requires on all calls.
    pub fn new(
        method: http::Method,
        config: &ClientConfig,
        path: String,
        operation_id: &str,
    ) -> Result<Self> {
        tracing::debug!(%method, %path, operation_id, "binding request");
        let mut query = QueryPairs::new();
        query_parameter::add(&mut query, "version", &config.version());
        let analytics = format!(
            "service_name={};service_version=v2;operation_id={operation_id}",
            config.service_name()
        );
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(ANALYTICS_HEADER),
            HeaderValue::try_from(analytics).map_err(Error::invalid_argument)?,
        );
        Ok(Self {
            method,
            service_url: config.service_url().to_string(),
            path,
            query,
            headers,
            body: Body::Empty,
        })
    }

    /// Adds `Accept: application/json`, for operations with a response body.
    pub fn accept_json(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        self
    }

    /// Adds a query parameter, skipping unset values.
    pub fn query<T: QueryParameter>(mut self, name: &str, value: &T) -> Self {
        query_parameter::add(&mut self.query, name, value);
        self
    }

    /// Adds a header, skipping unset values.
    ///
    /// Header names are case-insensitive and stored in lowercase. Fails if
    /// `name` or the formatted value are not valid in an HTTP header.
    pub fn header<T: RequestParameter>(mut self, name: &str, value: Option<&T>) -> Result<Self> {
        if let Some(v) = value {
            let name = HeaderName::try_from(name).map_err(Error::invalid_argument)?;
            let v = HeaderValue::try_from(v.format()).map_err(Error::invalid_argument)?;
            self.headers.insert(name, v);
        }
        Ok(self)
    }

    /// Sets a JSON body.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Body::Json(serde_json::to_value(body).map_err(Error::ser)?);
        Ok(self)
    }

    /// Sets a `multipart/form-data` body.
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// The request path, relative to the service URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, unencoded, in the order they were added.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the value of the query parameter `name`, if present.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The full request URL, with the query string encoded.
    pub fn url(&self) -> Result<url::Url> {
        let mut url = url::Url::parse(&format!("{}{}", self.service_url, self.path))
            .map_err(Error::invalid_argument)?;
        url.query_pairs_mut().extend_pairs(self.query.iter());
        Ok(url)
    }
}
