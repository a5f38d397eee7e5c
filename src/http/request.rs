//! Request description handed from operations to the base service

use crate::error::{Error, Result};
use crate::types::JsonValue;
use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use url::Url;

/// Body of an outgoing request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON document
    Json(JsonValue),
    /// Single-file multipart upload
    File(FilePart),
}

/// One file in a `multipart/form-data` body
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name
    pub field: String,
    /// File name reported to the server
    pub file_name: String,
    /// Raw file bytes
    pub content: Bytes,
    /// MIME type of the file
    pub content_type: String,
}

/// Configuration for a single request
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// HTTP method
    pub method: Method,
    /// Path template, e.g. `/v1/workspaces/{w_id}`
    pub path: String,
    /// Operation name reported in the analytics header
    pub operation_id: String,
    /// Values for the `{name}` placeholders in `path`
    pub path_params: Vec<(String, String)>,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: Option<RequestBody>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new(method: Method, path: impl Into<String>, operation_id: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            operation_id: operation_id.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Bind a path placeholder
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter when a value is present
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.headers.push((key.into(), value.to_string()));
        self
    }

    /// Add a header when a value is present
    #[must_use]
    pub fn header_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.header(key, v),
            None => self,
        }
    }

    /// Set JSON body
    #[must_use]
    pub fn json_value(mut self, body: JsonValue) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Serialize `body` as the JSON body
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        let body = serde_json::to_value(body).map_err(Error::JsonEncode)?;
        Ok(self.json_value(body))
    }

    /// Set a multipart file body
    #[must_use]
    pub fn file(mut self, part: FilePart) -> Self {
        self.body = Some(RequestBody::File(part));
        self
    }

    /// Resolve the path template against `base` and append query parameters
    ///
    /// Path parameter values are percent-encoded as single segments.
    pub fn build_url(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(base).map_err(|source| Error::InvalidUrl {
            url: base.to_string(),
            source,
        })?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config(format!("service URL '{base}' cannot be a base")))?;
            segments.pop_if_empty();

            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => {
                        let value = self
                            .path_params
                            .iter()
                            .find(|(key, _)| key == name)
                            .map(|(_, value)| value.as_str())
                            .filter(|value| !value.is_empty())
                            .ok_or_else(|| Error::missing_field(name))?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }
}
