//! Request marshalling and response parsing for the Macie 2 REST/JSON
//! protocol.
//!
//! An operation input serializes to a JSON object. Members named by `{label}`
//! segments of the path template, and members listed in `QUERY`, are moved out
//! of that object into the URL; whatever is left is the request body. The path
//! is appended to any path the endpoint already has, and labels and query
//! values are percent-encoded (`%20`, never `+`).

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;
use url::Url;

use super::{
    config::{ClientConfig, ConfigError},
    error::{ModelError, ServiceError},
    macie2::operations::OperationName,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
pub enum HttpMethod {
    #[strum(serialize = "GET")]
    #[serde(rename = "GET")]
    Get,
    #[strum(serialize = "POST")]
    #[serde(rename = "POST")]
    Post,
    #[strum(serialize = "PUT")]
    #[serde(rename = "PUT")]
    Put,
    #[strum(serialize = "PATCH")]
    #[serde(rename = "PATCH")]
    Patch,
    #[strum(serialize = "DELETE")]
    #[serde(rename = "DELETE")]
    Delete,
}

impl HttpMethod {
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

/// A marshalled request, ready for signing and sending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpRequest {
    pub operation: OperationName,
    pub method: HttpMethod,
    pub url: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| "application/json")
    }
}

/// The parts of an HTTP response the protocol looks at.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    /// Value of the `x-amzn-ErrorType` header, if any.
    pub error_type: Option<String>,
    pub body: Vec<u8>,
}

pub trait Operation: Serialize {
    type Output: DeserializeOwned + Default;

    const NAME: OperationName;
    const METHOD: HttpMethod;
    /// Path template; `{member}` segments are filled from the input.
    const PATH: &'static str;
    /// Input members sent as query parameters.
    const QUERY: &'static [&'static str] = &[];

    fn into_http(&self, config: &ClientConfig) -> Result<HttpRequest, OperationError> {
        let mut members = match serde_json::to_value(self)? {
            Value::Object(members) => members,
            _ => Map::new(),
        };
        let path = expand_path(Self::NAME, Self::PATH, &mut members)?;
        let mut url = config.endpoint_url()?;
        let prefixed = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&prefixed);

        let mut query = Vec::new();
        for &name in Self::QUERY {
            if let Some(value) = members.remove(name) {
                push_query(&mut query, name, value);
            }
        }
        if !query.is_empty() {
            let query: Vec<String> = query
                .into_iter()
                .map(|(name, value)| format!("{}={}", name, urlencoding::encode(&value)))
                .collect();
            url.set_query(Some(&query.join("&")));
        }

        let body = Self::METHOD.has_body().then(|| Value::Object(members));
        tracing::debug!(
            operation = %Self::NAME,
            method = %Self::METHOD,
            url = %url,
            "marshalled request"
        );
        Ok(HttpRequest {
            operation: Self::NAME,
            method: Self::METHOD,
            url,
            body,
        })
    }

    fn parse_response(response: &RawResponse) -> Result<Self::Output, OperationError> {
        if !(200..300).contains(&response.status) {
            let err = ServiceError::from_response(
                response.status,
                response.error_type.as_deref(),
                &response.body,
            );
            tracing::warn!(operation = %Self::NAME, error = %err, "service returned an error");
            return Err(err.into());
        }
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::Output::default());
        }
        tracing::debug!(
            operation = %Self::NAME,
            bytes = response.body.len(),
            "parsing response"
        );
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Marshals an untyped JSON input for the operation `T`.
pub fn plan_from_value<T: Operation + DeserializeOwned>(
    input: Value,
    config: &ClientConfig,
) -> Result<HttpRequest, OperationError> {
    let input: T = serde_json::from_value(input)?;
    input.into_http(config)
}

fn expand_path(
    operation: OperationName,
    template: &'static str,
    members: &mut Map<String, Value>,
) -> Result<String, OperationError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .unwrap_or(rest.len());
        path.push_str(&rest[..start]);
        let field = &rest[start + 1..end];
        let value = members
            .remove(field)
            .and_then(scalar_to_string)
            .filter(|value| !value.is_empty())
            .ok_or(OperationError::MissingField { operation, field })?;
        path.push_str(&urlencoding::encode(&value));
        rest = rest.get(end + 1..).unwrap_or("");
    }
    path.push_str(rest);
    Ok(path)
}

fn push_query(query: &mut Vec<(&'static str, String)>, name: &'static str, value: Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                if let Some(item) = scalar_to_string(item) {
                    query.push((name, item));
                }
            }
        }
        other => {
            if let Some(value) = scalar_to_string(other) {
                query.push((name, value));
            }
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("MissingField: {operation} requires '{field}'")]
    MissingField {
        operation: OperationName,
        field: &'static str,
    },
    #[error("Serialization or deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("ConfigError: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("ModelError: {0}")]
    ModelError(#[from] ModelError),
    #[error("ServiceError: {0}")]
    ServiceError(#[from] ServiceError),
}
