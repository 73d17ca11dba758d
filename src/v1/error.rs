use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while building or decoding model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("UnknownEnumValue: '{value}' is not a valid {enum_name}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },
    #[error("DuplicateKey: {field} already contains an entry for key '{key}'")]
    DuplicateKey { field: &'static str, key: String },
}

/// Exception types the Macie 2 service returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    AccessDenied,
    Conflict,
    InternalServer,
    ResourceNotFound,
    ServiceQuotaExceeded,
    Throttling,
    Validation,
    Unknown(String),
}

impl ServiceErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccessDenied => "AccessDeniedException",
            Self::Conflict => "ConflictException",
            Self::InternalServer => "InternalServerException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::ServiceQuotaExceeded => "ServiceQuotaExceededException",
            Self::Throttling => "ThrottlingException",
            Self::Validation => "ValidationException",
            Self::Unknown(code) => code.as_str(),
        }
    }

    /// Normalizes codes such as `aws.macie2#ThrottlingException:http://...`.
    /// The `:` suffix is dropped before the `#` namespace.
    pub fn from_code(code: &str) -> Self {
        let code = code.split(':').next().unwrap_or(code);
        let code = code.rsplit('#').next().unwrap_or(code).trim();
        match code {
            "AccessDeniedException" => Self::AccessDenied,
            "ConflictException" => Self::Conflict,
            "InternalServerException" => Self::InternalServer,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "ServiceQuotaExceededException" => Self::ServiceQuotaExceeded,
            "ThrottlingException" => Self::Throttling,
            "ValidationException" => Self::Validation,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error response returned by the service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} (HTTP {status}): {message}")]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub status: u16,
    pub message: String,
}

#[derive(Deserialize, Default)]
struct ErrorEnvelope {
    #[serde(rename = "__type")]
    type_name: Option<String>,
    code: Option<String>,
    #[serde(rename = "Code")]
    code_upper: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    message_upper: Option<String>,
}

impl ErrorEnvelope {
    /// Splits into `(code, message)`, preferring `__type` over `code`/`Code`.
    fn into_parts(self) -> (Option<String>, Option<String>) {
        let code = self.type_name.or(self.code).or(self.code_upper);
        let message = self.message.or(self.message_upper);
        (code, message)
    }
}

impl ServiceError {
    /// Decodes an error response. The `x-amzn-ErrorType` header wins over the
    /// body's `__type`/`code` property.
    pub fn from_response(status: u16, error_type: Option<&str>, body: &[u8]) -> Self {
        let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();
        let (body_code, body_message) = envelope.into_parts();
        let code = error_type
            .map(str::to_string)
            .or(body_code)
            .unwrap_or_else(|| format!("Http{status}Error"));
        let message = body_message
            .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
        Self {
            kind: ServiceErrorKind::from_code(&code),
            status,
            message,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::Throttling | ServiceErrorKind::InternalServer
        ) || self.status >= 500
    }
}
