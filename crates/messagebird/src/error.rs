//! Errors returned by the dispatcher

use std::fmt;

use messagebird_http::HttpError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for dispatcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Dispatcher Error
///
/// Exactly one of these is returned for a failed call; a failed call never
/// yields a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The client configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Path or endpoint does not form a valid URL
    #[error("Malformed URL `{url}`: {source}")]
    MalformedUrl {
        /// The string that failed to parse
        url: String,
        /// Parser failure
        #[source]
        source: url::ParseError,
    },
    /// Request payload could not be encoded as JSON
    #[error("Could not encode request payload: {0}")]
    Serialization(#[source] serde_json::Error),
    /// Network, connection or timeout failure; never retried internally
    #[error("Transport error: {0}")]
    Transport(#[source] HttpError),
    /// Response body could not be read to the end
    #[error("Could not read response body: {0}")]
    Io(#[source] HttpError),
    /// HTTP 500; the body is never inspected
    #[error("The MessageBird API is currently unavailable")]
    ServiceUnavailable,
    /// A 200/201 body did not match the expected shape
    #[error("could not decode response JSON, {body}: {source}")]
    Decode {
        /// Raw response body
        body: String,
        /// Parser failure
        #[source]
        source: serde_json::Error,
    },
    /// The API answered with its error envelope
    #[error(transparent)]
    Api(#[from] ErrorResponse),
    /// The API answered with an error status and a body that is not an error
    /// envelope
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Structured API error, if this is one
    pub fn api_errors(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api(response) => Some(response),
            _ => None,
        }
    }
}

/// Single entry of the API error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Machine readable error code
    pub code: i32,
    /// Human readable description
    pub description: String,
    /// Request parameter the error refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Link to the relevant documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}: {}", self.code, self.description)?;
        if let Some(parameter) = &self.parameter {
            write!(f, " (parameter: {})", parameter)?;
        }
        Ok(())
    }
}

/// Error envelope returned by the API for any status other than 200, 201,
/// 204 and 500
///
/// ```json
/// { "errors": [ { "code": 9, "description": "is invalid", "parameter": "originator" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error items in the order the API returned them
    pub errors: Vec<ErrorItem>,
}

impl ErrorResponse {
    /// Create new [`ErrorResponse`]
    pub fn new(errors: Vec<ErrorItem>) -> Self {
        Self { errors }
    }

    /// Error response from a raw body
    pub fn from_slice(body: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// All error items
    pub fn errors(&self) -> &[ErrorItem] {
        &self.errors
    }

    /// First error item, if any
    pub fn first(&self) -> Option<&ErrorItem> {
        self.errors.first()
    }

    /// Whether any item carries `code`
    pub fn has_code(&self, code: i32) -> bool {
        self.errors.iter().any(|item| item.code == code)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("API error without details");
        }

        for (i, item) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}
