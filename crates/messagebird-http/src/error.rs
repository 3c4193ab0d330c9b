//! HTTP error types

use thiserror::Error;

/// HTTP errors that can occur while sending a request or reading its body
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection error (DNS, refused, reset, TLS handshake)
    #[error("Connection error: {0}")]
    Connection(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Response body could not be read to the end
    #[error("Body read error: {0}")]
    Body(String),
    /// Unsupported HTTP method
    #[error("Unsupported HTTP method: {0}")]
    Method(String),
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(String),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_builder() {
            HttpError::Build(err.to_string())
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_connection_display() {
        let error = HttpError::Connection("connection refused".to_string());
        assert_eq!(format!("{}", error), "Connection error: connection refused");
    }

    #[test]
    fn test_http_error_timeout_display() {
        let error = HttpError::Timeout;
        assert_eq!(format!("{}", error), "Request timeout");
    }

    #[test]
    fn test_http_error_body_display() {
        let error = HttpError::Body("connection reset".to_string());
        assert_eq!(format!("{}", error), "Body read error: connection reset");
    }

    #[test]
    fn test_http_error_method_display() {
        let error = HttpError::Method("BREW".to_string());
        assert_eq!(format!("{}", error), "Unsupported HTTP method: BREW");
    }

    #[test]
    fn test_http_error_build_display() {
        let error = HttpError::Build("invalid config".to_string());
        assert_eq!(format!("{}", error), "Client build error: invalid config");
    }

    #[test]
    fn test_http_error_other_display() {
        let error = HttpError::Other("unknown error".to_string());
        assert_eq!(format!("{}", error), "unknown error");
    }
}
