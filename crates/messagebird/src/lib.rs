//! Request dispatcher for the MessageBird REST API
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

mod client;
mod config;
mod debug;
mod error;
mod request;
mod response;

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder, Settings, ENDPOINT};
pub use debug::{DebugSink, TracingSink, WriterSink};
pub use error::{Error, ErrorItem, ErrorResponse, Result};
#[doc(hidden)]
pub use messagebird_http;
pub use messagebird_http::{HttpClient, HttpError, HttpRequest, Method, RawResponse, Transport};
pub use response::StatusClass;

/// Client version sent in the `User-Agent` header
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` header value sent with every request
pub const USER_AGENT: &str = concat!(
    "MessageBird/ApiClient/",
    env!("CARGO_PKG_VERSION"),
    " Rust/",
    env!("MESSAGEBIRD_RUSTC_VERSION")
);

/// Default request timeout of the bundled transport
pub const DEFAULT_TIMEOUT: std::time::Duration = messagebird_http::DEFAULT_TIMEOUT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_shape() {
        let expected_prefix = format!("MessageBird/ApiClient/{} Rust/", CLIENT_VERSION);
        assert!(USER_AGENT.starts_with(&expected_prefix));
        assert!(USER_AGENT.len() > expected_prefix.len());
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(DEFAULT_TIMEOUT.as_secs(), 15);
    }
}
