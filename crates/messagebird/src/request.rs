//! Outbound request construction

use messagebird_http::{HttpRequest, Method};
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::USER_AGENT;

/// Resolve `path` against `endpoint`
///
/// Absolute `http://` and `https://` URLs are used as they are; anything else
/// is appended to the endpoint after a `/`.
pub(crate) fn resolve_url(endpoint: &str, path: &str) -> Result<Url> {
    let raw = if path.starts_with("https://") || path.starts_with("http://") {
        path.to_string()
    } else {
        format!("{}/{}", endpoint, path)
    };

    Url::parse(&raw).map_err(|source| Error::MalformedUrl { url: raw, source })
}

/// Build the request for one call
///
/// The debug line is emitted here, before anything is sent.
pub(crate) fn build<P>(
    config: &ClientConfig,
    method: Method,
    path: &str,
    payload: Option<&P>,
) -> Result<HttpRequest>
where
    P: Serialize + ?Sized,
{
    let url = resolve_url(config.endpoint(), path)?;

    let body = payload
        .map(serde_json::to_string)
        .transpose()
        .map_err(Error::Serialization)?;

    match &body {
        Some(body) => config.debug(format_args!("HTTP REQUEST: {} {} {}", method, url, body)),
        None => config.debug(format_args!("HTTP REQUEST: {} {}", method, url)),
    }

    let request = HttpRequest::new(method, url)
        .with_header("Content-Type", "application/json")
        .with_header("Accept", "application/json")
        .with_header("Authorization", format!("AccessKey {}", config.access_key()))
        .with_header("User-Agent", USER_AGENT);

    Ok(match body {
        Some(body) => request.with_body(body),
        None => request,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::ser::Error as _;
    use serde::Serializer;

    use super::*;
    use crate::config::ENDPOINT;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot be represented as JSON"))
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::new("test_key").expect("Valid config")
    }

    #[test]
    fn test_relative_path_is_joined_to_endpoint() {
        for path in ["messages", "messages/abc123", "lookup/31612345678/hlr", "balance?x=1"] {
            let url = resolve_url(ENDPOINT, path).expect("Valid path");
            assert_eq!(url.as_str(), format!("{}/{}", ENDPOINT, path));
        }
    }

    #[test]
    fn test_absolute_path_is_used_verbatim() {
        let url = resolve_url(ENDPOINT, "https://voice.messagebird.com/calls").expect("Valid URL");
        assert_eq!(url.as_str(), "https://voice.messagebird.com/calls");

        let url = resolve_url(ENDPOINT, "http://localhost:8080/x").expect("Valid URL");
        assert_eq!(url.as_str(), "http://localhost:8080/x");
    }

    #[test]
    fn test_malformed_url() {
        let err = resolve_url(ENDPOINT, "https://rest messagebird.com/x")
            .expect_err("Space in host is invalid");
        match err {
            Error::MalformedUrl { url, .. } => assert_eq!(url, "https://rest messagebird.com/x"),
            other => panic!("Expected MalformedUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_build_sets_exactly_the_standard_headers() {
        let request = build::<()>(&config(), Method::Get, "balance", None).expect("Valid request");

        let names: Vec<&str> = request.headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["Content-Type", "Accept", "Authorization", "User-Agent"]);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("authorization"), Some("AccessKey test_key"));
        assert_eq!(request.header("user-agent"), Some(USER_AGENT));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_build_encodes_payload() {
        let mut payload = BTreeMap::new();
        payload.insert("originator", "TestName");
        payload.insert("body", "Hello");

        let request =
            build(&config(), Method::Post, "messages", Some(&payload)).expect("Valid request");

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"body":"Hello","originator":"TestName"}"#)
        );
    }

    #[test]
    fn test_build_reports_serialization_error() {
        let err = build(&config(), Method::Post, "messages", Some(&Unserializable))
            .expect_err("Payload cannot be encoded");
        assert!(matches!(err, Error::Serialization(_)));
    }
}
