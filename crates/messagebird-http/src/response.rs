//! HTTP response types

use futures::stream::{self, BoxStream, StreamExt};

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
pub type Response<R, E = HttpError> = Result<R, E>;

/// Unread response body, yielded chunk by chunk
pub type BodyStream = BoxStream<'static, Response<Vec<u8>>>;

/// Raw HTTP response with status code, headers and an unread body
///
/// The body owns the underlying connection. It is released as soon as the
/// response is consumed by [`RawResponse::bytes`] or [`RawResponse::text`],
/// or when the response is dropped.
pub struct RawResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: BodyStream,
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl RawResponse {
    /// Create a new RawResponse from a streaming body
    pub fn new(status: u16, headers: Vec<(String, String)>, body: BodyStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a new RawResponse with a body that is already in memory
    pub fn from_bytes(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let bytes = body.into();
        let body = stream::once(async move { Ok::<_, HttpError>(bytes) }).boxed();
        Self::new(status, Vec::new(), body)
    }

    /// Create a new RawResponse from a reqwest::Response
    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| HttpError::Body(e.to_string()))
            })
            .boxed();

        Self::new(status, headers, body)
    }

    /// Add a header to the response
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header value, ignoring ASCII case of the name
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Read the whole body into memory
    pub async fn bytes(self) -> Response<Vec<u8>> {
        let mut body = self.body;
        let mut buf = Vec::new();
        while let Some(chunk) = body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf)
    }

    /// Read the whole body as text
    pub async fn text(self) -> Response<String> {
        let bytes = self.bytes().await?;
        String::from_utf8(bytes).map_err(|e| HttpError::Body(e.to_string()))
    }
}
