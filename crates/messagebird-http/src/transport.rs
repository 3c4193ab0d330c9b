//! HTTP Transport trait
use std::fmt::Debug;

use crate::request::HttpRequest;
use crate::response::{RawResponse, Response};

/// Expected HTTP Transport
///
/// Sends a fully-formed request and hands back the status, headers and the
/// unread body, or fails with a transport error. Connection reuse, TLS and
/// timeouts belong to the implementation. Implementations must be safe for
/// concurrent use since one transport is shared by every call on a client.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Send the request
    async fn send(&self, request: HttpRequest) -> Response<RawResponse>;
}
