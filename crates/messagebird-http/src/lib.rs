//! HTTP transport abstraction for the MessageBird API client
//!
//! The dispatcher in the `messagebird` crate never talks to an HTTP library
//! directly. It hands a fully-formed [`HttpRequest`] to a [`Transport`] and
//! gets back a [`RawResponse`] carrying the status code, the headers and an
//! unread body. [`HttpClient`] is the default, reqwest-backed transport.
//!
//! # Example
//!
//! ```no_run
//! use messagebird_http::{HttpClient, HttpRequest, Method, Transport};
//!
//! async fn example() -> Result<(), messagebird_http::HttpError> {
//!     let client = HttpClient::new()?;
//!     let url = url::Url::parse("https://rest.messagebird.com/balance").expect("valid url");
//!     let response = client.send(HttpRequest::new(Method::Get, url)).await?;
//!     println!("{}", response.text().await?);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientBuilder, DEFAULT_TIMEOUT};
pub use error::HttpError;
pub use request::{HttpRequest, Method};
pub use response::{BodyStream, RawResponse, Response};
pub use transport::Transport;
