//! Response classification
//!
//! Maps a status code and a fully read body to the outcome of a call. The
//! API only promises three things: a 500 carries nothing useful, 200/201
//! carry the requested resource, and every other status carries the error
//! envelope. 204 is the one body-less success.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorResponse, Result};

/// Closed set of status classes the classifier distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 500
    ServerError,
    /// 200 or 201
    Success,
    /// 204
    NoContent,
    /// Anything else, including 3xx, other 2xx and 4xx
    Other,
}

impl StatusClass {
    /// Class of `status`
    pub const fn from_status(status: u16) -> Self {
        match status {
            500 => Self::ServerError,
            200 | 201 => Self::Success,
            204 => Self::NoContent,
            _ => Self::Other,
        }
    }
}

/// Successful outcome of a call
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome<R> {
    /// Body decoded into the caller's type
    Decoded(R),
    /// The API answered 204
    NoContent,
}

/// Classify a response
pub(crate) fn classify<R>(status: u16, body: &[u8]) -> Result<Outcome<R>>
where
    R: DeserializeOwned,
{
    match StatusClass::from_status(status) {
        StatusClass::ServerError => Err(Error::ServiceUnavailable),
        StatusClass::Success => serde_json::from_slice(body)
            .map(Outcome::Decoded)
            .map_err(|source| {
                tracing::warn!("Http Response error: {}", source);
                Error::Decode {
                    body: String::from_utf8_lossy(body).into_owned(),
                    source,
                }
            }),
        StatusClass::NoContent => Ok(Outcome::NoContent),
        StatusClass::Other => {
            let response = ErrorResponse::from_slice(body)?;
            tracing::debug!("API error ({}): {}", status, response);
            Err(Error::Api(response))
        }
    }
}
