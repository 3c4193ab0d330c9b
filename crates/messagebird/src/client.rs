//! Request dispatcher

use std::sync::Arc;

use messagebird_http::{HttpRequest, Method, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::request;
use crate::response::{self, Outcome};

/// MessageBird API client
///
/// Every call goes through [`Client::dispatch`]: build the request, send it
/// once, read the whole body and classify it. Clones share the same
/// configuration and transport.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
}

impl Client {
    /// Create a new [`Client`] from a config
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Client for `access_key` with default settings
    pub fn with_access_key(access_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(ClientConfig::new(access_key)?))
    }

    /// Configuration this client dispatches with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and decode the response into `R`
    ///
    /// `path` is either an absolute `http(s)://` URL or a path relative to the
    /// configured endpoint. `payload`, when present, is sent as the JSON body.
    ///
    /// A 204 response decodes `R` from JSON `null`, which suits `()` and
    /// `Option<T>`.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    #[instrument(skip(self, payload))]
    pub async fn dispatch<R, P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized + Sync,
    {
        match self.execute(method, path, payload).await? {
            Outcome::Decoded(result) => Ok(result),
            Outcome::NoContent => serde_json::from_value(serde_json::Value::Null)
                .map_err(|source| Error::Decode {
                    body: String::new(),
                    source,
                }),
        }
    }

    /// Send one request and decode the response into `sink`
    ///
    /// `sink` is only written when the call succeeds with a body; it is left
    /// untouched on every error and on 204.
    #[instrument(skip(self, sink, payload))]
    pub async fn dispatch_into<R, P>(
        &self,
        sink: &mut R,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> Result<()>
    where
        R: DeserializeOwned + Send,
        P: Serialize + ?Sized + Sync,
    {
        if let Outcome::Decoded(result) = self.execute(method, path, payload).await? {
            *sink = result;
        }
        Ok(())
    }

    /// GET `path`
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.dispatch::<R, ()>(Method::Get, path, None).await
    }

    /// POST `payload` to `path`
    pub async fn post<P, R>(&self, path: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.dispatch(Method::Post, path, Some(payload)).await
    }

    /// PATCH `path` with `payload`
    pub async fn patch<P, R>(&self, path: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.dispatch(Method::Patch, path, Some(payload)).await
    }

    /// PUT `payload` to `path`
    pub async fn put<P, R>(&self, path: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.dispatch(Method::Put, path, Some(payload)).await
    }

    /// DELETE `path`
    pub async fn delete<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.dispatch::<R, ()>(Method::Delete, path, None).await
    }

    async fn execute<R, P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> Result<Outcome<R>>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized + Sync,
    {
        let request = request::build(&self.config, method, path, payload)?;
        tracing::debug!("Dispatching {} {}", request.method, request.url);

        let (status, body) = self.invoke(request).await?;
        tracing::debug!("Response status: {}", status);

        response::classify(status, &body)
    }

    /// Send `request` and read the whole body
    ///
    /// The response owns the connection and is consumed by the body read, so
    /// the connection is released before this returns on every path.
    async fn invoke(&self, request: HttpRequest) -> Result<(u16, Vec<u8>)> {
        let response = self
            .config
            .transport()
            .send(request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::Io)?;

        self.config.debug(format_args!(
            "HTTP RESPONSE: {}",
            String::from_utf8_lossy(&body)
        ));

        Ok((status, body))
    }
}
