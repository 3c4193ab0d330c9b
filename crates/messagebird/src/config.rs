//! Client configuration

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use messagebird_http::{HttpClient, Transport, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::debug::{DebugSink, TracingSink};
use crate::error::{Error, Result};

/// Base URL of the MessageBird REST API
pub const ENDPOINT: &str = "https://rest.messagebird.com";

/// Everything a dispatch needs: credential, endpoint, transport and an
/// optional debug sink
///
/// Immutable once built and holds no per-request state, so one config can
/// back any number of concurrent calls.
#[derive(Clone)]
pub struct ClientConfig {
    access_key: String,
    endpoint: String,
    transport: Arc<dyn Transport>,
    debug_sink: Option<Arc<dyn DebugSink>>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("transport", &self.transport)
            .field("debug_sink", &self.debug_sink)
            .finish()
    }
}

impl ClientConfig {
    /// Config for `access_key` with the default endpoint, the default
    /// transport (15s timeout) and no debug sink
    pub fn new(access_key: impl Into<String>) -> Result<Self> {
        Self::builder(access_key).build()
    }

    /// Create a new [`ClientConfigBuilder`]
    pub fn builder(access_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(access_key)
    }

    /// API access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Base endpoint relative paths are resolved against, without a trailing
    /// slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Transport every request is sent through
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Whether a debug sink is attached
    pub fn has_debug_sink(&self) -> bool {
        self.debug_sink.is_some()
    }

    /// Forward a line to the debug sink. The line is only formatted when a
    /// sink is attached.
    pub(crate) fn debug(&self, line: fmt::Arguments<'_>) {
        if let Some(sink) = &self.debug_sink {
            sink.record(&line.to_string());
        }
    }
}

/// Builder for [`ClientConfig`]
pub struct ClientConfigBuilder {
    access_key: String,
    endpoint: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    debug_sink: Option<Arc<dyn DebugSink>>,
}

impl fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfigBuilder {
    fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            endpoint: ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
            debug_sink: None,
        }
    }

    /// Override the base endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Timeout of the default transport. Ignored when a transport is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use `transport` instead of the default reqwest client
    pub fn transport<T: Transport + 'static>(self, transport: T) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    /// Use an already shared transport
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Attach a debug sink
    pub fn debug_sink<S: DebugSink + 'static>(self, sink: S) -> Self {
        self.shared_debug_sink(Arc::new(sink))
    }

    /// Attach an already shared debug sink
    pub fn shared_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.debug_sink = Some(sink);
        self
    }

    /// Build the config
    pub fn build(self) -> Result<ClientConfig> {
        if self.access_key.trim().is_empty() {
            return Err(Error::Config("access key must not be empty".to_string()));
        }

        let endpoint = self.endpoint.trim_end_matches('/').to_string();
        let parsed = Url::parse(&endpoint).map_err(|source| Error::MalformedUrl {
            url: endpoint.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "endpoint must use http or https, got `{}`",
                parsed.scheme()
            )));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpClient::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(Error::Transport)?,
            ),
        };

        Ok(ClientConfig {
            access_key: self.access_key,
            endpoint,
            transport,
            debug_sink: self.debug_sink,
        })
    }
}

/// Plain settings, loadable from any serde source
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API access key
    pub access_key: String,
    /// Base endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Mirror requests and responses to `tracing` through [`TracingSink`]
    #[serde(default)]
    pub debug: bool,
}

fn default_endpoint() -> String {
    ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("access_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("debug", &self.debug)
            .finish()
    }
}

impl TryFrom<Settings> for ClientConfig {
    type Error = Error;

    fn try_from(settings: Settings) -> Result<Self> {
        let builder = ClientConfig::builder(settings.access_key)
            .endpoint(settings.endpoint)
            .timeout(Duration::from_secs(settings.timeout_secs));

        let builder = if settings.debug {
            builder.debug_sink(TracingSink)
        } else {
            builder
        };

        builder.build()
    }
}
