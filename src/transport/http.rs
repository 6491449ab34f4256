//! Default HTTP transport built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use url::Url;

use crate::{
    error::{BillingError, Result},
    transport::{Transport, TransportResponse},
};

/// HTTP transport configuration.
///
/// Deserializable so the embedding application can carry it in its own
/// configuration file:
///
/// ```toml
/// timeout_secs = 20
/// connect_timeout_secs = 5
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Returns the total timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connect timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Reqwest-backed billing API transport.
///
/// Owns the API base URL and the default header set; routes handed to
/// [`Transport::get`] are joined onto the base URL. Requests time out per
/// [`HttpConfig`]; a timeout or connection failure surfaces as
/// [`BillingError::Http`], never as a response.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the given base URL with the default headers
    /// attached to every request.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Config`] when the base URL does not parse, and
    /// [`BillingError::Http`] when the underlying client cannot be built.
    pub fn new(base_url: &str, default_headers: HeaderMap, config: &HttpConfig) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| BillingError::Config(format!("invalid API base URL '{base_url}': {e}")))?;

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, route: &str) -> Result<TransportResponse> {
        let url = format!("{}/{route}", self.base_url);
        tracing::debug!(%url, "issuing billing API request");

        let response = self.client.get(&url).send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, "billing API responded");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
