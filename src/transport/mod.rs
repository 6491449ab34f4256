//! Transport abstraction for billing API requests.
//!
//! The billing client speaks to the wire through the [`Transport`] trait so
//! the embedding application can reuse its own networking stack and tests can
//! substitute a recorded double. Production code that injects nothing gets
//! the reqwest-backed [`HttpTransport`].
//!
//! A transport reports *completed* exchanges — any status code included — as
//! [`TransportResponse`]; it returns an error only when the exchange never
//! completed (timeout, connection failure, TLS failure).

use async_trait::async_trait;

use crate::error::Result;

pub mod http;

pub use http::{HttpConfig, HttpTransport};

/// Response from a completed transport exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, in wire order.
    pub headers: Vec<(String, String)>,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Value of the `Content-Type` header, if the response carries one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}

/// Abstraction over the HTTP stack used to reach the billing API.
///
/// Implementations are expected to have been configured with the API base
/// URL and the standard header set at construction; `route` is relative to
/// that base (e.g. `v1/customers/C1`).
///
/// This trait is deliberately open so that a mock implementation can be
/// injected in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a GET request for the given route.
    ///
    /// # Errors
    ///
    /// Returns an error only when the exchange does not complete; 4xx/5xx
    /// statuses are successful results at this layer.
    async fn get(&self, route: &str) -> Result<TransportResponse>;
}
