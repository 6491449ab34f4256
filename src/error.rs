//! Error types for the billing SDK.
//!
//! All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`].
//!
//! The central distinction is between a request that never completed and a
//! request that completed with an error status. Only the former is an error
//! here: a completed exchange, whatever its status code, is returned as an
//! [`ApiResponse`](crate::response::ApiResponse) envelope so callers can
//! branch on business conditions ("customer not found") without error
//! handling.

use thiserror::Error;

/// Result type alias for billing operations.
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur in the billing SDK.
///
/// # Error Recovery
///
/// - **Transport errors** ([`Http`](Self::Http), [`Transport`](Self::Transport)):
///   the call never completed; the embedding application decides whether to
///   surface the failure or treat billing as unavailable.
/// - **Configuration errors** ([`Config`](Self::Config)): raised at client
///   construction, before any network call. Fix the configuration.
/// - **Context errors** ([`Context`](Self::Context)): a required presentation
///   input is missing or malformed; the message names the offending field and
///   its value.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum BillingError {
    /// HTTP request failed at the transport level.
    ///
    /// Wraps [`reqwest::Error`]: timeouts, connection refused, DNS failures,
    /// TLS errors. The request did not complete, so no response envelope
    /// exists for it.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-HTTP transport implementation failed to complete the request.
    ///
    /// Injected transports (test doubles, the host platform's networking
    /// stack) report their failures through this variant.
    #[error("transport failed: {0}")]
    Transport(String),

    /// Invalid client configuration.
    ///
    /// Raised when a [`BillingClient`](crate::client::BillingClient) is
    /// constructed with an empty or unparsable base URL, an empty module
    /// name, or header values that cannot be encoded. Construction fails
    /// fast; no request is ever attempted with a bad configuration.
    #[error("invalid billing client configuration: {0}")]
    Config(String),

    /// Invalid billing context input.
    ///
    /// Raised by the presenter before any other work when a required
    /// presentation field (support email, terms-of-service link, privacy
    /// link) is missing or malformed. The message names the field and the
    /// rejected value.
    #[error("invalid billing context: {0}")]
    Context(String),
}
