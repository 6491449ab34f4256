//! Low-level billing API client.
//!
//! [`BillingClient`] exposes the three billing lookups a module needs —
//! customer, subscription, plans — over an injected [`Transport`]. The API
//! version and the route are threaded through each call as explicit values,
//! so a single client instance carries no mutable per-call state and is safe
//! to share across concurrent calls.

use std::{fmt, sync::Arc};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::{
    error::{BillingError, Result},
    response::ApiResponse,
    routes::{self, PlansQuery},
    transport::{HttpConfig, HttpTransport, Transport},
};

/// Marker header flagging a request for the sandbox billing backend. The
/// remote service may behave differently without it, so the name and value
/// are fixed.
const SANDBOX_HEADER: HeaderName = HeaderName::from_static("sandbox");

/// Billing client configuration.
///
/// Constructed once per client. Deserializable so the embedding application
/// can carry it in its configuration file:
///
/// ```toml
/// module_name = "rbm_example"
/// api_url = "https://billing-api.distribution.storekit.net"
/// token = "eyJhbGciOi…"
/// sandbox = true
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Technical name of the calling module; embedded in subscription and
    /// plan routes and in the `User-Agent` header.
    pub module_name: String,

    /// Base URL of the billing API, usually resolved through
    /// [`Environment::api_base_url`](crate::env::Environment::api_base_url).
    pub api_url: String,

    /// Bearer token authenticating the shop.
    pub token: String,

    /// Whether requests should be marked for the sandbox backend.
    #[serde(default)]
    pub sandbox: bool,

    /// HTTP transport tuning.
    #[serde(default)]
    pub http: HttpConfig,
}

impl ClientConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Config`] when the module name is empty or the
    /// API base URL is empty or unparsable. Called at client construction so
    /// a bad configuration fails before the first request.
    pub fn validate(&self) -> Result<()> {
        if self.module_name.is_empty() {
            return Err(BillingError::Config("module name is empty".to_owned()));
        }
        if self.api_url.is_empty() {
            return Err(BillingError::Config(
                "no API base URL resolved for this environment; supply one explicitly".to_owned(),
            ));
        }
        Url::parse(&self.api_url).map_err(|e| {
            BillingError::Config(format!("invalid API base URL '{}': {e}", self.api_url))
        })?;

        Ok(())
    }
}

/// Low-level client for the billing API routes.
///
/// # Examples
///
/// ```rust,no_run
/// use storekit_billing::{BillingClient, ClientConfig};
///
/// # async fn example() -> storekit_billing::Result<()> {
/// let client = BillingClient::new(&ClientConfig {
///     module_name: "rbm_example".to_owned(),
///     api_url: "https://billing-api.distribution.storekit.net".to_owned(),
///     token: "eyJhbGciOi…".to_owned(),
///     sandbox: false,
///     http: Default::default(),
/// })?;
///
/// let customer = client
///     .retrieve_customer("b2581e4b-0030-4fc8-9bf2-7f01c550a946", BillingClient::DEFAULT_API_VERSION)
///     .await?;
/// if customer.success {
///     println!("customer: {:?}", customer.body);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BillingClient {
    module_name: String,
    transport: Arc<dyn Transport>,
}

impl BillingClient {
    /// API version used when the embedding application has no opinion.
    pub const DEFAULT_API_VERSION: &'static str = "v1";

    /// Creates a client with the default HTTP transport built from the
    /// configuration's base URL, timeout and header set.
    ///
    /// # Errors
    ///
    /// Fails fast with [`BillingError::Config`] on an invalid configuration,
    /// before any request is attempted.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let headers = default_headers(config)?;
        let transport = HttpTransport::new(&config.api_url, headers, &config.http)?;

        Ok(Self::with_transport(
            config.module_name.clone(),
            Arc::new(transport),
        ))
    }

    /// Creates a client over an injected transport.
    ///
    /// The transport is expected to already target the billing API base URL
    /// and to attach the standard header set. This is the seam used by tests
    /// and by hosts that reuse their own networking stack.
    pub fn with_transport(module_name: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            module_name: module_name.into(),
            transport,
        }
    }

    /// Technical name of the module this client acts for.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Fetches a billing customer by id (`GET {version}/customers/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures; a completed
    /// exchange with any status becomes an [`ApiResponse`].
    #[instrument(skip(self), fields(module = %self.module_name))]
    pub async fn retrieve_customer(
        &self,
        customer_id: &str,
        api_version: &str,
    ) -> Result<ApiResponse> {
        self.get(api_version, &routes::customer(customer_id)).await
    }

    /// Fetches the customer's subscription to this module
    /// (`GET {version}/customers/{id}/subscriptions/{module}`).
    ///
    /// The module segment is always the client's own configured identity: a
    /// module can only see the subscription its vendor sold to the customer.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures.
    #[instrument(skip(self), fields(module = %self.module_name))]
    pub async fn retrieve_subscription(
        &self,
        customer_id: &str,
        api_version: &str,
    ) -> Result<ApiResponse> {
        self.get(
            api_version,
            &routes::subscription(customer_id, &self.module_name),
        )
        .await
    }

    /// Fetches the plans sold for this module
    /// (`GET {version}/products/{module}/plans?…`).
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures.
    #[instrument(skip(self, query), fields(module = %self.module_name))]
    pub async fn retrieve_plans(
        &self,
        query: &PlansQuery,
        api_version: &str,
    ) -> Result<ApiResponse> {
        self.get(api_version, &routes::plans(&self.module_name, query))
            .await
    }

    async fn get(&self, api_version: &str, route: &str) -> Result<ApiResponse> {
        let route = routes::versioned(api_version, route);
        let response = self.transport.get(&route).await?;

        Ok(ApiResponse::from_transport(response))
    }
}

impl fmt::Debug for BillingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillingClient")
            .field("module_name", &self.module_name)
            .finish_non_exhaustive()
    }
}

/// Builds the header set every billing request carries.
fn default_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let authorization = format!("Bearer {}", config.token);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&authorization)
            .map_err(|e| BillingError::Config(format!("bearer token is not a header value: {e}")))?,
    );

    let user_agent = format!("storekit-billing ({})", config.module_name);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&user_agent)
            .map_err(|e| BillingError::Config(format!("module name is not a header value: {e}")))?,
    );

    if config.sandbox {
        headers.insert(SANDBOX_HEADER, HeaderValue::from_static("true"));
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            module_name: "rbm_example".to_owned(),
            api_url: "https://billing-api.distribution.storekit.net".to_owned(),
            token: "token-123".to_owned(),
            sandbox: false,
            http: HttpConfig::default(),
        }
    }

    #[test]
    fn test_construction_succeeds_with_valid_config() {
        assert!(BillingClient::new(&config()).is_ok());
    }

    #[test]
    fn test_construction_fails_fast_without_base_url() {
        let mut config = config();
        config.api_url = String::new();

        let result = BillingClient::new(&config);
        assert!(matches!(result.unwrap_err(), BillingError::Config(_)));
    }

    #[test]
    fn test_construction_fails_fast_on_unparsable_base_url() {
        let mut config = config();
        config.api_url = "definitely not a url".to_owned();

        let result = BillingClient::new(&config);
        assert!(matches!(result.unwrap_err(), BillingError::Config(_)));
    }

    #[test]
    fn test_construction_fails_fast_on_empty_module_name() {
        let mut config = config();
        config.module_name = String::new();

        let result = BillingClient::new(&config);
        assert!(matches!(result.unwrap_err(), BillingError::Config(_)));
    }

    #[test]
    fn test_default_headers_standard_set() {
        let headers = default_headers(&config()).unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token-123");
        assert_eq!(
            headers.get(USER_AGENT).unwrap(),
            "storekit-billing (rbm_example)"
        );
        assert!(!headers.contains_key("sandbox"));
    }

    #[test]
    fn test_sandbox_header_only_in_sandbox_mode() {
        let mut config = config();
        config.sandbox = true;

        let headers = default_headers(&config).unwrap();
        assert_eq!(headers.get("sandbox").unwrap(), "true");
    }

    #[test]
    fn test_config_from_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
                module_name = "rbm_example"
                api_url = "https://billing-api.distribution.storekit.net"
                token = "token-123"
                sandbox = true

                [http]
                timeout_secs = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.module_name, "rbm_example");
        assert!(config.sandbox);
        assert_eq!(config.http.timeout_secs, 20);
        assert!(config.validate().is_ok());
    }
}
