//! High-level billing service facade.
//!
//! [`BillingService`] wires the [`BillingContext`] through environment
//! resolution into a configured [`BillingClient`], then answers the three
//! questions a module actually asks: who is the current customer, what is its
//! subscription to this module, and which plans does this module sell.

use crate::{
    client::{BillingClient, ClientConfig},
    context::{BillingContext, ModuleInfo},
    env::Environment,
    error::{BillingError, Result},
    response::ApiResponse,
    routes::PlansQuery,
    transport::HttpConfig,
};

/// Billing operations scoped to the shop and module of a [`BillingContext`].
///
/// # Examples
///
/// ```rust,no_run
/// use storekit_billing::{BillingContext, BillingService, ModuleInfo};
///
/// # async fn example() -> storekit_billing::Result<()> {
/// let context = BillingContext {
///     billing_env: Some("integration".to_owned()),
///     access_token: "eyJhbGciOi…".to_owned(),
///     shop_uuid: "b2581e4b-0030-4fc8-9bf2-7f01c550a946".to_owned(),
///     language_iso_code: "fr".to_owned(),
///     ..Default::default()
/// };
/// let module = ModuleInfo {
///     name: "rbm_example".to_owned(),
///     display_name: "RBM Example".to_owned(),
///     version: "1.0.3".to_owned(),
///     logo_path: None,
/// };
///
/// let service = BillingService::new(context, &module, "v1", None)?;
/// let subscription = service.current_subscription().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BillingService {
    client: BillingClient,
    context: BillingContext,
    api_version: String,
}

impl BillingService {
    /// Creates a service for the given context and module.
    ///
    /// The billing API base URL is resolved from the context's environment
    /// identifier; `api_url_override` only applies to the development tier,
    /// where no hosted URL exists.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Config`] when no API URL can be resolved
    /// (development tier without an override) or when the resulting client
    /// configuration is invalid. Fails at construction, not at first call.
    pub fn new(
        context: BillingContext,
        module: &ModuleInfo,
        api_version: impl Into<String>,
        api_url_override: Option<&str>,
    ) -> Result<Self> {
        let environment = Environment::from_name(context.billing_env.as_deref());
        let api_url = environment
            .api_base_url(api_url_override)
            .ok_or_else(|| {
                BillingError::Config(format!(
                    "no billing API URL for the {environment} tier; supply an explicit URL"
                ))
            })?;

        let client = BillingClient::new(&ClientConfig {
            module_name: module.name.clone(),
            api_url,
            token: context.access_token.clone(),
            sandbox: context.sandbox,
            http: HttpConfig::default(),
        })?;

        Ok(Self::with_client(context, client, api_version))
    }

    /// Creates a service over an already-built client.
    ///
    /// Used by tests and by hosts that construct the client themselves (for
    /// example around an injected transport).
    pub fn with_client(
        context: BillingContext,
        client: BillingClient,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            context,
            api_version: api_version.into(),
        }
    }

    /// Retrieves the billing customer associated with the current shop.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures.
    pub async fn current_customer(&self) -> Result<ApiResponse> {
        self.client
            .retrieve_customer(&self.context.shop_uuid, &self.api_version)
            .await
    }

    /// Retrieves the current shop's subscription to this module.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures.
    pub async fn current_subscription(&self) -> Result<ApiResponse> {
        self.client
            .retrieve_subscription(&self.context.shop_uuid, &self.api_version)
            .await
    }

    /// Retrieves the plans sold for this module, localized to the shop
    /// employee's language.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures.
    pub async fn module_plans(&self) -> Result<ApiResponse> {
        self.client
            .retrieve_plans(
                &PlansQuery::new(&self.context.language_iso_code),
                &self.api_version,
            )
            .await
    }
}
