//! Billing API route construction.
//!
//! Routes are rebuilt per call by pure functions: the client threads the API
//! version and the resource path through each request explicitly instead of
//! parking them in mutable state between calls.

use url::form_urlencoded;

/// Prefixes a resource route with an API version segment.
///
/// The route already carries its leading delimiter, so this is plain
/// concatenation; an empty version returns the route unchanged.
#[must_use]
pub fn versioned(api_version: &str, route: &str) -> String {
    if api_version.is_empty() {
        route.to_owned()
    } else {
        format!("{api_version}{route}")
    }
}

/// Route of a single billing customer.
#[must_use]
pub fn customer(customer_id: &str) -> String {
    format!("/customers/{customer_id}")
}

/// Route of the subscription a module's vendor sold to a customer.
#[must_use]
pub fn subscription(customer_id: &str, module_name: &str) -> String {
    format!("/customers/{customer_id}/subscriptions/{module_name}")
}

/// Route of a module's plan listing, query string included.
///
/// Query parameters are percent-encoded and emitted in a fixed order
/// (`status`, `lang_iso_code`, `limit`, then `offset`); the `offset`
/// parameter is omitted entirely when the query carries none.
#[must_use]
pub fn plans(module_name: &str, query: &PlansQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("status", &query.status);
    serializer.append_pair("lang_iso_code", &query.lang_iso_code);
    serializer.append_pair("limit", &query.limit.to_string());
    if let Some(offset) = &query.offset {
        serializer.append_pair("offset", offset);
    }

    format!("/products/{module_name}/plans?{}", serializer.finish())
}

/// Query parameters for plan listing.
///
/// # Examples
///
/// ```
/// use storekit_billing::PlansQuery;
///
/// let query = PlansQuery::new("fr");
/// assert_eq!(query.status, "active");
/// assert_eq!(query.limit, 10);
/// assert!(query.offset.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PlansQuery {
    /// ISO code of the language plans should be localized in.
    pub lang_iso_code: String,
    /// Plan status filter: `active`, `archived`, or any value the billing
    /// service accepts.
    pub status: String,
    /// Maximum number of plans to return.
    pub limit: u32,
    /// Opaque pagination cursor returned by a previous page; `None` on the
    /// first page.
    pub offset: Option<String>,
}

impl PlansQuery {
    /// Creates a query for the given language with the service defaults:
    /// `active` plans, 10 per page, first page.
    pub fn new(lang_iso_code: impl Into<String>) -> Self {
        Self {
            lang_iso_code: lang_iso_code.into(),
            status: "active".to_owned(),
            limit: 10,
            offset: None,
        }
    }
}
