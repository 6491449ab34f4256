//! Billing context supplied by the embedding application.
//!
//! The host platform knows which deployment tier it runs against, which shop
//! it is, and who the module is; this module is the single stable surface
//! through which that knowledge reaches the SDK. Values coming from the
//! account-identity service (shop UUID, tokens, account email) are treated as
//! opaque strings.

use std::path::PathBuf;

use serde::Deserialize;

/// Per-shop billing context.
///
/// One instance per request context; the SDK never mutates it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingContext {
    /// Environment identifier selecting the billing tier; `None` targets
    /// production.
    #[serde(default)]
    pub billing_env: Option<String>,

    /// Bearer token authenticating the shop against the billing API.
    pub access_token: String,

    /// Refresh token handed to the billing UI so it can renew its session.
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Whether billing runs in sandbox mode for this shop.
    #[serde(default)]
    pub sandbox: bool,

    /// Unique identifier of the shop, as issued by the account-identity
    /// service.
    pub shop_uuid: String,

    /// ISO code of the shop employee's language.
    pub language_iso_code: String,

    /// Email of the shop account, when known.
    #[serde(default)]
    pub user_email: Option<String>,

    /// Version of the host platform the module runs on.
    #[serde(default)]
    pub platform_version: String,
}

/// Identity of the calling module.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleInfo {
    /// Technical name, embedded in API routes and the `User-Agent` header.
    pub name: String,

    /// Human-readable name shown in the billing UI.
    pub display_name: String,

    /// Module version.
    pub version: String,

    /// Path to the module logo on disk, if it ships one.
    #[serde(default)]
    pub logo_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_toml() {
        let context: BillingContext = toml::from_str(
            r#"
                billing_env = "integration"
                access_token = "token-123"
                sandbox = true
                shop_uuid = "b2581e4b-0030-4fc8-9bf2-7f01c550a946"
                language_iso_code = "fr"
            "#,
        )
        .unwrap();

        assert_eq!(context.billing_env.as_deref(), Some("integration"));
        assert!(context.sandbox);
        assert_eq!(context.refresh_token, None);
        assert_eq!(context.user_email, None);
    }

    #[test]
    fn test_module_info_from_toml() {
        let module: ModuleInfo = toml::from_str(
            r#"
                name = "rbm_example"
                display_name = "RBM Example"
                version = "1.0.3"
            "#,
        )
        .unwrap();

        assert_eq!(module.name, "rbm_example");
        assert!(module.logo_path.is_none());
    }
}
