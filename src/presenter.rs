//! Billing UI bootstrap context assembly.
//!
//! The billing UI embedded in the host admin panel boots from a nested
//! configuration object: environment, UI URL, shop identity, localization,
//! module identity and branding. [`BillingPresenter`] assembles that object
//! from the [`BillingContext`], the [`ModuleInfo`] and per-page
//! [`PresentParams`], validating the required presentation inputs before any
//! other work.

use std::{
    fs,
    path::{Path, PathBuf},
};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Serialize;
use url::Url;

use crate::{
    context::{BillingContext, ModuleInfo},
    env::Environment,
    error::{BillingError, Result},
};

/// Presentation inputs the module vendor must provide.
#[derive(Debug, Clone, Default)]
pub struct PresentParams {
    /// Support contact shown in the billing UI. Required, must be a
    /// well-formed email address.
    pub email_support: String,

    /// Absolute URL of the module's terms of service. Required.
    pub tos_link: String,

    /// Absolute URL of the module's privacy policy. Required.
    pub privacy_link: String,

    /// Optional partner logo inlined next to the module logo.
    pub partner_logo: Option<PathBuf>,
}

/// Assembles the billing UI bootstrap context.
#[derive(Debug, Clone)]
pub struct BillingPresenter {
    context: BillingContext,
    module: ModuleInfo,
}

impl BillingPresenter {
    /// Creates a presenter for the given context and module.
    pub fn new(context: BillingContext, module: ModuleInfo) -> Self {
        Self { context, module }
    }

    /// Builds the UI bootstrap context.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Context`] — naming the offending field and its
    /// value — when the support email is missing or malformed, or when either
    /// required link is missing or not an absolute http(s) URL. Validation
    /// runs before anything else; no file is read and no URL is resolved for
    /// invalid input.
    pub fn present(&self, params: &PresentParams) -> Result<BillingUiContext> {
        validate_params(params)?;

        let environment = Environment::from_name(self.context.billing_env.as_deref());

        Ok(BillingUiContext {
            billing_env: environment.to_string(),
            billing_ui_url: environment.ui_base_url(),
            is_sandbox: self.context.sandbox,
            version_platform: self.context.platform_version.clone(),
            version_module: self.module.version.clone(),
            module_name: self.module.name.clone(),
            display_name: self.module.display_name.clone(),
            i18n: I18n {
                iso_code: self.context.language_iso_code.clone(),
            },
            refresh_token: self.context.refresh_token.clone().unwrap_or_default(),
            shop: Shop {
                uuid: self.context.shop_uuid.clone(),
            },
            user: User {
                email: self.context.user_email.clone().unwrap_or_default(),
            },
            module_logo: self
                .module
                .logo_path
                .as_deref()
                .map(encode_image)
                .unwrap_or_default(),
            partner_logo: params
                .partner_logo
                .as_deref()
                .map(encode_image)
                .unwrap_or_default(),
            module_tos_url: params.tos_link.clone(),
            module_privacy_url: params.privacy_link.clone(),
            email_support: params.email_support.clone(),
        })
    }
}

/// Nested configuration object the billing UI boots from.
///
/// Field names serialize in the camel-cased form the UI reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingUiContext {
    /// Canonical environment name (`production` when unset or unknown).
    pub billing_env: String,
    /// Billing UI base URL; `null` in the development tier.
    pub billing_ui_url: Option<String>,
    /// Sandbox marker forwarded to the UI.
    pub is_sandbox: bool,
    /// Host platform version.
    pub version_platform: String,
    /// Module version.
    pub version_module: String,
    /// Technical module name.
    pub module_name: String,
    /// Human-readable module name.
    pub display_name: String,
    /// Localization block.
    pub i18n: I18n,
    /// Refresh token for the UI session.
    pub refresh_token: String,
    /// Shop identity block.
    pub shop: Shop,
    /// User identity block.
    pub user: User,
    /// Module logo as a base64 data URI; empty when unavailable.
    pub module_logo: String,
    /// Partner logo as a base64 data URI; empty when unavailable.
    pub partner_logo: String,
    /// Terms-of-service link.
    pub module_tos_url: String,
    /// Privacy-policy link.
    pub module_privacy_url: String,
    /// Support contact email.
    pub email_support: String,
}

impl BillingUiContext {
    /// Wraps the context in the envelope the admin page template injects
    /// (`{"billingContext": {"context": …}}`).
    #[must_use]
    pub fn into_bootstrap(self) -> serde_json::Value {
        serde_json::json!({ "billingContext": { "context": self } })
    }
}

/// Localization block of the UI context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18n {
    /// ISO code of the UI language.
    pub iso_code: String,
}

/// Shop identity block of the UI context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shop {
    /// Shop unique identifier.
    pub uuid: String,
}

/// User identity block of the UI context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Shop account email; empty when unknown.
    pub email: String,
}

fn validate_params(params: &PresentParams) -> Result<()> {
    validate_email("emailSupport", &params.email_support)?;
    validate_absolute_url("tosLink", &params.tos_link)?;
    validate_absolute_url("privacyLink", &params.privacy_link)?;

    Ok(())
}

fn validate_email(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BillingError::Context(format!(
            "\"{field}\" must be provided (value={value})"
        )));
    }
    if !is_plausible_email(value) {
        return Err(BillingError::Context(format!(
            "\"{field}\" must be a valid email (value={value})"
        )));
    }

    Ok(())
}

fn validate_absolute_url(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BillingError::Context(format!(
            "\"{field}\" must be provided (value={value})"
        )));
    }

    let absolute = Url::parse(value)
        .ok()
        .is_some_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
    if !absolute {
        return Err(BillingError::Context(format!(
            "\"{field}\" must be a valid url (value={value})"
        )));
    }

    Ok(())
}

/// Structural email check: one `@`, non-empty local part, dotted domain, no
/// whitespace. Deliverability is the billing service's problem.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Inlines an image as a base64 data URI.
///
/// An unknown extension or an unreadable file yields an empty string: a
/// missing logo must not take the billing page down.
fn encode_image(path: &Path) -> String {
    let Some(mime) = mime_by_extension(path) else {
        return String::new();
    };
    let Ok(bytes) = fs::read(path) else {
        return String::new();
    };

    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

fn mime_by_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "gif" => Some("image/gif"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
