//! Deployment environments and base-URL resolution.
//!
//! Every billing request targets one deployment tier of the billing service.
//! The tier is selected by a string identifier supplied by the embedding
//! application (`development`, `integration`, `stage1`..`stage9`, `preprod`);
//! anything else, including an absent identifier, means production.
//!
//! Resolution is pure string construction over an immutable mapping: no I/O,
//! no global state, trivially testable in isolation from the network code.

use std::fmt;

/// Characters allowed to survive URL sanitization, in addition to ASCII
/// letters and digits.
const URL_CHARS: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Domain all hosted billing tiers live under.
const DOMAIN: &str = "storekit.net";

/// Hostname alias substituted for the `stage` prefix in API staging hosts.
///
/// UI staging hosts keep the full slot name (`billing-stage2.…`); API staging
/// hosts rewrite the prefix and keep the slot number (`billing-api-stg2.…`).
const STAGE_ALIAS: &str = "stg";

/// A deployment tier of the billing service.
///
/// Construct with [`Environment::from_name`]; unknown or absent identifiers
/// resolve to [`Environment::Production`], never to an error.
///
/// # Examples
///
/// ```
/// use storekit_billing::Environment;
///
/// let env = Environment::from_name(Some("stage2"));
/// assert_eq!(
///     env.api_base_url(None).as_deref(),
///     Some("https://billing-api-stg2.distribution-integration.storekit.net")
/// );
///
/// let env = Environment::from_name(None);
/// assert_eq!(
///     env.ui_base_url().as_deref(),
///     Some("https://billing.distribution.storekit.net")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development; URLs come from local configuration, not from here.
    Development,
    /// Shared integration tier.
    Integration,
    /// One of the nine numbered staging slots (`stage1`..`stage9`).
    Stage(u8),
    /// Pre-production tier.
    Preprod,
    /// Production (the default for unknown or absent identifiers).
    Production,
}

impl Environment {
    /// Resolves an environment identifier.
    ///
    /// Unknown identifiers (including malformed staging slots such as
    /// `stage0` or `stage12`) and `None` resolve to production.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => Self::Development,
            Some("integration") => Self::Integration,
            Some("preprod") => Self::Preprod,
            Some(other) => parse_stage(other).map_or(Self::Production, Self::Stage),
            None => Self::Production,
        }
    }

    /// Base URL of the billing UI for this tier.
    ///
    /// Returns `None` for [`Development`](Self::Development): the UI is
    /// expected to be configured by the local environment in that tier.
    #[must_use]
    pub fn ui_base_url(&self) -> Option<String> {
        match self {
            Self::Development => None,
            Self::Integration => Some(format!("https://billing.distribution-integration.{DOMAIN}")),
            Self::Stage(slot) => Some(format!(
                "https://billing-stage{slot}.distribution-integration.{DOMAIN}"
            )),
            Self::Preprod => Some(format!("https://billing.distribution-preprod.{DOMAIN}")),
            Self::Production => Some(format!("https://billing.distribution.{DOMAIN}")),
        }
    }

    /// Base URL of the billing API for this tier.
    ///
    /// For [`Development`](Self::Development) the caller-supplied override is
    /// sanitized (characters invalid in a URL are stripped, not rejected) and
    /// returned; with no override, `None` signals "use the locally configured
    /// default". All other tiers ignore the override.
    #[must_use]
    pub fn api_base_url(&self, override_url: Option<&str>) -> Option<String> {
        match self {
            Self::Development => override_url.map(sanitize_url),
            Self::Integration => Some(format!(
                "https://billing-api.distribution-integration.{DOMAIN}"
            )),
            Self::Stage(slot) => Some(format!(
                "https://billing-api-{STAGE_ALIAS}{slot}.distribution-integration.{DOMAIN}"
            )),
            Self::Preprod => Some(format!("https://billing-api.distribution-preprod.{DOMAIN}")),
            Self::Production => Some(format!("https://billing-api.distribution.{DOMAIN}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Integration => write!(f, "integration"),
            Self::Stage(slot) => write!(f, "stage{slot}"),
            Self::Preprod => write!(f, "preprod"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Parses a staging slot identifier. Only `stage1`..`stage9` are valid slots.
fn parse_stage(name: &str) -> Option<u8> {
    let digits = name.strip_prefix("stage")?;
    if digits.len() != 1 {
        return None;
    }
    match digits.parse::<u8>().ok()? {
        slot @ 1..=9 => Some(slot),
        _ => None,
    }
}

/// Strips characters that are invalid in a URL instead of rejecting the
/// input, matching the behavior callers of the development override rely on.
fn sanitize_url(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || URL_CHARS.contains(*c))
        .collect()
}
