//! Billing SDK for Storekit modules.
//!
//! A module installed on a Storekit shop uses this crate to talk to the
//! centralized billing service — who is the current customer, what is its
//! subscription to this module, which plans does the module sell — and to
//! assemble the configuration object that boots the billing UI inside the
//! host admin panel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Host module     │  admin controller / hooks
//! └────────┬─────────┘
//!          │ BillingContext + ModuleInfo
//! ┌────────▼─────────────────────────────────────┐
//! │        storekit-billing (this crate)         │
//! │  ┌─────────────┐        ┌─────────────────┐  │
//! │  │ Presenter   │        │ BillingService  │  │
//! │  │ (UI boot    │        │  └ BillingClient│  │
//! │  │  context)   │        │     └ Transport │  │
//! │  └─────────────┘        └─────────────────┘  │
//! └────────┬─────────────────────────────────────┘
//!          │ HTTPS (GET, bearer token)
//! ┌────────▼─────────┐
//! │  Billing API     │  per-tier hosts, see [`Environment`]
//! └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storekit_billing::{BillingContext, BillingService, ModuleInfo};
//!
//! # async fn example() -> storekit_billing::Result<()> {
//! let context = BillingContext {
//!     billing_env: None, // production
//!     access_token: "eyJhbGciOi…".to_owned(),
//!     shop_uuid: "b2581e4b-0030-4fc8-9bf2-7f01c550a946".to_owned(),
//!     language_iso_code: "fr".to_owned(),
//!     ..Default::default()
//! };
//! let module = ModuleInfo {
//!     name: "rbm_example".to_owned(),
//!     display_name: "RBM Example".to_owned(),
//!     version: "1.0.3".to_owned(),
//!     logo_path: None,
//! };
//!
//! let service = BillingService::new(context, &module, "v1", None)?;
//!
//! let subscription = service.current_subscription().await?;
//! if subscription.success {
//!     println!("subscription: {:?}", subscription.body);
//! } else {
//!     // 404 and friends land here, not in Err.
//!     println!("no subscription (status {})", subscription.http_status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Result envelopes vs transport errors
//!
//! Every *completed* HTTP exchange — error statuses included — returns an
//! [`ApiResponse`] envelope (`success`, `http_status`, `body`), so business
//! conditions like "customer not found" are branches, not exceptions. Only a
//! request that never completed (timeout, connection failure) returns an
//! [`Err`](BillingError).
//!
//! # Module Organization
//!
//! - [`env`]: deployment tiers and base-URL resolution
//! - [`routes`]: per-call route construction
//! - [`response`]: the result envelope
//! - [`transport`]: transport abstraction + default reqwest implementation
//! - [`client`]: the low-level API client
//! - [`context`], [`service`]: host-facing context and facade
//! - [`presenter`]: billing UI bootstrap context
//! - [`error`]: error types

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod context;
pub mod env;
pub mod error;
pub mod presenter;
pub mod response;
pub mod routes;
pub mod service;
pub mod transport;

pub use client::{BillingClient, ClientConfig};
pub use context::{BillingContext, ModuleInfo};
pub use env::Environment;
pub use error::{BillingError, Result};
pub use presenter::{BillingPresenter, BillingUiContext, PresentParams};
pub use response::{ApiResponse, ResponseBody};
pub use routes::PlansQuery;
pub use service::BillingService;
pub use transport::{HttpConfig, HttpTransport, Transport, TransportResponse};
