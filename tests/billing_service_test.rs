//! Integration tests for the service facade: context wiring into routes and
//! fail-fast construction.

mod common;

use std::sync::Arc;

use common::RecordingTransport;
use serde_json::json;
use storekit_billing::{
    BillingClient, BillingContext, BillingError, BillingService, ModuleInfo, Transport,
};

const SHOP_UUID: &str = "b2581e4b-0030-4fc8-9bf2-7f01c550a946";

fn context() -> BillingContext {
    BillingContext {
        billing_env: Some("integration".to_owned()),
        access_token: "token-123".to_owned(),
        shop_uuid: SHOP_UUID.to_owned(),
        language_iso_code: "fr".to_owned(),
        ..Default::default()
    }
}

fn module() -> ModuleInfo {
    ModuleInfo {
        name: "rbm_example".to_owned(),
        display_name: "RBM Example".to_owned(),
        version: "1.0.3".to_owned(),
        logo_path: None,
    }
}

fn service(transport: &Arc<RecordingTransport>, api_version: &str) -> BillingService {
    let transport: Arc<dyn Transport> = transport.clone();
    let client = BillingClient::with_transport("rbm_example", transport);

    BillingService::with_client(context(), client, api_version)
}

#[tokio::test]
async fn test_current_customer_uses_shop_uuid_from_context() {
    let transport = Arc::new(RecordingTransport::new());
    transport.queue_json(200, &json!({"id": SHOP_UUID}));

    let result = service(&transport, "v1").current_customer().await.unwrap();

    assert_eq!(transport.routes(), vec![format!("v1/customers/{SHOP_UUID}")]);
    assert!(result.success);
}

#[tokio::test]
async fn test_current_subscription_route() {
    let transport = Arc::new(RecordingTransport::new());
    transport.queue_json(200, &json!({"plan_id": "rbm-advanced"}));

    service(&transport, "v1")
        .current_subscription()
        .await
        .unwrap();

    assert_eq!(
        transport.routes(),
        vec![format!("v1/customers/{SHOP_UUID}/subscriptions/rbm_example")]
    );
}

#[tokio::test]
async fn test_module_plans_use_context_language() {
    let transport = Arc::new(RecordingTransport::new());
    transport.queue_json(200, &json!({"results": []}));

    service(&transport, "v1").module_plans().await.unwrap();

    assert_eq!(
        transport.routes(),
        vec!["v1/products/rbm_example/plans?status=active&lang_iso_code=fr&limit=10".to_owned()]
    );
}

#[tokio::test]
async fn test_configured_api_version_reaches_every_route() {
    let transport = Arc::new(RecordingTransport::new());
    transport.queue_json(200, &json!({}));
    transport.queue_json(200, &json!({}));
    transport.queue_json(200, &json!({}));
    let service = service(&transport, "v2");

    service.current_customer().await.unwrap();
    service.current_subscription().await.unwrap();
    service.module_plans().await.unwrap();

    for route in transport.routes() {
        assert!(route.starts_with("v2/"), "route {route} misses the version");
    }
}

#[tokio::test]
async fn test_transport_failure_propagates_through_facade() {
    let transport = Arc::new(RecordingTransport::new());

    let result = service(&transport, "v1").current_customer().await;

    assert!(matches!(result.unwrap_err(), BillingError::Transport(_)));
}

#[test]
fn test_development_without_override_fails_at_construction() {
    let mut context = context();
    context.billing_env = Some("development".to_owned());

    let result = BillingService::new(context, &module(), "v1", None);

    assert!(matches!(result.unwrap_err(), BillingError::Config(_)));
}

#[test]
fn test_staging_environment_resolves_api_host() {
    let mut context = context();
    context.billing_env = Some("stage2".to_owned());

    // Construction parses the resolved URL, so a bad mapping would fail here.
    assert!(BillingService::new(context, &module(), "v1", None).is_ok());
}
