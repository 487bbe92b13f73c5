//! Behavior tests for order placement, lookup and resends.

use raas_core::{Address, DeliveryMethod, OrderRequest, Person, RaasError};
use raas_tests::{api_path, client_for, TEST_ACCOUNT};
use serde_json::{json, Value};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn order_json() -> Value {
    json!({
        "referenceOrderID": "RA-240301-0001",
        "externalRefID": "ext-1",
        "customerIdentifier": "C-1",
        "accountIdentifier": TEST_ACCOUNT,
        "utid": "U000001",
        "amountCharged": {"value": 5.0, "currencyCode": "USD", "total": 5.0},
        "reward": {"credentials": {"Redemption URL": "https://redeem.test/abc"}},
        "status": "COMPLETE"
    })
}

fn field_errors() -> Value {
    json!({
        "timestamp": "2024-03-01T17:39:23.758Z",
        "requestId": "b1c9",
        "path": "/raas/v2/orders",
        "httpCode": 400,
        "httpPhrase": "Bad Request",
        "errors": [{
            "path": "amount",
            "message": "must be greater than or equal to 1",
            "invalidValue": 0.5,
            "constraint": "Min"
        }]
    })
}

fn order_request() -> OrderRequest {
    OrderRequest {
        external_ref_id: String::from("ext-1"),
        ..OrderRequest::new("C-1", "U000001", 5.0)
    }
    .with_recipient(Person {
        first_name: String::from("Rae"),
        email: String::from("rae@example.test"),
        address: Some(Address::default()),
        ..Person::default()
    })
}

#[tokio::test]
async fn create_order_sends_sanitized_payload() {
    // Given: an order endpoint that accepts the pruned payload
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path(api_path("/orders")))
        .and(matchers::body_partial_json(json!({
            "accountIdentifier": TEST_ACCOUNT,
            "customerIdentifier": "C-1",
            "amount": 5.0,
            "deliveryMethod": "",
            "sendEmail": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_json()))
        .expect(1)
        .mount(&server)
        .await;

    // When: an order is placed by a client with the send-email default on
    let order = client_for(&server, true)
        .create_order(&order_request())
        .await
        .expect("order should be placed");

    // Then: the response decodes and empty fields never left the client
    assert_eq!(order.reference_order_id, "RA-240301-0001");
    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    assert!(body.get("notes").is_none());
    assert!(body.get("emailSubject").is_none());
    assert!(body["recipient"].get("address").is_none());
}

#[tokio::test]
async fn explicit_delivery_method_suppresses_legacy_send_email() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path(api_path("/orders")))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_json()))
        .mount(&server)
        .await;

    client_for(&server, true)
        .create_order(&order_request().with_delivery_method(DeliveryMethod::Email))
        .await
        .expect("order should be placed");

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(body["deliveryMethod"], json!("EMAIL"));
    assert!(body.get("sendEmail").is_none());
}

#[tokio::test]
async fn structured_rejection_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path(api_path("/orders")))
        .respond_with(ResponseTemplate::new(400).set_body_json(field_errors()))
        .mount(&server)
        .await;

    let error = client_for(&server, false)
        .create_order(&order_request())
        .await
        .expect_err("400 must fail");

    match &error {
        RaasError::Api { status, errors } => {
            assert_eq!(*status, 400);
            assert_eq!(errors[0].invalid_value, "0.5");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        error.to_string(),
        "API error (status 400): amount: must be greater than or equal to 1 \
         (invalid value '0.5', constraint 'Min')"
    );
}

#[tokio::test]
async fn embedded_errors_in_success_response_are_not_ignored() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path(api_path("/orders")))
        .respond_with(ResponseTemplate::new(201).set_body_json(field_errors()))
        .mount(&server)
        .await;

    let error = client_for(&server, false)
        .create_order(&order_request())
        .await
        .expect_err("embedded errors must fail");

    assert!(matches!(error, RaasError::Api { status: 201, .. }));
}

#[tokio::test]
async fn get_order_without_structured_body_uses_status_error() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path(api_path("/orders/RA-missing")))
        .respond_with(ResponseTemplate::new(404).set_body_string("order not found"))
        .mount(&server)
        .await;

    let error = client_for(&server, false)
        .get_order("RA-missing")
        .await
        .expect_err("404 must fail");

    assert_eq!(
        error.to_string(),
        "get order failed with status 404 (Not Found): order not found"
    );
}

#[tokio::test]
async fn resend_order_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path(api_path("/orders/RA-240301-0001/resends")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, false)
        .resend_order("RA-240301-0001")
        .await
        .expect("204 should be accepted");
}
